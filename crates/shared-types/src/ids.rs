//! # Entity Identifiers
//!
//! String-backed newtypes so a `CircleId` can never be passed where a `VaultId`
//! is expected. Generated ids carry a kind prefix (`circle_`, `vault_`, ...)
//! followed by a v4 UUID.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Prefix used by [`Self::generate`].
            pub const PREFIX: &'static str = $prefix;

            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Fresh random id.
            pub fn generate() -> Self {
                Self(format!("{}_{}", $prefix, Uuid::new_v4().simple()))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

entity_id!(
    /// Platform member.
    UserId,
    "user"
);
entity_id!(
    /// Rotating savings circle.
    CircleId,
    "circle"
);
entity_id!(
    /// Pending application to join a circle.
    JoinRequestId,
    "req"
);
entity_id!(
    /// Shared fund with milestone-gated release.
    VaultId,
    "vault"
);
entity_id!(VaultFamilyId, "family");
entity_id!(MilestoneId, "ms");
entity_id!(MediaId, "media");
entity_id!(MessageId, "msg");
entity_id!(VoteId, "vote");
entity_id!(
    /// Marketplace listing or opportunity card.
    ListingId,
    "item"
);
entity_id!(PostId, "post");
entity_id!(NotificationId, "notif");
entity_id!(ConversationId, "conv");
entity_id!(
    /// Course in the learning hub.
    ModuleId,
    "module"
);
