//! # Core Domain Primitives
//!
//! Monetary amounts, timestamps and the member profile shown next to every
//! circle seat, join request and vault contributor.

use serde::{Deserialize, Serialize};

use crate::ids::{CircleId, UserId, VaultId};

/// Monetary amount in whole currency units.
pub type Amount = u64;

/// Milliseconds since UNIX epoch.
pub type Timestamp = u64;

/// Public profile of a platform member.
///
/// Reputation fields (`completed_cycles`, `on_time_rate`) are informational:
/// organizers read them when reviewing join requests, no rule consumes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberProfile {
    pub id: UserId,
    pub username: String,
    pub avatar: String,
    /// Number of full circle cycles completed.
    pub completed_cycles: u32,
    /// Fraction of contributions made on time, in `[0, 1]`.
    pub on_time_rate: f64,
    /// Human readable account age ("2 yrs").
    pub account_age: String,
}

impl MemberProfile {
    /// Minimal profile for a newly registered member.
    pub fn new(id: impl Into<UserId>, username: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            avatar: format!("https://i.pravatar.cc/150?u={}", id),
            id,
            username: username.into(),
            completed_cycles: 0,
            on_time_rate: 1.0,
            account_age: "new".to_string(),
        }
    }

    /// On-time rate as a rounded percentage.
    pub fn on_time_percent(&self) -> u8 {
        (self.on_time_rate.clamp(0.0, 1.0) * 100.0).round() as u8
    }
}

/// Hand-off from a circle whose members voted to pool their set-asides into
/// a vault. Produced by the rotation ledger, consumed by the vault lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircleConversion {
    /// Id reserved for the new vault.
    pub vault_id: VaultId,
    pub circle_id: CircleId,
    pub name: String,
    pub description: String,
    pub organizer: MemberProfile,
    /// Every circle member, in rotation order.
    pub members: Vec<MemberProfile>,
    /// Amount each member set aside from their payout.
    pub set_aside_per_member: Amount,
}

/// Ratio of `part` to `whole`, capped at 1.0. Zero `whole` yields 0.0.
pub fn capped_ratio(part: Amount, whole: Amount) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    (part as f64 / whole as f64).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_profile_defaults() {
        let profile = MemberProfile::new("u1", "Alex Miller");
        assert_eq!(profile.id.as_str(), "u1");
        assert_eq!(profile.completed_cycles, 0);
        assert_eq!(profile.on_time_percent(), 100);
        assert!(profile.avatar.ends_with("u1"));
    }

    #[test]
    fn test_capped_ratio() {
        assert_eq!(capped_ratio(0, 0), 0.0);
        assert_eq!(capped_ratio(250, 1000), 0.25);
        assert_eq!(capped_ratio(1500, 1000), 1.0);
    }
}
