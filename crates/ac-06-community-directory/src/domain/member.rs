//! Member records.

use serde::{Deserialize, Serialize};
use shared_types::{Amount, DomainError, DomainResult, MemberProfile, Timestamp, UserId};

/// A platform member as the profile screens show them.
///
/// The storefront is not stored here; it is whatever the catalog lists under
/// the member's id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub profile: MemberProfile,
    pub bio: String,
    pub joined_at: Timestamp,
    /// Circles the member currently sits in.
    pub circles_count: u32,
    pub total_saved: Amount,
    pub is_business_owner: bool,
}

impl Member {
    pub fn new(profile: MemberProfile, joined_at: Timestamp) -> Self {
        Self {
            profile,
            bio: String::new(),
            joined_at,
            circles_count: 0,
            total_saved: 0,
            is_business_owner: false,
        }
    }

    pub fn id(&self) -> &UserId {
        &self.profile.id
    }

    pub fn username(&self) -> &str {
        &self.profile.username
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.profile.username.trim().is_empty() {
            return Err(DomainError::precondition(format!(
                "member {} has no username",
                self.profile.id
            )));
        }
        if !(0.0..=1.0).contains(&self.profile.on_time_rate) {
            return Err(DomainError::precondition(format!(
                "on-time rate {} for {} is outside [0, 1]",
                self.profile.on_time_rate, self.profile.id
            )));
        }
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::member;
    use super::*;

    #[test]
    fn test_validate_rejects_blank_username() {
        assert!(member("u1", "  ").validate().is_err());
        assert!(member("u1", "maya").validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_rate_out_of_range() {
        let mut m = member("u1", "maya");
        m.profile.on_time_rate = 1.2;
        let err = m.validate().unwrap_err();
        assert!(matches!(err, DomainError::PreconditionFailed { .. }));
    }
}
