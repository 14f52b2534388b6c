//! Derived progress views rendered by the vault screen.

use serde::{Deserialize, Serialize};
use shared_types::{capped_ratio, Amount};

/// Funding progress toward the goal.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FundingProgress {
    pub raised: Amount,
    pub goal: Amount,
    /// `raised / goal`, capped at 1.0.
    pub ratio: f64,
    pub overfunded: bool,
}

impl FundingProgress {
    pub fn new(raised: Amount, goal: Amount) -> Self {
        Self {
            raised,
            goal,
            ratio: capped_ratio(raised, goal),
            overfunded: raised > goal,
        }
    }

    pub fn percent(&self) -> u8 {
        (self.ratio * 100.0).round() as u8
    }
}

/// Verification status of required milestones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilestoneProgress {
    pub required: usize,
    pub verified: usize,
    /// At least one required milestone exists and all are verified.
    pub all_met: bool,
    /// A required milestone was rejected; nothing in the lifecycle can clear it.
    pub blocked_by_rejection: bool,
}
