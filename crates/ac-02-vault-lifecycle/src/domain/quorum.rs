//! Quorum arithmetic.
//!
//! Release needs approvals from a majority of contributors:
//! `approvals >= ceil(contributors / 2)`.
//!
//! | Contributors | Approvals needed |
//! |--------------|------------------|
//! | 1 | 1 |
//! | 2 | 1 |
//! | 3 | 2 |
//! | 4 | 2 |
//! | 5 | 3 |

use serde::{Deserialize, Serialize};

/// Approvals required for `contributors` voters.
pub fn majority_threshold(contributors: usize) -> usize {
    contributors.div_ceil(2)
}

/// A vault without contributors is never eligible.
pub fn release_eligible(approvals: usize, contributors: usize) -> bool {
    contributors > 0 && approvals >= majority_threshold(contributors)
}

/// Vote counts for the current release round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteTally {
    pub approvals: usize,
    pub denials: usize,
    pub total_voters: usize,
    pub voted: usize,
    pub majority: usize,
    pub passed: bool,
}

impl VoteTally {
    pub fn new(approvals: usize, denials: usize, total_voters: usize) -> Self {
        Self {
            approvals,
            denials,
            total_voters,
            voted: approvals + denials,
            majority: majority_threshold(total_voters),
            passed: release_eligible(approvals, total_voters),
        }
    }

    pub fn undecided(&self) -> usize {
        self.total_voters.saturating_sub(self.voted)
    }
}
