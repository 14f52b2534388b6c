//! Payout rotation assignment.
//!
//! The rotation is fixed when the last seat fills and never changes within a
//! cycle, so every member is paid exactly once per cycle.

use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How payout slots are handed out when a circle activates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RotationPolicy {
    /// Members are paid in the order they joined.
    #[default]
    JoinOrder,
    /// Deterministic shuffle from a deployment seed mixed with the circle id.
    SeededDraw { seed: u64 },
}

impl RotationPolicy {
    /// Returns the payout slot for each of `members` seats, indexed by join order.
    ///
    /// `circle_key` keeps two circles under the same seed from drawing the same
    /// permutation.
    pub fn assign(&self, members: usize, circle_key: &str) -> Vec<u8> {
        let mut slots: Vec<u8> = (0..members).map(|i| i as u8).collect();
        if let RotationPolicy::SeededDraw { seed } = self {
            let mut rng = StdRng::seed_from_u64(mix_seed(*seed, circle_key));
            slots.shuffle(&mut rng);
        }
        slots
    }
}

/// FNV-1a over the key bytes, starting from the deployment seed.
fn mix_seed(seed: u64, key: &str) -> u64 {
    const PRIME: u64 = 0x0000_0100_0000_01b3;
    key.bytes().fold(seed ^ 0xcbf2_9ce4_8422_2325, |hash, byte| {
        (hash ^ u64::from(byte)).wrapping_mul(PRIME)
    })
}

impl fmt::Display for RotationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RotationPolicy::JoinOrder => f.write_str("join_order"),
            RotationPolicy::SeededDraw { seed } => write!(f, "seeded:{}", seed),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown rotation policy '{0}' (expected 'join_order' or 'seeded:<u64>')")]
pub struct ParseRotationPolicyError(pub String);

impl FromStr for RotationPolicy {
    type Err = ParseRotationPolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("join_order") {
            return Ok(RotationPolicy::JoinOrder);
        }
        trimmed
            .strip_prefix("seeded:")
            .and_then(|seed| seed.parse().ok())
            .map(|seed| RotationPolicy::SeededDraw { seed })
            .ok_or_else(|| ParseRotationPolicyError(s.to_string()))
    }
}
