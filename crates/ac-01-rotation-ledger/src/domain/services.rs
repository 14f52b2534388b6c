//! Domain services: payout arithmetic and advisory checks.

use serde::{Deserialize, Serialize};
use shared_types::Amount;

use super::entities::{Circle, CYCLE_MONTHS, TOTAL_SEATS};

/// Recommended ratio of monthly income to monthly contribution.
pub const INCOME_MULTIPLIER: Amount = 3;

/// Payout per member: every seat's contribution for one month.
pub fn payout_amount(contribution: Amount) -> Amount {
    contribution.saturating_mul(TOTAL_SEATS as Amount)
}

/// Fraction of the cycle's payouts already made.
pub fn cycle_progress(circle: &Circle) -> f64 {
    f64::from(circle.current_month.min(CYCLE_MONTHS)) / f64::from(CYCLE_MONTHS)
}

/// How a member's payout splits between the shared vault and their pocket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutPlan {
    pub total_payout: Amount,
    pub vault_contribution: Amount,
    pub personal_amount: Amount,
}

pub fn payout_plan(circle: &Circle) -> PayoutPlan {
    let total_payout = circle.payout_amount();
    let vault_contribution = circle.vault_contribution.unwrap_or(0);
    PayoutPlan {
        total_payout,
        vault_contribution,
        personal_amount: total_payout.saturating_sub(vault_contribution),
    }
}

/// Income check shown to applicants. Never blocks a join request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum IncomeAdvisory {
    Sufficient,
    BelowRecommended { recommended: Amount },
}

pub fn income_advisory(monthly_income: Amount, contribution: Amount) -> IncomeAdvisory {
    let recommended = contribution.saturating_mul(INCOME_MULTIPLIER);
    if monthly_income < recommended {
        IncomeAdvisory::BelowRecommended { recommended }
    } else {
        IncomeAdvisory::Sufficient
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::test_support::active_circle;

    #[test]
    fn test_payout_amount() {
        assert_eq!(payout_amount(200), 800);
        assert_eq!(payout_amount(Amount::MAX), Amount::MAX);
    }

    #[test]
    fn test_payout_plan_subtracts_set_aside() {
        let circle = active_circle(200);
        let plan = payout_plan(&circle);
        assert_eq!(plan.total_payout, 800);
        assert_eq!(plan.vault_contribution, 50);
        assert_eq!(plan.personal_amount, 750);
    }

    #[test]
    fn test_cycle_progress() {
        let mut circle = active_circle(100);
        assert_eq!(cycle_progress(&circle), 0.0);
        circle.current_month = 2;
        assert_eq!(cycle_progress(&circle), 0.5);
    }

    #[test]
    fn test_income_advisory() {
        assert_eq!(income_advisory(600, 200), IncomeAdvisory::Sufficient);
        assert_eq!(
            income_advisory(599, 200),
            IncomeAdvisory::BelowRecommended { recommended: 600 }
        );
    }
}
