//! # Rotation Ledger Service
//!
//! Implements [`RotationLedgerApi`] over an injected [`CircleRepository`] and
//! [`TimeSource`]. Each command is one atomic repository update.


use serde::{Deserialize, Serialize};
use shared_types::{
    Amount, CircleId, DomainResult, JoinRequestId, MemberProfile, TimeSource,
    UserId,
};

use crate::domain::{
    Circle, CircleDraft, CircleStatus, CycleOutcome, CycleResolution, JoinDecision, JoinRequest,
    JoinResolution, Payout, RotationPolicy,
};
use crate::ports::inbound::RotationLedgerApi;
use crate::ports::outbound::CircleRepository;

/// Rotation Ledger configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Payout order assignment when a circle fills.
    pub rotation_policy: RotationPolicy,
}

pub struct RotationLedgerService<R, T>
where
    R: CircleRepository,
    T: TimeSource,
{
    repository: R,
    time_source: T,
    config: LedgerConfig,
}

impl<R, T> RotationLedgerService<R, T>
where
    R: CircleRepository,
    T: TimeSource,
{
    pub fn new(repository: R, time_source: T, config: LedgerConfig) -> Self {
        Self {
            repository,
            time_source,
            config,
        }
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Insert a fully formed circle (mock dataset loading).
    pub fn import_circle(&self, circle: Circle) -> DomainResult<()> {
        tracing::debug!("[ac-01] Importing circle {} ({:?})", circle.id, circle.status);
        self.repository.insert(circle)
    }

    fn filter(&self, predicate: impl Fn(&Circle) -> bool) -> Vec<Circle> {
        self.repository
            .list()
            .into_iter()
            .filter(|c| predicate(c))
            .collect()
    }
}

fn log_rejection<T>(command: &str, circle_id: &CircleId, result: DomainResult<T>) -> DomainResult<T> {
    if let Err(err) = &result {
        tracing::warn!("[ac-01] {} rejected for circle {}: {}", command, circle_id, err);
    }
    result
}

impl<R, T> RotationLedgerApi for RotationLedgerService<R, T>
where
    R: CircleRepository,
    T: TimeSource,
{
    fn create_circle(&self, organizer: MemberProfile, draft: CircleDraft) -> DomainResult<Circle> {
        let organizer_id = organizer.id.clone();
        let circle = Circle::create(CircleId::generate(), draft, organizer, self.time_source.now())
            .inspect_err(|err| {
                tracing::warn!("[ac-01] Circle creation by {} rejected: {}", organizer_id, err)
            })?;
        self.repository.insert(circle.clone())?;
        tracing::info!(
            "[ac-01] Circle {} created by {} (contribution {})",
            circle.id,
            organizer_id,
            circle.contribution
        );
        Ok(circle)
    }

    fn request_join(
        &self,
        circle_id: &CircleId,
        applicant: MemberProfile,
        monthly_income: Amount,
        message: &str,
    ) -> DomainResult<JoinRequest> {
        let now = self.time_source.now();
        let result = self.repository.update(circle_id, |circle| {
            circle.submit_request(
                JoinRequestId::generate(),
                applicant,
                monthly_income,
                message.trim().to_string(),
                now,
            )
        });
        let request = log_rejection("Join request", circle_id, result)?;
        tracing::info!(
            "[ac-01] Join request {} from {} on circle {}",
            request.id,
            request.applicant.id,
            circle_id
        );
        Ok(request)
    }

    fn resolve_join_request(
        &self,
        circle_id: &CircleId,
        request_id: &JoinRequestId,
        decision: JoinDecision,
    ) -> DomainResult<JoinResolution> {
        let now = self.time_source.now();
        let policy = self.config.rotation_policy;
        let result = self.repository.update(circle_id, |circle| {
            circle.resolve_request(request_id, decision, &policy, now)
        });
        let resolution = log_rejection("Join resolution", circle_id, result)?;
        tracing::info!(
            "[ac-01] Join request {} {:?} on circle {}",
            request_id,
            resolution.request.status,
            circle_id
        );
        if resolution.activated {
            tracing::info!(
                "[ac-01] Circle {} is full and active (rotation: {})",
                circle_id,
                policy
            );
        }
        Ok(resolution)
    }

    fn post_contribution(
        &self,
        circle_id: &CircleId,
        member_id: &UserId,
        amount: Amount,
    ) -> DomainResult<Circle> {
        let result = self.repository.update(circle_id, |circle| {
            circle.post_contribution(member_id, amount)?;
            Ok(circle.clone())
        });
        let circle = log_rejection("Contribution", circle_id, result)?;
        tracing::info!(
            "[ac-01] {} contributed {} to circle {} (month {})",
            member_id,
            amount,
            circle_id,
            circle.current_month + 1
        );
        Ok(circle)
    }

    fn advance_cycle(&self, circle_id: &CircleId) -> DomainResult<Payout> {
        let now = self.time_source.now();
        let result = self.repository.update(circle_id, |circle| {
            let payout = circle.advance_cycle(now)?;
            Ok((payout, circle.status))
        });
        let (payout, status) = log_rejection("Cycle advance", circle_id, result)?;
        tracing::info!(
            "[ac-01] Circle {} paid {} to {} for month {}",
            circle_id,
            payout.amount,
            payout.recipient,
            payout.month
        );
        if status == CircleStatus::Voting {
            tracing::info!("[ac-01] Circle {} finished its cycle, voting opened", circle_id);
        }
        Ok(payout)
    }

    fn cast_cycle_vote(
        &self,
        circle_id: &CircleId,
        member_id: &UserId,
        outcome: CycleOutcome,
    ) -> DomainResult<Option<CycleOutcome>> {
        let now = self.time_source.now();
        let result = self.repository.update(circle_id, |circle| {
            circle.cast_ballot(member_id, outcome, now)?;
            Ok(circle.ballot_leader())
        });
        let leader = log_rejection("Cycle vote", circle_id, result)?;
        tracing::debug!(
            "[ac-01] {} voted {:?} on circle {} (leader: {:?})",
            member_id,
            outcome,
            circle_id,
            leader
        );
        Ok(leader)
    }

    fn resolve_cycle_vote(
        &self,
        circle_id: &CircleId,
        outcome: CycleOutcome,
    ) -> DomainResult<CycleResolution> {
        let result = self
            .repository
            .update(circle_id, |circle| circle.resolve_vote(outcome));
        let resolution = log_rejection("Cycle resolution", circle_id, result)?;
        match &resolution {
            CycleResolution::Restarted => {
                tracing::info!("[ac-01] Circle {} restarted for a new cycle", circle_id)
            }
            CycleResolution::Ended => tracing::info!("[ac-01] Circle {} completed", circle_id),
            CycleResolution::ConvertedToVault(conversion) => tracing::info!(
                "[ac-01] Circle {} converted into vault {}",
                circle_id,
                conversion.vault_id
            ),
        }
        Ok(resolution)
    }

    fn get_circles(&self) -> Vec<Circle> {
        self.repository.list()
    }

    fn get_circle_by_id(&self, circle_id: &CircleId) -> Option<Circle> {
        self.repository.get(circle_id)
    }

    fn get_my_circles(&self, user_id: &UserId) -> Vec<Circle> {
        self.filter(|c| {
            matches!(c.status, CircleStatus::Active | CircleStatus::Voting) && c.is_member(user_id)
        })
    }

    fn get_recruiting_circles(&self) -> Vec<Circle> {
        self.filter(|c| c.status == CircleStatus::Recruiting)
    }

    fn active_count(&self) -> usize {
        self.filter(|c| c.status == CircleStatus::Active).len()
    }

    fn completed_count(&self) -> usize {
        self.filter(|c| matches!(c.status, CircleStatus::Completed | CircleStatus::Voting))
            .len()
    }

    fn search_circles(&self, query: &str) -> Vec<Circle> {
        let needle = query.trim().to_lowercase();
        self.filter(|c| {
            c.name.to_lowercase().contains(&needle)
                || c.description.to_lowercase().contains(&needle)
        })
    }
}
