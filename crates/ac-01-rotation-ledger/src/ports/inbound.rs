//! Driving Ports (API - Inbound)
//!
//! Commands and queries the presentation layer issues against circles.

use shared_types::{Amount, CircleId, DomainResult, JoinRequestId, MemberProfile, UserId};

use crate::domain::{
    Circle, CircleDraft, CycleOutcome, CycleResolution, JoinDecision, JoinRequest,
    JoinResolution, Payout,
};

/// Primary Rotation Ledger API.
pub trait RotationLedgerApi: Send + Sync {
    /// Create a recruiting circle with the organizer in the first seat.
    fn create_circle(&self, organizer: MemberProfile, draft: CircleDraft) -> DomainResult<Circle>;

    /// Submit an application to join a circle.
    ///
    /// `monthly_income` is recorded for the organizer; it is never validated here.
    fn request_join(
        &self,
        circle_id: &CircleId,
        applicant: MemberProfile,
        monthly_income: Amount,
        message: &str,
    ) -> DomainResult<JoinRequest>;

    /// Approve or decline a pending join request.
    fn resolve_join_request(
        &self,
        circle_id: &CircleId,
        request_id: &JoinRequestId,
        decision: JoinDecision,
    ) -> DomainResult<JoinResolution>;

    /// Post a member's fixed monthly contribution.
    fn post_contribution(
        &self,
        circle_id: &CircleId,
        member_id: &UserId,
        amount: Amount,
    ) -> DomainResult<Circle>;

    /// Pay the current rotation slot and move to the next month.
    fn advance_cycle(&self, circle_id: &CircleId) -> DomainResult<Payout>;

    /// Record a member's end-of-cycle ballot.
    fn cast_cycle_vote(
        &self,
        circle_id: &CircleId,
        member_id: &UserId,
        outcome: CycleOutcome,
    ) -> DomainResult<Option<CycleOutcome>>;

    /// Apply the end-of-cycle decision.
    fn resolve_cycle_vote(
        &self,
        circle_id: &CircleId,
        outcome: CycleOutcome,
    ) -> DomainResult<CycleResolution>;

    fn get_circles(&self) -> Vec<Circle>;

    fn get_circle_by_id(&self, circle_id: &CircleId) -> Option<Circle>;

    /// Active or voting circles the user sits in.
    fn get_my_circles(&self, user_id: &UserId) -> Vec<Circle>;

    fn get_recruiting_circles(&self) -> Vec<Circle>;

    fn active_count(&self) -> usize;

    /// Circles past their last payout (voting or completed).
    fn completed_count(&self) -> usize;

    /// Case-insensitive substring match over name and description.
    fn search_circles(&self, query: &str) -> Vec<Circle>;
}
