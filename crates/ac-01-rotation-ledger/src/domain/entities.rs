//! Core domain entities for the Rotation Ledger.
//!
//! Circle state machine:
//! ```text
//! [RECRUITING] ──4th seat filled──→ [ACTIVE] ──month 4 paid out──→ [VOTING]
//!                                      ↑                              │
//!                                      └────────── restart ───────────┤
//!                                                                     ├── end ──────────────→ [COMPLETED]
//!                                                                     └── convert_to_vault ─→ [COMPLETED] + new vault
//! ```

use serde::{Deserialize, Serialize};
use shared_types::{
    Amount, CircleConversion, CircleId, DomainError, DomainResult, EntityKind, JoinRequestId,
    MemberProfile, Timestamp, UserId, VaultId,
};

use super::rotation::RotationPolicy;
use super::services::payout_amount;

/// Seats per circle.
pub const TOTAL_SEATS: usize = 4;

/// Months per cycle. One payout per month.
pub const CYCLE_MONTHS: u8 = 4;

/// Circle lifecycle status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CircleStatus {
    /// Seats still open.
    #[default]
    Recruiting,
    /// Contributions and payouts in progress.
    Active,
    /// All payouts made, members deciding what comes next.
    Voting,
    /// Closed. Terminal.
    Completed,
}

/// A seated member.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CircleMember {
    pub profile: MemberProfile,
    /// Contribution posted for the current month.
    pub has_paid: bool,
    /// Zero-based payout slot. Assigned when the circle fills.
    pub payout_order: Option<u8>,
    pub joined_at: Timestamp,
}

impl CircleMember {
    fn seated(profile: MemberProfile, joined_at: Timestamp) -> Self {
        Self {
            profile,
            has_paid: false,
            payout_order: None,
            joined_at,
        }
    }

    pub fn id(&self) -> &UserId {
        &self.profile.id
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JoinRequestStatus {
    Pending,
    Approved,
    Declined,
}

/// Organizer decision on a join request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JoinDecision {
    Approve,
    Decline,
}

/// A prospective member's application. Immutable once resolved.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JoinRequest {
    pub id: JoinRequestId,
    pub applicant: MemberProfile,
    pub status: JoinRequestStatus,
    /// Declared monthly income. Advisory only.
    pub monthly_income: Amount,
    pub message: String,
    pub submitted_at: Timestamp,
    pub resolved_at: Option<Timestamp>,
}

impl JoinRequest {
    pub fn is_pending(&self) -> bool {
        self.status == JoinRequestStatus::Pending
    }
}

/// What members decide once every payout of a cycle has been made.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CycleOutcome {
    /// Run another 4-month cycle with the same members.
    Restart,
    /// Pool the members' set-asides into a new vault and close the circle.
    ConvertToVault,
    /// Everyone keeps their payout; the circle closes.
    End,
}

/// One member's ballot in the end-of-cycle vote.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleBallot {
    pub member: UserId,
    pub outcome: CycleOutcome,
    pub cast_at: Timestamp,
}

/// A monthly payout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payout {
    pub recipient: UserId,
    pub amount: Amount,
    /// One-based month within the cycle.
    pub month: u8,
    /// Zero-based cycle number.
    pub cycle: u32,
    pub paid_at: Timestamp,
}

/// Result of resolving the end-of-cycle vote.
#[derive(Clone, Debug, PartialEq)]
pub enum CycleResolution {
    Restarted,
    Ended,
    ConvertedToVault(CircleConversion),
}

/// Organizer input for a new circle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CircleDraft {
    pub name: String,
    pub avatar: Option<String>,
    /// Fixed monthly contribution per member.
    pub contribution: Amount,
    /// Amount each member sets aside from their payout for a shared vault.
    pub vault_contribution: Option<Amount>,
    pub description: String,
}

/// Outcome of a join request resolution.
#[derive(Clone, Debug, PartialEq)]
pub struct JoinResolution {
    pub request: JoinRequest,
    /// The approval filled the last seat and started the circle.
    pub activated: bool,
}

/// A rotating savings circle.
///
/// INVARIANT: `members.len() <= TOTAL_SEATS`.
/// INVARIANT: `current_month <= CYCLE_MONTHS`.
/// INVARIANT: once assigned, `payout_order` is a permutation of `0..TOTAL_SEATS`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub id: CircleId,
    pub name: String,
    pub avatar: String,
    pub description: String,
    pub contribution: Amount,
    pub vault_contribution: Option<Amount>,
    pub organizer_id: UserId,
    /// Seated members in join order.
    pub members: Vec<CircleMember>,
    /// Every join request ever submitted, resolved ones included.
    pub join_requests: Vec<JoinRequest>,
    /// Payouts made so far in the current cycle.
    pub current_month: u8,
    pub status: CircleStatus,
    /// Contributions collected this month.
    pub pool_balance: Amount,
    pub cycles_completed: u32,
    pub payout_history: Vec<Payout>,
    pub cycle_ballots: Vec<CycleBallot>,
    /// Vault created when the members voted to convert.
    pub successor_vault: Option<VaultId>,
    pub created_at: Timestamp,
}

impl Circle {
    /// Creates a recruiting circle with the organizer in the first seat.
    pub fn create(
        id: CircleId,
        draft: CircleDraft,
        organizer: MemberProfile,
        now: Timestamp,
    ) -> DomainResult<Self> {
        if draft.name.trim().is_empty() {
            return Err(DomainError::precondition("circle name is required"));
        }
        if draft.contribution == 0 {
            return Err(DomainError::invalid_amount(
                draft.contribution,
                "monthly contribution must be positive",
            ));
        }
        let vault_contribution = draft.vault_contribution.filter(|v| *v > 0);
        if let Some(set_aside) = vault_contribution {
            if set_aside > payout_amount(draft.contribution) {
                return Err(DomainError::invalid_amount(
                    set_aside,
                    "vault contribution cannot exceed the payout",
                ));
            }
        }

        let avatar = draft
            .avatar
            .unwrap_or_else(|| format!("https://i.pravatar.cc/150?u={}", id));

        Ok(Self {
            id,
            name: draft.name.trim().to_string(),
            avatar,
            description: draft.description,
            contribution: draft.contribution,
            vault_contribution,
            organizer_id: organizer.id.clone(),
            members: vec![CircleMember::seated(organizer, now)],
            join_requests: Vec::new(),
            current_month: 0,
            status: CircleStatus::Recruiting,
            pool_balance: 0,
            cycles_completed: 0,
            payout_history: Vec::new(),
            cycle_ballots: Vec::new(),
            successor_vault: None,
            created_at: now,
        })
    }

    pub fn filled_seats(&self) -> usize {
        self.members.len()
    }

    pub fn open_seats(&self) -> usize {
        TOTAL_SEATS.saturating_sub(self.members.len())
    }

    pub fn is_full(&self) -> bool {
        self.members.len() >= TOTAL_SEATS
    }

    pub fn member(&self, id: &UserId) -> Option<&CircleMember> {
        self.members.iter().find(|m| m.id() == id)
    }

    pub fn is_member(&self, id: &UserId) -> bool {
        self.member(id).is_some()
    }

    /// Amount each member receives on their payout month.
    pub fn payout_amount(&self) -> Amount {
        payout_amount(self.contribution)
    }

    pub fn pending_requests(&self) -> impl Iterator<Item = &JoinRequest> {
        self.join_requests.iter().filter(|r| r.is_pending())
    }

    /// Members ordered by payout slot. Empty until the rotation is assigned.
    pub fn rotation(&self) -> Vec<&CircleMember> {
        let mut ordered: Vec<&CircleMember> = self
            .members
            .iter()
            .filter(|m| m.payout_order.is_some())
            .collect();
        ordered.sort_by_key(|m| m.payout_order);
        ordered
    }

    /// Member due the next payout while the circle is active.
    pub fn next_payout_member(&self) -> Option<&CircleMember> {
        if self.status != CircleStatus::Active {
            return None;
        }
        self.members
            .iter()
            .find(|m| m.payout_order == Some(self.current_month))
    }

    pub fn unpaid_members(&self) -> impl Iterator<Item = &CircleMember> {
        self.members.iter().filter(|m| !m.has_paid)
    }

    /// Records a join request. Seat availability is checked on approval, not here.
    pub fn submit_request(
        &mut self,
        id: JoinRequestId,
        applicant: MemberProfile,
        monthly_income: Amount,
        message: String,
        now: Timestamp,
    ) -> DomainResult<JoinRequest> {
        if self.status == CircleStatus::Completed {
            return Err(DomainError::precondition("circle is closed"));
        }
        if self.is_member(&applicant.id) {
            return Err(DomainError::precondition(format!(
                "{} is already a member",
                applicant.id
            )));
        }
        if self
            .pending_requests()
            .any(|r| r.applicant.id == applicant.id)
        {
            return Err(DomainError::precondition(format!(
                "{} already has a pending request",
                applicant.id
            )));
        }

        let request = JoinRequest {
            id,
            applicant,
            status: JoinRequestStatus::Pending,
            monthly_income,
            message,
            submitted_at: now,
            resolved_at: None,
        };
        self.join_requests.push(request.clone());
        Ok(request)
    }

    /// Approves or declines a pending request.
    ///
    /// Approving the request that fills the last seat activates the circle and
    /// assigns the payout rotation with `policy`.
    pub fn resolve_request(
        &mut self,
        request_id: &JoinRequestId,
        decision: JoinDecision,
        policy: &RotationPolicy,
        now: Timestamp,
    ) -> DomainResult<JoinResolution> {
        let index = self
            .join_requests
            .iter()
            .position(|r| &r.id == request_id)
            .ok_or_else(|| DomainError::not_found(EntityKind::JoinRequest, request_id))?;

        if !self.join_requests[index].is_pending() {
            return Err(DomainError::precondition(format!(
                "join request {} is already resolved",
                request_id
            )));
        }

        match decision {
            JoinDecision::Decline => {
                let request = &mut self.join_requests[index];
                request.status = JoinRequestStatus::Declined;
                request.resolved_at = Some(now);
                Ok(JoinResolution {
                    request: request.clone(),
                    activated: false,
                })
            }
            JoinDecision::Approve => {
                if self.is_full() {
                    return Err(DomainError::CircleFull {
                        capacity: TOTAL_SEATS,
                    });
                }
                if self.status != CircleStatus::Recruiting {
                    return Err(DomainError::precondition("circle is not recruiting"));
                }
                let applicant = self.join_requests[index].applicant.clone();
                if self.is_member(&applicant.id) {
                    return Err(DomainError::precondition(format!(
                        "{} is already a member",
                        applicant.id
                    )));
                }

                self.members.push(CircleMember::seated(applicant, now));
                let request = &mut self.join_requests[index];
                request.status = JoinRequestStatus::Approved;
                request.resolved_at = Some(now);
                let request = request.clone();

                let activated = self.is_full();
                if activated {
                    self.activate(policy);
                }
                Ok(JoinResolution { request, activated })
            }
        }
    }

    fn activate(&mut self, policy: &RotationPolicy) {
        let slots = policy.assign(self.members.len(), self.id.as_str());
        for (member, slot) in self.members.iter_mut().zip(slots) {
            member.payout_order = Some(slot);
            member.has_paid = false;
        }
        self.status = CircleStatus::Active;
        self.current_month = 0;
        self.pool_balance = 0;
    }

    /// Posts a member's fixed monthly contribution.
    pub fn post_contribution(&mut self, member_id: &UserId, amount: Amount) -> DomainResult<()> {
        if self.status != CircleStatus::Active {
            return Err(DomainError::precondition(
                "contributions are only accepted while the circle is active",
            ));
        }
        if amount != self.contribution {
            return Err(DomainError::invalid_amount(
                amount,
                format!("contribution must be exactly {}", self.contribution),
            ));
        }
        let month = self.current_month + 1;
        let member = self
            .members
            .iter_mut()
            .find(|m| m.id() == member_id)
            .ok_or_else(|| DomainError::not_found(EntityKind::Member, member_id))?;
        if member.has_paid {
            return Err(DomainError::AlreadyPaid {
                member: member_id.clone(),
                month,
            });
        }
        member.has_paid = true;
        self.pool_balance += amount;
        Ok(())
    }

    /// Pays the member in the current rotation slot and moves to the next month.
    pub fn advance_cycle(&mut self, now: Timestamp) -> DomainResult<Payout> {
        if self.status != CircleStatus::Active {
            return Err(DomainError::precondition("circle is not active"));
        }
        let unpaid = self.unpaid_members().count();
        if unpaid > 0 {
            return Err(DomainError::precondition(format!(
                "{} member(s) have not paid this month",
                unpaid
            )));
        }
        let recipient = self
            .next_payout_member()
            .map(|m| m.id().clone())
            .ok_or_else(|| {
                DomainError::precondition(format!(
                    "no member holds payout slot {}",
                    self.current_month
                ))
            })?;

        let payout = Payout {
            recipient,
            amount: self.payout_amount(),
            month: self.current_month + 1,
            cycle: self.cycles_completed,
            paid_at: now,
        };
        self.payout_history.push(payout.clone());

        for member in &mut self.members {
            member.has_paid = false;
        }
        self.pool_balance = 0;
        self.current_month += 1;
        if self.current_month == CYCLE_MONTHS {
            self.status = CircleStatus::Voting;
            self.cycle_ballots.clear();
        }
        Ok(payout)
    }

    /// Records a member's end-of-cycle ballot.
    pub fn cast_ballot(
        &mut self,
        member_id: &UserId,
        outcome: CycleOutcome,
        now: Timestamp,
    ) -> DomainResult<()> {
        if self.status != CircleStatus::Voting {
            return Err(DomainError::precondition("circle is not voting"));
        }
        if !self.is_member(member_id) {
            return Err(DomainError::not_found(EntityKind::Member, member_id));
        }
        if self.cycle_ballots.iter().any(|b| &b.member == member_id) {
            return Err(DomainError::DuplicateVote {
                contributor: member_id.clone(),
            });
        }
        self.cycle_ballots.push(CycleBallot {
            member: member_id.clone(),
            outcome,
            cast_at: now,
        });
        Ok(())
    }

    /// Outcome holding a strict majority of the seated members, if any.
    pub fn ballot_leader(&self) -> Option<CycleOutcome> {
        let needed = self.members.len() / 2 + 1;
        [
            CycleOutcome::Restart,
            CycleOutcome::ConvertToVault,
            CycleOutcome::End,
        ]
        .into_iter()
        .find(|outcome| {
            self.cycle_ballots
                .iter()
                .filter(|b| b.outcome == *outcome)
                .count()
                >= needed
        })
    }

    /// Applies the end-of-cycle decision.
    pub fn resolve_vote(&mut self, outcome: CycleOutcome) -> DomainResult<CycleResolution> {
        if self.status != CircleStatus::Voting {
            return Err(DomainError::precondition("circle is not voting"));
        }
        self.cycles_completed += 1;
        self.cycle_ballots.clear();

        match outcome {
            CycleOutcome::Restart => {
                self.status = CircleStatus::Active;
                self.current_month = 0;
                self.pool_balance = 0;
                for member in &mut self.members {
                    member.has_paid = false;
                }
                Ok(CycleResolution::Restarted)
            }
            CycleOutcome::End => {
                self.status = CircleStatus::Completed;
                Ok(CycleResolution::Ended)
            }
            CycleOutcome::ConvertToVault => {
                let vault_id = VaultId::generate();
                self.status = CircleStatus::Completed;
                self.successor_vault = Some(vault_id.clone());

                let organizer = self
                    .member(&self.organizer_id)
                    .map(|m| m.profile.clone())
                    .unwrap_or_else(|| self.members[0].profile.clone());
                let members = self
                    .rotation()
                    .into_iter()
                    .map(|m| m.profile.clone())
                    .collect();

                Ok(CycleResolution::ConvertedToVault(CircleConversion {
                    vault_id,
                    circle_id: self.id.clone(),
                    name: format!("{} Vault", self.name),
                    description: self.description.clone(),
                    organizer,
                    members,
                    set_aside_per_member: self.vault_contribution.unwrap_or(0),
                }))
            }
        }
    }
}
