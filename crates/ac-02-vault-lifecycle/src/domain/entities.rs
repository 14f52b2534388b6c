//! Core domain entities for the Vault Lifecycle.
//!
//! Vault state machine (forward only):
//! ```text
//! [ACTIVE] ──all required milestones verified──→ [MILESTONES_MET] ──open round──→ [VOTING]
//!                                                                                     │
//!                                                      quorum met + release ──────────┘──→ [RELEASED]
//! ```

use serde::{Deserialize, Serialize};
use shared_types::{
    Amount, CircleConversion, DomainError, DomainResult, EntityKind, MediaId, MemberProfile,
    MessageId, MilestoneId, Timestamp, UserId, VaultFamilyId, VaultId, VoteId,
};

use super::progress::{FundingProgress, MilestoneProgress};
use super::quorum::VoteTally;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VaultStatus {
    #[default]
    Active,
    MilestonesMet,
    Voting,
    /// Terminal.
    Released,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VaultCategory {
    /// Seeded from a circle's pooled set-asides.
    CircleVault,
    Goal,
    Cause,
}

/// A member's cumulative contribution.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contributor {
    pub id: UserId,
    pub username: String,
    pub avatar: String,
    pub contributed: Amount,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneStatus {
    Pending,
    InProgress,
    Verified,
    /// Terminal for this milestone.
    Rejected,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultMilestone {
    pub id: MilestoneId,
    pub title: String,
    pub description: String,
    pub required: bool,
    pub status: MilestoneStatus,
    pub verification_doc_id: Option<MediaId>,
    pub verified_at: Option<Timestamp>,
    pub created_by: UserId,
}

impl VaultMilestone {
    fn is_open(&self) -> bool {
        matches!(
            self.status,
            MilestoneStatus::Pending | MilestoneStatus::InProgress
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Image,
    Document,
    Link,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultMediaItem {
    pub id: MediaId,
    pub kind: MediaKind,
    pub title: String,
    pub description: Option<String>,
    pub url: String,
    pub thumbnail_url: Option<String>,
    pub uploaded_by: UserId,
    pub uploaded_at: Timestamp,
    pub linked_milestone_id: Option<MilestoneId>,
}

/// Upload input; the vault assigns id and timestamp.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaUpload {
    pub kind: MediaKind,
    pub title: String,
    pub description: Option<String>,
    pub url: String,
    pub thumbnail_url: Option<String>,
    pub uploaded_by: UserId,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    Message,
    Update,
    /// Written by the lifecycle when a milestone is verified.
    MilestoneVerified,
    /// Written by the lifecycle for every recorded contribution.
    Contribution,
}

impl MessageKind {
    fn is_system(&self) -> bool {
        matches!(self, MessageKind::MilestoneVerified | MessageKind::Contribution)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultMessage {
    pub id: MessageId,
    pub user_id: UserId,
    pub content: String,
    pub timestamp: Timestamp,
    pub attached_media_id: Option<MediaId>,
    pub kind: MessageKind,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoteDecision {
    Approve,
    Deny,
}

/// One contributor's release decision. Never mutated or removed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultVote {
    pub id: VoteId,
    pub user_id: UserId,
    pub decision: VoteDecision,
    pub timestamp: Timestamp,
    pub round: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteRound {
    pub number: u32,
    pub opened_at: Timestamp,
    /// Votes are refused after this instant. `None` means no expiry.
    pub deadline: Option<Timestamp>,
}

impl VoteRound {
    pub fn is_expired(&self, now: Timestamp) -> bool {
        self.deadline.is_some_and(|deadline| now > deadline)
    }
}

/// Organizer input for a new vault.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VaultDraft {
    pub name: String,
    pub icon: String,
    pub goal: Amount,
    pub description: String,
    pub organizer_notes: Option<String>,
    pub organizer: MemberProfile,
    pub category: VaultCategory,
    pub family_id: Option<VaultFamilyId>,
}

/// Named group of related vaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultFamily {
    pub id: VaultFamilyId,
    pub name: String,
    pub icon: String,
    pub vault_ids: Vec<VaultId>,
}

/// Shared fund with milestone-gated, vote-gated release.
///
/// INVARIANT: `raised` never decreases.
/// INVARIANT: `MilestonesMet` only when every required milestone is verified.
/// INVARIANT: at most one vote per contributor per round.
/// INVARIANT: nothing but the message and media logs change after `Released`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vault {
    pub id: VaultId,
    pub name: String,
    pub icon: String,
    pub goal: Amount,
    pub raised: Amount,
    pub description: String,
    pub organizer_notes: Option<String>,
    pub organizer: String,
    pub organizer_id: UserId,
    pub contributors: Vec<Contributor>,
    pub milestones: Vec<VaultMilestone>,
    pub media: Vec<VaultMediaItem>,
    pub messages: Vec<VaultMessage>,
    pub votes: Vec<VaultVote>,
    pub family_id: Option<VaultFamilyId>,
    pub status: VaultStatus,
    pub category: VaultCategory,
    pub vote_round: Option<VoteRound>,
    pub created_at: Timestamp,
    pub released_at: Option<Timestamp>,
}

impl Vault {
    pub fn create(id: VaultId, draft: VaultDraft, now: Timestamp) -> DomainResult<Self> {
        if draft.name.trim().is_empty() {
            return Err(DomainError::precondition("vault name is required"));
        }
        if draft.goal == 0 {
            return Err(DomainError::invalid_amount(draft.goal, "goal must be positive"));
        }
        Ok(Self {
            id,
            name: draft.name.trim().to_string(),
            icon: draft.icon,
            goal: draft.goal,
            raised: 0,
            description: draft.description,
            organizer_notes: draft.organizer_notes,
            organizer: draft.organizer.username,
            organizer_id: draft.organizer.id,
            contributors: Vec::new(),
            milestones: Vec::new(),
            media: Vec::new(),
            messages: Vec::new(),
            votes: Vec::new(),
            family_id: draft.family_id,
            status: VaultStatus::Active,
            category: draft.category,
            vote_round: None,
            created_at: now,
            released_at: None,
        })
    }

    /// Vault seeded from a converted circle. Every member becomes a contributor
    /// with their set-aside; the goal is the pooled total.
    pub fn from_conversion(conversion: CircleConversion, now: Timestamp) -> DomainResult<Self> {
        if conversion.members.is_empty() {
            return Err(DomainError::precondition("converted circle has no members"));
        }
        let per_member = conversion.set_aside_per_member;
        let pooled = per_member.saturating_mul(conversion.members.len() as Amount);
        let draft = VaultDraft {
            name: conversion.name,
            icon: "🔒".to_string(),
            goal: pooled.max(1),
            description: conversion.description,
            organizer_notes: Some(format!("Created from circle {}", conversion.circle_id)),
            organizer: conversion.organizer,
            category: VaultCategory::CircleVault,
            family_id: None,
        };
        let mut vault = Self::create(conversion.vault_id, draft, now)?;
        vault.contributors = conversion
            .members
            .into_iter()
            .map(|profile| Contributor {
                id: profile.id,
                username: profile.username,
                avatar: profile.avatar,
                contributed: per_member,
            })
            .collect();
        vault.raised = pooled;
        Ok(vault)
    }

    pub fn contributor(&self, id: &UserId) -> Option<&Contributor> {
        self.contributors.iter().find(|c| &c.id == id)
    }

    pub fn milestone(&self, id: &MilestoneId) -> Option<&VaultMilestone> {
        self.milestones.iter().find(|m| &m.id == id)
    }

    fn milestone_mut(&mut self, id: &MilestoneId) -> DomainResult<&mut VaultMilestone> {
        self.milestones
            .iter_mut()
            .find(|m| &m.id == id)
            .ok_or_else(|| DomainError::not_found(EntityKind::Milestone, id))
    }

    fn ensure_not_released(&self) -> DomainResult<()> {
        if self.status == VaultStatus::Released {
            return Err(DomainError::precondition("vault funds have already been released"));
        }
        Ok(())
    }

    fn push_message(
        &mut self,
        user_id: UserId,
        content: String,
        kind: MessageKind,
        attached_media_id: Option<MediaId>,
        now: Timestamp,
    ) -> &VaultMessage {
        self.messages.push(VaultMessage {
            id: MessageId::generate(),
            user_id,
            content,
            timestamp: now,
            attached_media_id,
            kind,
        });
        &self.messages[self.messages.len() - 1]
    }

    /// Adds to `raised` and the contributor's running total.
    pub fn record_contribution(
        &mut self,
        contributor: &MemberProfile,
        amount: Amount,
        now: Timestamp,
    ) -> DomainResult<()> {
        if amount == 0 {
            return Err(DomainError::invalid_amount(amount, "contribution must be positive"));
        }
        self.ensure_not_released()?;

        self.raised = self.raised.saturating_add(amount);
        match self.contributors.iter_mut().find(|c| c.id == contributor.id) {
            Some(existing) => existing.contributed = existing.contributed.saturating_add(amount),
            None => self.contributors.push(Contributor {
                id: contributor.id.clone(),
                username: contributor.username.clone(),
                avatar: contributor.avatar.clone(),
                contributed: amount,
            }),
        }
        self.push_message(
            contributor.id.clone(),
            format!("{} contributed ${}", contributor.username, amount),
            MessageKind::Contribution,
            None,
            now,
        );
        Ok(())
    }

    /// Appends a pending milestone.
    ///
    /// Required milestones can only be added while the vault is `Active`: the
    /// lifecycle never moves backwards, so a late required milestone would break
    /// the `MilestonesMet` invariant.
    pub fn add_milestone(
        &mut self,
        title: &str,
        description: &str,
        required: bool,
        created_by: UserId,
    ) -> DomainResult<VaultMilestone> {
        self.ensure_not_released()?;
        if title.trim().is_empty() {
            return Err(DomainError::precondition("milestone title is required"));
        }
        if required && self.status != VaultStatus::Active {
            return Err(DomainError::precondition(
                "required milestones can only be added while the vault is active",
            ));
        }
        let milestone = VaultMilestone {
            id: MilestoneId::generate(),
            title: title.trim().to_string(),
            description: description.to_string(),
            required,
            status: MilestoneStatus::Pending,
            verification_doc_id: None,
            verified_at: None,
            created_by,
        };
        self.milestones.push(milestone.clone());
        Ok(milestone)
    }

    /// pending -> in_progress.
    pub fn start_milestone(&mut self, milestone_id: &MilestoneId) -> DomainResult<()> {
        self.ensure_not_released()?;
        let milestone = self.milestone_mut(milestone_id)?;
        if milestone.status != MilestoneStatus::Pending {
            return Err(DomainError::precondition(format!(
                "milestone {} is {:?}, not pending",
                milestone_id, milestone.status
            )));
        }
        milestone.status = MilestoneStatus::InProgress;
        Ok(())
    }

    /// Adds a media item to the log.
    pub fn upload_media(
        &mut self,
        upload: MediaUpload,
        linked_milestone_id: Option<MilestoneId>,
        now: Timestamp,
    ) -> DomainResult<VaultMediaItem> {
        if upload.url.trim().is_empty() {
            return Err(DomainError::precondition("media item has no content"));
        }
        if let Some(milestone_id) = &linked_milestone_id {
            if self.milestone(milestone_id).is_none() {
                return Err(DomainError::not_found(EntityKind::Milestone, milestone_id));
            }
        }
        let item = VaultMediaItem {
            id: MediaId::generate(),
            kind: upload.kind,
            title: upload.title,
            description: upload.description,
            url: upload.url,
            thumbnail_url: upload.thumbnail_url,
            uploaded_by: upload.uploaded_by,
            uploaded_at: now,
            linked_milestone_id,
        };
        self.media.push(item.clone());
        Ok(item)
    }

    /// Verifies an open milestone with a supporting document and moves the
    /// vault to `MilestonesMet` once every required milestone is verified.
    pub fn attach_verification(
        &mut self,
        milestone_id: &MilestoneId,
        document: MediaUpload,
        now: Timestamp,
    ) -> DomainResult<VaultMediaItem> {
        self.ensure_not_released()?;
        let milestone = self
            .milestone(milestone_id)
            .ok_or_else(|| DomainError::not_found(EntityKind::Milestone, milestone_id))?;
        if !milestone.is_open() {
            return Err(DomainError::precondition(format!(
                "milestone {} is {:?} and cannot be verified",
                milestone_id, milestone.status
            )));
        }

        let verifier = document.uploaded_by.clone();
        let item = self.upload_media(document, Some(milestone_id.clone()), now)?;

        let milestone = self.milestone_mut(milestone_id)?;
        milestone.status = MilestoneStatus::Verified;
        milestone.verified_at = Some(now);
        milestone.verification_doc_id = Some(item.id.clone());
        let content = format!("Milestone verified: {}", milestone.title);

        self.push_message(
            verifier,
            content,
            MessageKind::MilestoneVerified,
            Some(item.id.clone()),
            now,
        );

        if self.status == VaultStatus::Active && self.milestone_progress().all_met {
            self.status = VaultStatus::MilestonesMet;
        }
        Ok(item)
    }

    /// Marks an open milestone rejected. There is no path back from rejection.
    pub fn reject_milestone(&mut self, milestone_id: &MilestoneId) -> DomainResult<()> {
        self.ensure_not_released()?;
        let milestone = self.milestone_mut(milestone_id)?;
        if !milestone.is_open() {
            return Err(DomainError::precondition(format!(
                "milestone {} is {:?} and cannot be rejected",
                milestone_id, milestone.status
            )));
        }
        milestone.status = MilestoneStatus::Rejected;
        Ok(())
    }

    /// Member chat message or organizer update.
    pub fn post_message(
        &mut self,
        user_id: UserId,
        content: &str,
        kind: MessageKind,
        attached_media_id: Option<MediaId>,
        now: Timestamp,
    ) -> DomainResult<VaultMessage> {
        if kind.is_system() {
            return Err(DomainError::precondition(format!(
                "{:?} entries are written by the vault itself",
                kind
            )));
        }
        if content.trim().is_empty() {
            return Err(DomainError::precondition("message is empty"));
        }
        if let Some(media_id) = &attached_media_id {
            if !self.media.iter().any(|m| &m.id == media_id) {
                return Err(DomainError::precondition(format!(
                    "attached media {} is not in this vault",
                    media_id
                )));
            }
        }
        Ok(self
            .push_message(user_id, content.trim().to_string(), kind, attached_media_id, now)
            .clone())
    }

    /// milestones_met -> voting.
    ///
    /// A vault still voting may start a fresh round once the current one has
    /// expired without reaching quorum. Earlier rounds' votes stay in the log
    /// but no longer count.
    pub fn open_vote_round(
        &mut self,
        now: Timestamp,
        timeout_ms: Option<u64>,
    ) -> DomainResult<VoteRound> {
        match self.status {
            VaultStatus::MilestonesMet => {}
            VaultStatus::Voting => {
                let expired = self.vote_round.is_some_and(|r| r.is_expired(now));
                if !expired || self.tally().passed {
                    return Err(DomainError::precondition(
                        "current vote round is still open or has passed",
                    ));
                }
            }
            status => {
                return Err(DomainError::precondition(format!(
                    "vote rounds open from milestones_met, vault is {:?}",
                    status
                )));
            }
        }
        let number = self.vote_round.map_or(1, |r| r.number + 1);
        let round = VoteRound {
            number,
            opened_at: now,
            deadline: timeout_ms.map(|ms| now.saturating_add(ms)),
        };
        self.vote_round = Some(round);
        self.status = VaultStatus::Voting;
        Ok(round)
    }

    fn current_round(&self) -> Option<VoteRound> {
        self.vote_round
            .filter(|_| matches!(self.status, VaultStatus::Voting | VaultStatus::Released))
    }

    /// Votes of the current round.
    pub fn round_votes(&self) -> impl Iterator<Item = &VaultVote> {
        let number = self.current_round().map(|r| r.number);
        self.votes.iter().filter(move |v| Some(v.round) == number)
    }

    /// Records a contributor's decision and returns the updated tally.
    pub fn cast_vote(
        &mut self,
        contributor_id: &UserId,
        decision: VoteDecision,
        now: Timestamp,
    ) -> DomainResult<VoteTally> {
        if self.status != VaultStatus::Voting {
            return Err(DomainError::precondition("vault is not voting"));
        }
        let round = self
            .current_round()
            .ok_or_else(|| DomainError::precondition("no open vote round"))?;
        if round.is_expired(now) {
            return Err(DomainError::precondition("vote round has expired"));
        }
        if self.contributor(contributor_id).is_none() {
            return Err(DomainError::not_found(EntityKind::Contributor, contributor_id));
        }
        if self.round_votes().any(|v| &v.user_id == contributor_id) {
            return Err(DomainError::DuplicateVote {
                contributor: contributor_id.clone(),
            });
        }
        self.votes.push(VaultVote {
            id: VoteId::generate(),
            user_id: contributor_id.clone(),
            decision,
            timestamp: now,
            round: round.number,
        });
        Ok(self.tally())
    }

    /// voting -> released, only with quorum. Terminal.
    pub fn release_funds(&mut self, now: Timestamp) -> DomainResult<VoteTally> {
        if self.status != VaultStatus::Voting {
            return Err(DomainError::precondition(format!(
                "funds can only be released while voting, vault is {:?}",
                self.status
            )));
        }
        let tally = self.tally();
        if !tally.passed {
            return Err(DomainError::precondition(format!(
                "quorum not met: {} of {} approvals needed",
                tally.approvals, tally.majority
            )));
        }
        self.status = VaultStatus::Released;
        self.released_at = Some(now);
        Ok(tally)
    }

    pub fn tally(&self) -> VoteTally {
        let (approvals, denials) =
            self.round_votes()
                .fold((0, 0), |(approve, deny), vote| match vote.decision {
                    VoteDecision::Approve => (approve + 1, deny),
                    VoteDecision::Deny => (approve, deny + 1),
                });
        VoteTally::new(approvals, denials, self.contributors.len())
    }

    pub fn funding_progress(&self) -> FundingProgress {
        FundingProgress::new(self.raised, self.goal)
    }

    pub fn milestone_progress(&self) -> MilestoneProgress {
        let required: Vec<&VaultMilestone> = self.milestones.iter().filter(|m| m.required).collect();
        let verified = required
            .iter()
            .filter(|m| m.status == MilestoneStatus::Verified)
            .count();
        MilestoneProgress {
            required: required.len(),
            verified,
            all_met: !required.is_empty() && verified == required.len(),
            blocked_by_rejection: required
                .iter()
                .any(|m| m.status == MilestoneStatus::Rejected),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    #[test]
    fn test_contribution_upserts_and_logs() {
        let mut vault = Vault::create("v1".into(), draft(5000), 0).unwrap();
        vault.record_contribution(&profile("a"), 100, 1).unwrap();
        vault.record_contribution(&profile("a"), 50, 2).unwrap();
        vault.record_contribution(&profile("b"), 25, 3).unwrap();

        assert_eq!(vault.raised, 175);
        assert_eq!(vault.contributors.len(), 2);
        assert_eq!(vault.contributor(&"a".into()).unwrap().contributed, 150);
        assert_eq!(
            vault
                .messages
                .iter()
                .filter(|m| m.kind == MessageKind::Contribution)
                .count(),
            3
        );
    }

    #[test]
    fn test_zero_contribution_rejected() {
        let mut vault = Vault::create("v1".into(), draft(5000), 0).unwrap();
        let err = vault.record_contribution(&profile("a"), 0, 1).unwrap_err();
        assert!(matches!(err, DomainError::InvalidAmount { .. }));
        assert!(vault.messages.is_empty());
    }

    #[test]
    fn test_overfunding_allowed() {
        let mut vault = Vault::create("v1".into(), draft(100), 0).unwrap();
        vault.record_contribution(&profile("a"), 250, 1).unwrap();
        assert!(vault.funding_progress().overfunded);
    }

    #[test]
    fn test_status_flips_when_last_required_verified() {
        let mut vault = Vault::create("v1".into(), draft(5000), 0).unwrap();
        let first = vault.add_milestone("Permit", "", true, "org".into()).unwrap();
        let second = vault.add_milestone("Lumber", "", true, "org".into()).unwrap();
        let optional = vault.add_milestone("Photos", "", false, "org".into()).unwrap();

        vault.attach_verification(&first.id, document("org"), 5).unwrap();
        vault.attach_verification(&optional.id, document("org"), 6).unwrap();
        assert_eq!(vault.status, VaultStatus::Active);

        let doc = vault.attach_verification(&second.id, document("org"), 7).unwrap();
        assert_eq!(vault.status, VaultStatus::MilestonesMet);

        let verified = vault.milestone(&second.id).unwrap();
        assert_eq!(verified.status, MilestoneStatus::Verified);
        assert_eq!(verified.verified_at, Some(7));
        assert_eq!(verified.verification_doc_id.as_ref(), Some(&doc.id));
        assert_eq!(doc.linked_milestone_id.as_ref(), Some(&second.id));
    }

    #[test]
    fn test_optional_milestone_after_met_keeps_status() {
        let mut vault = vault_ready_to_vote(2, 1);
        assert_eq!(vault.status, VaultStatus::MilestonesMet);
        vault.add_milestone("Thank-you card", "", false, "org".into()).unwrap();
        assert_eq!(vault.status, VaultStatus::MilestonesMet);

        let err = vault.add_milestone("Audit", "", true, "org".into()).unwrap_err();
        assert!(matches!(err, DomainError::PreconditionFailed { .. }));
    }

    #[test]
    fn test_verification_needs_document() {
        let mut vault = Vault::create("v1".into(), draft(5000), 0).unwrap();
        let milestone = vault.add_milestone("Permit", "", true, "org".into()).unwrap();
        let mut empty = document("org");
        empty.url = "  ".to_string();

        let err = vault.attach_verification(&milestone.id, empty, 1).unwrap_err();
        assert!(matches!(err, DomainError::PreconditionFailed { .. }));
        assert_eq!(vault.milestone(&milestone.id).unwrap().status, MilestoneStatus::Pending);
        assert!(vault.media.is_empty());
    }

    #[test]
    fn test_rejected_required_milestone_blocks() {
        let mut vault = Vault::create("v1".into(), draft(5000), 0).unwrap();
        let a = vault.add_milestone("Permit", "", true, "org".into()).unwrap();
        let b = vault.add_milestone("Lumber", "", true, "org".into()).unwrap();
        vault.start_milestone(&a.id).unwrap();
        vault.reject_milestone(&a.id).unwrap();
        vault.attach_verification(&b.id, document("org"), 1).unwrap();

        let progress = vault.milestone_progress();
        assert!(progress.blocked_by_rejection);
        assert!(!progress.all_met);
        assert_eq!(vault.status, VaultStatus::Active);

        let err = vault.attach_verification(&a.id, document("org"), 2).unwrap_err();
        assert!(matches!(err, DomainError::PreconditionFailed { .. }));
    }

    #[test]
    fn test_vote_requires_voting_status() {
        let mut vault = vault_ready_to_vote(3, 1);
        let err = vault
            .cast_vote(&"c0".into(), VoteDecision::Approve, 2)
            .unwrap_err();
        assert!(matches!(err, DomainError::PreconditionFailed { .. }));
    }

    #[test]
    fn test_duplicate_vote_rejected() {
        let mut vault = vault_ready_to_vote(3, 1);
        vault.open_vote_round(2, None).unwrap();
        vault.cast_vote(&"c0".into(), VoteDecision::Deny, 3).unwrap();
        let err = vault
            .cast_vote(&"c0".into(), VoteDecision::Approve, 4)
            .unwrap_err();
        assert_eq!(
            err,
            DomainError::DuplicateVote {
                contributor: "c0".into()
            }
        );
        assert_eq!(vault.votes.len(), 1);
        assert_eq!(vault.votes[0].decision, VoteDecision::Deny);
    }

    #[test]
    fn test_non_contributor_cannot_vote() {
        let mut vault = vault_ready_to_vote(2, 1);
        vault.open_vote_round(2, None).unwrap();
        let err = vault
            .cast_vote(&"stranger".into(), VoteDecision::Approve, 3)
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[test]
    fn test_passing_vote_does_not_auto_release() {
        let mut vault = vault_ready_to_vote(2, 1);
        vault.open_vote_round(2, None).unwrap();
        let tally = vault.cast_vote(&"c0".into(), VoteDecision::Approve, 3).unwrap();
        assert!(tally.passed);
        assert_eq!(vault.status, VaultStatus::Voting);

        vault.release_funds(4).unwrap();
        assert_eq!(vault.status, VaultStatus::Released);
        assert_eq!(vault.released_at, Some(4));
    }

    #[test]
    fn test_expired_round_refuses_votes() {
        let mut vault = vault_ready_to_vote(2, 1);
        let round = vault.open_vote_round(1000, Some(500)).unwrap();
        assert_eq!(round.deadline, Some(1500));
        vault.cast_vote(&"c0".into(), VoteDecision::Approve, 1500).unwrap();
        let err = vault
            .cast_vote(&"c1".into(), VoteDecision::Approve, 1501)
            .unwrap_err();
        assert!(matches!(err, DomainError::PreconditionFailed { .. }));
    }

    #[test]
    fn test_expired_round_without_quorum_can_reopen() {
        let mut vault = vault_ready_to_vote(3, 1);
        vault.open_vote_round(1000, Some(500)).unwrap();
        vault.cast_vote(&"c0".into(), VoteDecision::Approve, 1200).unwrap();

        assert!(vault.cast_vote(&"c1".into(), VoteDecision::Approve, 2000).is_err());
        assert!(vault.release_funds(2000).is_err());

        let round = vault.open_vote_round(2000, Some(500)).unwrap();
        assert_eq!(round.number, 2);
        assert_eq!(round.deadline, Some(2500));
        assert_eq!(vault.status, VaultStatus::Voting);
        assert_eq!(vault.tally().approvals, 0);

        vault.cast_vote(&"c0".into(), VoteDecision::Approve, 2100).unwrap();
        let tally = vault.cast_vote(&"c1".into(), VoteDecision::Approve, 2200).unwrap();
        assert!(tally.passed);
        vault.release_funds(2300).unwrap();
        assert_eq!(vault.votes.len(), 3);
    }

    #[test]
    fn test_open_or_passed_round_cannot_reopen() {
        let mut vault = vault_ready_to_vote(2, 1);
        vault.open_vote_round(1000, Some(500)).unwrap();
        let err = vault.open_vote_round(1200, Some(500)).unwrap_err();
        assert!(matches!(err, DomainError::PreconditionFailed { .. }));

        vault.cast_vote(&"c0".into(), VoteDecision::Approve, 1300).unwrap();
        assert!(vault.open_vote_round(2000, Some(500)).is_err());
        assert_eq!(vault.vote_round.map(|r| r.number), Some(1));

        let mut untimed = vault_ready_to_vote(2, 1);
        untimed.open_vote_round(2, None).unwrap();
        assert!(untimed.open_vote_round(1_000_000, None).is_err());
    }

    #[test]
    fn test_released_vault_is_frozen() {
        let mut vault = vault_ready_to_vote(1, 1);
        vault.open_vote_round(2, None).unwrap();
        vault.cast_vote(&"c0".into(), VoteDecision::Approve, 3).unwrap();
        vault.release_funds(4).unwrap();

        assert!(vault.record_contribution(&profile("c0"), 10, 5).is_err());
        assert!(vault.add_milestone("More", "", false, "org".into()).is_err());
        assert!(vault.cast_vote(&"c0".into(), VoteDecision::Deny, 5).is_err());
        assert!(vault.release_funds(5).is_err());
        assert_eq!(vault.raised, 100);

        vault
            .post_message("c0".into(), "Thanks all!", MessageKind::Message, None, 6)
            .unwrap();
    }

    #[test]
    fn test_system_message_kinds_reserved() {
        let mut vault = Vault::create("v1".into(), draft(5000), 0).unwrap();
        let err = vault
            .post_message("org".into(), "fake", MessageKind::Contribution, None, 1)
            .unwrap_err();
        assert!(matches!(err, DomainError::PreconditionFailed { .. }));
    }

    #[test]
    fn test_from_conversion_seeds_contributors() {
        let conversion = CircleConversion {
            vault_id: "v9".into(),
            circle_id: "c1".into(),
            name: "Savers Vault".to_string(),
            description: String::new(),
            organizer: profile("u1"),
            members: vec![profile("u1"), profile("u2"), profile("u3"), profile("u4")],
            set_aside_per_member: 50,
        };
        let vault = Vault::from_conversion(conversion, 10).unwrap();
        assert_eq!(vault.id.as_str(), "v9");
        assert_eq!(vault.category, VaultCategory::CircleVault);
        assert_eq!(vault.contributors.len(), 4);
        assert_eq!(vault.raised, 200);
        assert_eq!(vault.goal, 200);
        assert_eq!(vault.organizer_id.as_str(), "u1");
    }

    #[test]
    fn test_status_wire_names() {
        assert_eq!(
            serde_json::to_string(&VaultStatus::MilestonesMet).unwrap(),
            "\"milestones_met\""
        );
        assert_eq!(
            serde_json::to_string(&VaultCategory::CircleVault).unwrap(),
            "\"circle_vault\""
        );
    }
}
