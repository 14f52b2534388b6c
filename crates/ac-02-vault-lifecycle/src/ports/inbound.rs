//! Driving Ports (API - Inbound)

use shared_types::{
    Amount, CircleConversion, DomainResult, MediaId, MemberProfile, MilestoneId, UserId,
    VaultFamilyId, VaultId,
};

use crate::domain::{
    FundingProgress, MediaUpload, MessageKind, MilestoneProgress, Vault, VaultDraft, VaultFamily,
    VaultMediaItem, VaultMessage, VaultMilestone, VoteDecision, VoteRound, VoteTally,
};

/// Primary Vault Lifecycle API.
pub trait VaultLifecycleApi: Send + Sync {
    fn create_vault(&self, draft: VaultDraft) -> DomainResult<Vault>;

    /// Create the vault a circle voted to convert into.
    fn create_from_circle(&self, conversion: CircleConversion) -> DomainResult<Vault>;

    /// Add funds. Overfunding past the goal is allowed.
    fn record_contribution(
        &self,
        vault_id: &VaultId,
        contributor: &MemberProfile,
        amount: Amount,
    ) -> DomainResult<Vault>;

    fn add_milestone(
        &self,
        vault_id: &VaultId,
        title: &str,
        description: &str,
        required: bool,
        created_by: &UserId,
    ) -> DomainResult<VaultMilestone>;

    fn start_milestone(&self, vault_id: &VaultId, milestone_id: &MilestoneId) -> DomainResult<()>;

    /// Verify a milestone with a supporting document.
    fn attach_verification(
        &self,
        vault_id: &VaultId,
        milestone_id: &MilestoneId,
        document: MediaUpload,
    ) -> DomainResult<VaultMediaItem>;

    fn reject_milestone(&self, vault_id: &VaultId, milestone_id: &MilestoneId) -> DomainResult<()>;

    fn upload_media(
        &self,
        vault_id: &VaultId,
        upload: MediaUpload,
        linked_milestone_id: Option<MilestoneId>,
    ) -> DomainResult<VaultMediaItem>;

    fn post_message(
        &self,
        vault_id: &VaultId,
        user_id: &UserId,
        content: &str,
        kind: MessageKind,
        attached_media_id: Option<MediaId>,
    ) -> DomainResult<VaultMessage>;

    /// Move a vault whose milestones are met into voting.
    fn open_vote_round(&self, vault_id: &VaultId) -> DomainResult<VoteRound>;

    fn cast_vote(
        &self,
        vault_id: &VaultId,
        contributor_id: &UserId,
        decision: VoteDecision,
    ) -> DomainResult<VoteTally>;

    /// Release funds once quorum is reached. Terminal.
    fn release_funds(&self, vault_id: &VaultId) -> DomainResult<Vault>;

    fn get_vaults(&self) -> Vec<Vault>;

    fn get_vault_by_id(&self, vault_id: &VaultId) -> Option<Vault>;

    fn vote_tally(&self, vault_id: &VaultId) -> DomainResult<VoteTally>;

    fn funding_progress(&self, vault_id: &VaultId) -> DomainResult<FundingProgress>;

    fn milestone_progress(&self, vault_id: &VaultId) -> DomainResult<MilestoneProgress>;

    fn create_family(&self, name: &str, icon: &str) -> DomainResult<VaultFamily>;

    fn get_vault_families(&self) -> Vec<VaultFamily>;

    fn vaults_in_family(&self, family_id: &VaultFamilyId) -> DomainResult<Vec<Vault>>;
}
