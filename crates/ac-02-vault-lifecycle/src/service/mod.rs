//! # Vault Lifecycle Service
//!
//! Implements [`VaultLifecycleApi`] over an injected [`VaultRepository`] and
//! [`TimeSource`].


use serde::{Deserialize, Serialize};
use shared_types::{
    Amount, CircleConversion, DomainError, DomainResult, EntityKind, MediaId, MemberProfile,
    MilestoneId, TimeSource, UserId, VaultFamilyId, VaultId,
};

use crate::domain::{
    FundingProgress, MediaUpload, MessageKind, MilestoneProgress, Vault, VaultDraft, VaultFamily,
    VaultMediaItem, VaultMessage, VaultMilestone, VaultStatus, VoteDecision, VoteRound, VoteTally,
};
use crate::ports::inbound::VaultLifecycleApi;
use crate::ports::outbound::VaultRepository;

/// Vault Lifecycle configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultConfig {
    /// Vote rounds expire this many seconds after opening. `None` keeps them open.
    pub vote_timeout_secs: Option<u64>,
}

impl VaultConfig {
    fn vote_timeout_ms(&self) -> Option<u64> {
        self.vote_timeout_secs.map(|secs| secs.saturating_mul(1000))
    }
}

pub struct VaultLifecycleService<R, T>
where
    R: VaultRepository,
    T: TimeSource,
{
    repository: R,
    time_source: T,
    config: VaultConfig,
}

impl<R, T> VaultLifecycleService<R, T>
where
    R: VaultRepository,
    T: TimeSource,
{
    pub fn new(repository: R, time_source: T, config: VaultConfig) -> Self {
        Self {
            repository,
            time_source,
            config,
        }
    }

    pub fn config(&self) -> &VaultConfig {
        &self.config
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Insert a fully formed vault (mock dataset loading).
    pub fn import_vault(&self, vault: Vault) -> DomainResult<()> {
        tracing::debug!("[ac-02] Importing vault {} ({:?})", vault.id, vault.status);
        self.store_new(vault).map(|_| ())
    }

    /// Insert a fully formed family (mock dataset loading).
    pub fn import_family(&self, family: VaultFamily) -> DomainResult<()> {
        self.repository.insert_family(family)
    }

    fn read<V>(&self, vault_id: &VaultId, f: impl FnOnce(&Vault) -> V) -> DomainResult<V> {
        self.repository
            .get(vault_id)
            .map(|vault| f(&vault))
            .ok_or_else(|| DomainError::not_found(EntityKind::Vault, vault_id))
    }

    fn store_new(&self, vault: Vault) -> DomainResult<Vault> {
        if let Some(family_id) = &vault.family_id {
            if self.repository.get_family(family_id).is_none() {
                return Err(DomainError::not_found(EntityKind::VaultFamily, family_id));
            }
        }
        self.repository.insert(vault.clone())?;
        if let Some(family_id) = &vault.family_id {
            self.repository.attach_to_family(family_id, &vault.id)?;
        }
        Ok(vault)
    }
}

fn log_rejection<T>(command: &str, vault_id: &VaultId, result: DomainResult<T>) -> DomainResult<T> {
    if let Err(err) = &result {
        tracing::warn!("[ac-02] {} rejected for vault {}: {}", command, vault_id, err);
    }
    result
}

impl<R, T> VaultLifecycleApi for VaultLifecycleService<R, T>
where
    R: VaultRepository,
    T: TimeSource,
{
    fn create_vault(&self, draft: VaultDraft) -> DomainResult<Vault> {
        let organizer_id = draft.organizer.id.clone();
        let vault = Vault::create(VaultId::generate(), draft, self.time_source.now())
            .and_then(|vault| self.store_new(vault))
            .inspect_err(|err| {
                tracing::warn!("[ac-02] Vault creation by {} rejected: {}", organizer_id, err)
            })?;
        tracing::info!(
            "[ac-02] Vault {} created by {} (goal {}, {:?})",
            vault.id,
            organizer_id,
            vault.goal,
            vault.category
        );
        Ok(vault)
    }

    fn create_from_circle(&self, conversion: CircleConversion) -> DomainResult<Vault> {
        let circle_id = conversion.circle_id.clone();
        let vault = Vault::from_conversion(conversion, self.time_source.now())
            .and_then(|vault| self.store_new(vault))
            .inspect_err(|err| {
                tracing::warn!("[ac-02] Conversion of circle {} rejected: {}", circle_id, err)
            })?;
        tracing::info!(
            "[ac-02] Vault {} created from circle {} with {} contributors ({} pooled)",
            vault.id,
            circle_id,
            vault.contributors.len(),
            vault.raised
        );
        Ok(vault)
    }

    fn record_contribution(
        &self,
        vault_id: &VaultId,
        contributor: &MemberProfile,
        amount: Amount,
    ) -> DomainResult<Vault> {
        let now = self.time_source.now();
        let result = self.repository.update(vault_id, |vault| {
            vault.record_contribution(contributor, amount, now)?;
            Ok(vault.clone())
        });
        let vault = log_rejection("Contribution", vault_id, result)?;
        tracing::info!(
            "[ac-02] {} contributed {} to vault {} (raised {}/{})",
            contributor.id,
            amount,
            vault_id,
            vault.raised,
            vault.goal
        );
        Ok(vault)
    }

    fn add_milestone(
        &self,
        vault_id: &VaultId,
        title: &str,
        description: &str,
        required: bool,
        created_by: &UserId,
    ) -> DomainResult<VaultMilestone> {
        let result = self.repository.update(vault_id, |vault| {
            vault.add_milestone(title, description, required, created_by.clone())
        });
        let milestone = log_rejection("Milestone", vault_id, result)?;
        tracing::info!(
            "[ac-02] Milestone {} added to vault {} (required: {})",
            milestone.id,
            vault_id,
            required
        );
        Ok(milestone)
    }

    fn start_milestone(&self, vault_id: &VaultId, milestone_id: &MilestoneId) -> DomainResult<()> {
        let result = self
            .repository
            .update(vault_id, |vault| vault.start_milestone(milestone_id));
        log_rejection("Milestone start", vault_id, result)?;
        tracing::debug!("[ac-02] Milestone {} in progress", milestone_id);
        Ok(())
    }

    fn attach_verification(
        &self,
        vault_id: &VaultId,
        milestone_id: &MilestoneId,
        document: MediaUpload,
    ) -> DomainResult<VaultMediaItem> {
        let now = self.time_source.now();
        let result = self.repository.update(vault_id, |vault| {
            let item = vault.attach_verification(milestone_id, document, now)?;
            Ok((item, vault.status))
        });
        let (item, status) = log_rejection("Verification", vault_id, result)?;
        tracing::info!(
            "[ac-02] Milestone {} verified on vault {} with {}",
            milestone_id,
            vault_id,
            item.id
        );
        if status == VaultStatus::MilestonesMet {
            tracing::info!("[ac-02] Vault {} met all required milestones", vault_id);
        }
        Ok(item)
    }

    fn reject_milestone(&self, vault_id: &VaultId, milestone_id: &MilestoneId) -> DomainResult<()> {
        let result = self.repository.update(vault_id, |vault| {
            vault.reject_milestone(milestone_id)?;
            Ok(vault.milestone_progress())
        });
        let progress = log_rejection("Milestone rejection", vault_id, result)?;
        tracing::info!("[ac-02] Milestone {} rejected on vault {}", milestone_id, vault_id);
        if progress.blocked_by_rejection {
            tracing::warn!(
                "[ac-02] Vault {} can no longer meet its required milestones",
                vault_id
            );
        }
        Ok(())
    }

    fn upload_media(
        &self,
        vault_id: &VaultId,
        upload: MediaUpload,
        linked_milestone_id: Option<MilestoneId>,
    ) -> DomainResult<VaultMediaItem> {
        let now = self.time_source.now();
        let result = self.repository.update(vault_id, |vault| {
            vault.upload_media(upload, linked_milestone_id, now)
        });
        let item = log_rejection("Media upload", vault_id, result)?;
        tracing::debug!("[ac-02] Media {} uploaded to vault {}", item.id, vault_id);
        Ok(item)
    }

    fn post_message(
        &self,
        vault_id: &VaultId,
        user_id: &UserId,
        content: &str,
        kind: MessageKind,
        attached_media_id: Option<MediaId>,
    ) -> DomainResult<VaultMessage> {
        let now = self.time_source.now();
        let result = self.repository.update(vault_id, |vault| {
            vault.post_message(user_id.clone(), content, kind, attached_media_id, now)
        });
        log_rejection("Message", vault_id, result)
    }

    fn open_vote_round(&self, vault_id: &VaultId) -> DomainResult<VoteRound> {
        let now = self.time_source.now();
        let timeout = self.config.vote_timeout_ms();
        let result = self
            .repository
            .update(vault_id, |vault| vault.open_vote_round(now, timeout));
        let round = log_rejection("Vote round", vault_id, result)?;
        tracing::info!(
            "[ac-02] Vault {} opened vote round {} (deadline: {:?})",
            vault_id,
            round.number,
            round.deadline
        );
        Ok(round)
    }

    fn cast_vote(
        &self,
        vault_id: &VaultId,
        contributor_id: &UserId,
        decision: VoteDecision,
    ) -> DomainResult<VoteTally> {
        let now = self.time_source.now();
        let result = self
            .repository
            .update(vault_id, |vault| vault.cast_vote(contributor_id, decision, now));
        let tally = log_rejection("Vote", vault_id, result)?;
        tracing::info!(
            "[ac-02] {} voted {:?} on vault {} ({}/{} approvals needed)",
            contributor_id,
            decision,
            vault_id,
            tally.approvals,
            tally.majority
        );
        Ok(tally)
    }

    fn release_funds(&self, vault_id: &VaultId) -> DomainResult<Vault> {
        let now = self.time_source.now();
        let result = self.repository.update(vault_id, |vault| {
            vault.release_funds(now)?;
            Ok(vault.clone())
        });
        let vault = log_rejection("Release", vault_id, result)?;
        tracing::info!("[ac-02] Vault {} released {}", vault_id, vault.raised);
        Ok(vault)
    }

    fn get_vaults(&self) -> Vec<Vault> {
        self.repository.list()
    }

    fn get_vault_by_id(&self, vault_id: &VaultId) -> Option<Vault> {
        self.repository.get(vault_id)
    }

    fn vote_tally(&self, vault_id: &VaultId) -> DomainResult<VoteTally> {
        self.read(vault_id, Vault::tally)
    }

    fn funding_progress(&self, vault_id: &VaultId) -> DomainResult<FundingProgress> {
        self.read(vault_id, Vault::funding_progress)
    }

    fn milestone_progress(&self, vault_id: &VaultId) -> DomainResult<MilestoneProgress> {
        self.read(vault_id, Vault::milestone_progress)
    }

    fn create_family(&self, name: &str, icon: &str) -> DomainResult<VaultFamily> {
        if name.trim().is_empty() {
            return Err(DomainError::precondition("family name is required"));
        }
        let family = VaultFamily {
            id: VaultFamilyId::generate(),
            name: name.trim().to_string(),
            icon: icon.to_string(),
            vault_ids: Vec::new(),
        };
        self.repository.insert_family(family.clone())?;
        tracing::info!("[ac-02] Vault family {} created", family.id);
        Ok(family)
    }

    fn get_vault_families(&self) -> Vec<VaultFamily> {
        self.repository.list_families()
    }

    fn vaults_in_family(&self, family_id: &VaultFamilyId) -> DomainResult<Vec<Vault>> {
        let family = self
            .repository
            .get_family(family_id)
            .ok_or_else(|| DomainError::not_found(EntityKind::VaultFamily, family_id))?;
        Ok(family
            .vault_ids
            .iter()
            .filter_map(|id| self.repository.get(id))
            .collect())
    }
}
