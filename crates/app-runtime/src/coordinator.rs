//! # Circle -> Vault Coordination
//!
//! The Rotation Ledger and the Vault Lifecycle never call each other. When a
//! circle's members vote to pool their set-asides, the coordinator resolves the
//! vote on the ledger and hands the resulting [`CircleConversion`] to the vault
//! service.
//!
//! [`CircleConversion`]: shared_types::CircleConversion

use std::sync::Arc;

use ac_01_rotation_ledger::{CycleOutcome, CycleResolution, RotationLedgerApi};
use ac_02_vault_lifecycle::{Vault, VaultLifecycleApi};
use shared_types::{CircleId, DomainError, DomainResult, EntityKind};
use tracing::{error, info};

/// What happened to a circle whose cycle vote was settled.
#[derive(Debug, Clone, PartialEq)]
pub enum SettledCycle {
    Restarted,
    Ended,
    Converted(Vault),
}

#[derive(Clone)]
pub struct CircleVaultCoordinator {
    ledger: Arc<dyn RotationLedgerApi>,
    vaults: Arc<dyn VaultLifecycleApi>,
}

impl CircleVaultCoordinator {
    pub fn new(ledger: Arc<dyn RotationLedgerApi>, vaults: Arc<dyn VaultLifecycleApi>) -> Self {
        Self { ledger, vaults }
    }

    /// Close a voting circle and open its successor vault.
    pub fn convert_to_vault(&self, circle_id: &CircleId) -> DomainResult<Vault> {
        let resolution = self
            .ledger
            .resolve_cycle_vote(circle_id, CycleOutcome::ConvertToVault)?;
        let CycleResolution::ConvertedToVault(conversion) = resolution else {
            return Err(DomainError::precondition(format!(
                "circle {} did not convert",
                circle_id
            )));
        };

        let vault_id = conversion.vault_id.clone();
        let vault = self.vaults.create_from_circle(conversion).inspect_err(|err| {
            error!(
                "[runtime] Circle {} closed but vault {} was not created: {}",
                circle_id, vault_id, err
            )
        })?;
        info!(
            "[runtime] Circle {} converted into vault {} ({} raised)",
            circle_id, vault.id, vault.raised
        );
        Ok(vault)
    }

    /// Apply whichever outcome holds a strict majority of the members' ballots.
    pub fn settle_cycle(&self, circle_id: &CircleId) -> DomainResult<SettledCycle> {
        let circle = self
            .ledger
            .get_circle_by_id(circle_id)
            .ok_or_else(|| DomainError::not_found(EntityKind::Circle, circle_id))?;
        let outcome = circle.ballot_leader().ok_or_else(|| {
            DomainError::precondition(format!("no outcome holds a majority in circle {}", circle_id))
        })?;

        match outcome {
            CycleOutcome::ConvertToVault => self.convert_to_vault(circle_id).map(SettledCycle::Converted),
            other => match self.ledger.resolve_cycle_vote(circle_id, other)? {
                CycleResolution::Restarted => Ok(SettledCycle::Restarted),
                CycleResolution::Ended => Ok(SettledCycle::Ended),
                CycleResolution::ConvertedToVault(_) => Err(DomainError::precondition(format!(
                    "circle {} converted without a vault",
                    circle_id
                ))),
            },
        }
    }
}
