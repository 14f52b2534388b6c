//! Cross-subsystem tests.

pub mod flows;
pub mod properties;
pub mod scenarios;

#[cfg(test)]
pub(crate) mod fixtures {
    use std::sync::Arc;

    use ac_01_rotation_ledger::{
        CircleDraft, InMemoryCircleRepository, JoinDecision, LedgerConfig, RotationLedgerApi,
        RotationLedgerService,
    };
    use ac_02_vault_lifecycle::{InMemoryVaultRepository, VaultConfig, VaultLifecycleService};
    use shared_types::{Amount, CircleId, ManualTimeSource, MemberProfile};

    pub const NOW: u64 = 1_700_000_000_000;

    pub type Ledger = RotationLedgerService<InMemoryCircleRepository, Arc<ManualTimeSource>>;
    pub type Vaults = VaultLifecycleService<InMemoryVaultRepository, Arc<ManualTimeSource>>;

    pub fn clock() -> Arc<ManualTimeSource> {
        Arc::new(ManualTimeSource::new(NOW))
    }

    pub fn ledger(clock: &Arc<ManualTimeSource>) -> Ledger {
        RotationLedgerService::new(
            InMemoryCircleRepository::new(),
            Arc::clone(clock),
            LedgerConfig::default(),
        )
    }

    pub fn vaults(clock: &Arc<ManualTimeSource>) -> Vaults {
        VaultLifecycleService::new(
            InMemoryVaultRepository::new(),
            Arc::clone(clock),
            VaultConfig::default(),
        )
    }

    pub fn profile(id: &str) -> MemberProfile {
        MemberProfile::new(id, format!("member {}", id))
    }

    pub fn draft(contribution: Amount, vault_contribution: Option<Amount>) -> CircleDraft {
        CircleDraft {
            name: "Harbor Street Circle".to_string(),
            avatar: None,
            contribution,
            vault_contribution,
            description: "Neighbours saving together".to_string(),
        }
    }

    /// Active circle organized by `m1` with members `m2..m4` approved in order.
    pub fn active_circle(
        ledger: &dyn RotationLedgerApi,
        contribution: Amount,
        vault_contribution: Option<Amount>,
    ) -> CircleId {
        let circle = ledger
            .create_circle(profile("m1"), draft(contribution, vault_contribution))
            .unwrap();
        for id in ["m2", "m3", "m4"] {
            let request = ledger
                .request_join(&circle.id, profile(id), 5000, "hello")
                .unwrap();
            ledger
                .resolve_join_request(&circle.id, &request.id, JoinDecision::Approve)
                .unwrap();
        }
        circle.id
    }
}
