//! Driven Ports (SPI - Outbound Dependencies)

use shared_types::{DomainResult, VaultFamilyId, VaultId};

use crate::domain::{Vault, VaultFamily};

/// Vault and vault family storage.
pub trait VaultRepository: Send + Sync {
    /// Store a new vault. Fails if the id is taken.
    fn insert(&self, vault: Vault) -> DomainResult<()>;

    fn get(&self, id: &VaultId) -> Option<Vault>;

    /// Snapshots of all vaults in insertion order.
    fn list(&self) -> Vec<Vault>;

    /// Apply `f` to a vault atomically.
    ///
    /// `f` works on a copy; the copy is committed only when `f` returns `Ok`.
    fn update<T, F>(&self, id: &VaultId, f: F) -> DomainResult<T>
    where
        F: FnOnce(&mut Vault) -> DomainResult<T>;

    fn insert_family(&self, family: VaultFamily) -> DomainResult<()>;

    fn get_family(&self, id: &VaultFamilyId) -> Option<VaultFamily>;

    fn list_families(&self) -> Vec<VaultFamily>;

    /// Append a vault id to a family.
    fn attach_to_family(&self, family_id: &VaultFamilyId, vault_id: &VaultId) -> DomainResult<()>;
}
