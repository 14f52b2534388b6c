use std::collections::HashMap;

use parking_lot::RwLock;
use shared_types::{DomainError, DomainResult, EntityKind, VaultFamilyId, VaultId};

use crate::domain::{Vault, VaultFamily};
use crate::ports::outbound::VaultRepository;

#[derive(Default)]
struct Inner {
    vaults: HashMap<VaultId, Vault>,
    order: Vec<VaultId>,
    families: Vec<VaultFamily>,
}

/// In-memory vault store guarded by one lock.
#[derive(Default)]
pub struct InMemoryVaultRepository {
    inner: RwLock<Inner>,
}

impl InMemoryVaultRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.read().order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl VaultRepository for InMemoryVaultRepository {
    fn insert(&self, vault: Vault) -> DomainResult<()> {
        let mut inner = self.inner.write();
        if inner.vaults.contains_key(&vault.id) {
            return Err(DomainError::precondition(format!(
                "vault {} already exists",
                vault.id
            )));
        }
        inner.order.push(vault.id.clone());
        inner.vaults.insert(vault.id.clone(), vault);
        Ok(())
    }

    fn get(&self, id: &VaultId) -> Option<Vault> {
        self.inner.read().vaults.get(id).cloned()
    }

    fn list(&self) -> Vec<Vault> {
        let inner = self.inner.read();
        inner
            .order
            .iter()
            .filter_map(|id| inner.vaults.get(id).cloned())
            .collect()
    }

    fn update<T, F>(&self, id: &VaultId, f: F) -> DomainResult<T>
    where
        F: FnOnce(&mut Vault) -> DomainResult<T>,
    {
        let mut inner = self.inner.write();
        let stored = inner
            .vaults
            .get_mut(id)
            .ok_or_else(|| DomainError::not_found(EntityKind::Vault, id))?;
        let mut working = stored.clone();
        let result = f(&mut working)?;
        *stored = working;
        Ok(result)
    }

    fn insert_family(&self, family: VaultFamily) -> DomainResult<()> {
        let mut inner = self.inner.write();
        if inner.families.iter().any(|f| f.id == family.id) {
            return Err(DomainError::precondition(format!(
                "vault family {} already exists",
                family.id
            )));
        }
        inner.families.push(family);
        Ok(())
    }

    fn get_family(&self, id: &VaultFamilyId) -> Option<VaultFamily> {
        self.inner
            .read()
            .families
            .iter()
            .find(|f| &f.id == id)
            .cloned()
    }

    fn list_families(&self) -> Vec<VaultFamily> {
        self.inner.read().families.clone()
    }

    fn attach_to_family(&self, family_id: &VaultFamilyId, vault_id: &VaultId) -> DomainResult<()> {
        let mut inner = self.inner.write();
        let family = inner
            .families
            .iter_mut()
            .find(|f| &f.id == family_id)
            .ok_or_else(|| DomainError::not_found(EntityKind::VaultFamily, family_id))?;
        if !family.vault_ids.contains(vault_id) {
            family.vault_ids.push(vault_id.clone());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::test_support::draft;

    fn vault(id: &str) -> Vault {
        Vault::create(VaultId::from(id), draft(1000), 0).unwrap()
    }

    #[test]
    fn test_failed_update_is_discarded() {
        let repo = InMemoryVaultRepository::new();
        repo.insert(vault("v1")).unwrap();

        let result: DomainResult<()> = repo.update(&"v1".into(), |v| {
            v.raised = 999;
            Err(DomainError::precondition("nope"))
        });
        assert!(result.is_err());
        assert_eq!(repo.get(&"v1".into()).unwrap().raised, 0);
    }

    #[test]
    fn test_families() {
        let repo = InMemoryVaultRepository::new();
        repo.insert_family(VaultFamily {
            id: "f1".into(),
            name: "Neighbourhood".to_string(),
            icon: "🏘".to_string(),
            vault_ids: Vec::new(),
        })
        .unwrap();
        repo.attach_to_family(&"f1".into(), &"v1".into()).unwrap();
        repo.attach_to_family(&"f1".into(), &"v1".into()).unwrap();

        assert_eq!(repo.get_family(&"f1".into()).unwrap().vault_ids.len(), 1);
        let err = repo.attach_to_family(&"nope".into(), &"v1".into()).unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }
}
