use parking_lot::RwLock;
use shared_types::{DomainError, DomainResult};

use crate::domain::{LearnModule, Member};
use crate::ports::outbound::DirectoryRepository;

#[derive(Default)]
struct Inner {
    members: Vec<Member>,
    modules: Vec<LearnModule>,
}

/// In-memory directory, kept in load order.
#[derive(Default)]
pub struct InMemoryDirectory {
    inner: RwLock<Inner>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DirectoryRepository for InMemoryDirectory {
    fn insert_member(&self, member: Member) -> DomainResult<()> {
        let mut inner = self.inner.write();
        if let Some(clash) = inner
            .members
            .iter()
            .find(|m| m.id() == member.id() || m.username() == member.username())
        {
            return Err(DomainError::precondition(format!(
                "member {} ({}) clashes with {} ({})",
                member.id(),
                member.username(),
                clash.id(),
                clash.username()
            )));
        }
        inner.members.push(member);
        Ok(())
    }

    fn members(&self) -> Vec<Member> {
        self.inner.read().members.clone()
    }

    fn insert_module(&self, module: LearnModule) -> DomainResult<()> {
        let mut inner = self.inner.write();
        if inner.modules.iter().any(|m| m.id == module.id) {
            return Err(DomainError::precondition(format!(
                "module {} already exists",
                module.id
            )));
        }
        inner.modules.push(module);
        Ok(())
    }

    fn modules(&self) -> Vec<LearnModule> {
        self.inner.read().modules.clone()
    }
}
