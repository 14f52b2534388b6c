//! # Community Directory Service
//!
//! Read-only query surface over a [`DirectoryRepository`]. Content is
//! validated when it is imported.

#[cfg(test)]
mod tests;

use shared_types::{DomainError, DomainResult, EntityKind, ModuleId, UserId};

use crate::domain::{LearnCategory, LearnModule, Member, ModuleProgress};
use crate::ports::inbound::CommunityDirectoryApi;
use crate::ports::outbound::DirectoryRepository;

pub struct CommunityDirectoryService<R: DirectoryRepository> {
    repository: R,
}

impl<R: DirectoryRepository> CommunityDirectoryService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Validate and load a member (mock dataset loading).
    pub fn import_member(&self, member: Member) -> DomainResult<()> {
        member.validate().inspect_err(|err| {
            tracing::warn!("[ac-06] Member {} rejected: {}", member.id(), err)
        })?;
        tracing::debug!("[ac-06] Importing member {} (@{})", member.id(), member.username());
        self.repository.insert_member(member)
    }

    /// Validate and load a learning module.
    pub fn import_module(&self, module: LearnModule) -> DomainResult<()> {
        module
            .validate()
            .inspect_err(|err| tracing::warn!("[ac-06] Module {} rejected: {}", module.id, err))?;
        tracing::debug!("[ac-06] Importing module {} ({:?})", module.id, module.category);
        self.repository.insert_module(module)
    }

    fn modules_where(&self, predicate: impl Fn(&LearnModule) -> bool) -> Vec<LearnModule> {
        self.repository
            .modules()
            .into_iter()
            .filter(|m| predicate(m))
            .collect()
    }
}

impl<R: DirectoryRepository> CommunityDirectoryApi for CommunityDirectoryService<R> {
    fn get_all_members(&self) -> Vec<Member> {
        self.repository.members()
    }

    fn get_member_by_id(&self, id: &UserId) -> Option<Member> {
        self.repository.members().into_iter().find(|m| m.id() == id)
    }

    fn get_member_by_username(&self, username: &str) -> Option<Member> {
        self.repository
            .members()
            .into_iter()
            .find(|m| m.username() == username)
    }

    fn get_modules(&self) -> Vec<LearnModule> {
        self.repository.modules()
    }

    fn get_module_by_id(&self, id: &ModuleId) -> Option<LearnModule> {
        self.repository.modules().into_iter().find(|m| &m.id == id)
    }

    fn modules_in(&self, category: Option<LearnCategory>) -> Vec<LearnModule> {
        match category {
            Some(category) => self.modules_where(|m| m.category == category),
            None => self.repository.modules(),
        }
    }

    fn search_modules(&self, query: &str) -> Vec<LearnModule> {
        self.modules_where(|m| m.matches(query))
    }

    fn completed_module_count(&self) -> usize {
        self.repository
            .modules()
            .iter()
            .filter(|m| m.completed)
            .count()
    }

    fn next_module(&self) -> Option<LearnModule> {
        self.repository.modules().into_iter().find(|m| !m.completed)
    }

    fn module_progress(&self, id: &ModuleId) -> DomainResult<ModuleProgress> {
        self.get_module_by_id(id)
            .map(|m| m.progress())
            .ok_or_else(|| DomainError::not_found(EntityKind::LearnModule, id))
    }
}
