//! Driven Ports (SPI - Outbound Dependencies)

use shared_types::DomainResult;

use crate::domain::{LearnModule, Member};

/// Backing store for directory content, loaded once at boot.
pub trait DirectoryRepository: Send + Sync {
    fn insert_member(&self, member: Member) -> DomainResult<()>;

    fn members(&self) -> Vec<Member>;

    fn insert_module(&self, module: LearnModule) -> DomainResult<()>;

    fn modules(&self) -> Vec<LearnModule>;
}
