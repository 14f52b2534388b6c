//! Driving Ports (API - Inbound)

use shared_types::{DomainResult, ModuleId, UserId};

use crate::domain::{LearnCategory, LearnModule, Member, ModuleProgress};

/// Primary Community Directory API.
pub trait CommunityDirectoryApi: Send + Sync {
    /// Every member in load order.
    fn get_all_members(&self) -> Vec<Member>;

    fn get_member_by_id(&self, id: &UserId) -> Option<Member>;

    /// Exact username lookup.
    fn get_member_by_username(&self, username: &str) -> Option<Member>;

    fn get_modules(&self) -> Vec<LearnModule>;

    fn get_module_by_id(&self, id: &ModuleId) -> Option<LearnModule>;

    /// Modules in `category`; `None` means every category.
    fn modules_in(&self, category: Option<LearnCategory>) -> Vec<LearnModule>;

    fn search_modules(&self, query: &str) -> Vec<LearnModule>;

    /// Number of modules marked completed.
    fn completed_module_count(&self) -> usize;

    /// First module not yet completed, in load order.
    fn next_module(&self) -> Option<LearnModule>;

    /// Fails with `NotFound` for an unknown module.
    fn module_progress(&self, id: &ModuleId) -> DomainResult<ModuleProgress>;
}
