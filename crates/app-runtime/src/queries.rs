//! Read-only snapshots for the presentation layer.
//!
//! Thin delegation over the subsystem APIs, plus a few views scoped to the
//! acting member.

use ac_01_rotation_ledger::{Circle, RotationLedgerApi};
use ac_02_vault_lifecycle::{Vault, VaultLifecycleApi};
use ac_03_marketplace_catalog::{Listing, MarketplaceCatalogApi, SocialPost};
use ac_06_community_directory::{CommunityDirectoryApi, LearnModule, Member};
use serde::Serialize;
use shared_types::{CircleId, ModuleId, UserId, VaultId};

use crate::container::AppContainer;

/// Everything a member's profile screen shows.
#[derive(Debug, Clone, Serialize)]
pub struct MemberPage {
    pub member: Member,
    /// Listings the member sells or organizes.
    pub storefront: Vec<Listing>,
    pub posts: Vec<SocialPost>,
}

impl AppContainer {
    pub fn get_circles(&self) -> Vec<Circle> {
        self.ledger.get_circles()
    }

    pub fn get_circle_by_id(&self, id: &CircleId) -> Option<Circle> {
        self.ledger.get_circle_by_id(id)
    }

    pub fn get_vault_by_id(&self, id: &VaultId) -> Option<Vault> {
        self.vaults.get_vault_by_id(id)
    }

    pub fn get_opportunities(&self) -> Vec<Listing> {
        self.catalog.get_opportunities()
    }

    pub fn search_circles(&self, text: &str) -> Vec<Circle> {
        self.ledger.search_circles(text)
    }

    /// Unread notifications.
    pub fn get_unread_count(&self) -> usize {
        self.catalog.get_unread_count()
    }

    /// Active or voting circles the acting member sits in.
    pub fn my_circles(&self) -> Vec<Circle> {
        self.ledger.get_my_circles(&self.current_user.id)
    }

    /// Vaults the acting member organizes or contributed to.
    pub fn my_vaults(&self) -> Vec<Vault> {
        let me = &self.current_user.id;
        self.vaults
            .get_vaults()
            .into_iter()
            .filter(|v| &v.organizer_id == me || v.contributor(me).is_some())
            .collect()
    }

    /// Directory entry of the acting member.
    pub fn get_user(&self) -> Option<Member> {
        self.directory.get_member_by_id(&self.current_user.id)
    }

    pub fn get_user_by_id(&self, id: &UserId) -> Option<Member> {
        self.directory.get_member_by_id(id)
    }

    pub fn get_user_by_username(&self, username: &str) -> Option<Member> {
        self.directory.get_member_by_username(username)
    }

    pub fn get_all_users(&self) -> Vec<Member> {
        self.directory.get_all_members()
    }

    pub fn member_page(&self, id: &UserId) -> Option<MemberPage> {
        let member = self.directory.get_member_by_id(id)?;
        Some(MemberPage {
            storefront: self.catalog.list_by_owner(id),
            posts: self.catalog.get_posts_by_user(id),
            member,
        })
    }

    pub fn get_modules(&self) -> Vec<LearnModule> {
        self.directory.get_modules()
    }

    pub fn get_module_by_id(&self, id: &ModuleId) -> Option<LearnModule> {
        self.directory.get_module_by_id(id)
    }
}
