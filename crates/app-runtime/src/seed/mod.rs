//! # Seed Module
//!
//! The dataset the presentation layer renders on first launch.
//!
//! ## Loading Sequence
//!
//! 1. Build every entity through its domain constructor (so seeded state obeys
//!    the same invariants as state reached through commands)
//! 2. Import circles into the Rotation Ledger
//! 3. Import vault families, then vaults (vaults attach to their family)
//! 4. Import listings, posts, notifications and conversations into the catalog
//! 5. Import members and learning modules into the directory

pub mod mock;

pub use mock::mock_dataset;

use ac_01_rotation_ledger::{Circle, CircleRepository, RotationLedgerService};
use ac_02_vault_lifecycle::{Vault, VaultFamily, VaultLifecycleService, VaultRepository};
use ac_03_marketplace_catalog::{
    CatalogRepository, Conversation, DirectMessage, Listing, MarketplaceCatalogService,
    Notification, SocialPost,
};
use ac_06_community_directory::{
    CommunityDirectoryService, DirectoryRepository, LearnModule, Member,
};
use serde::Serialize;
use shared_types::{DomainResult, MemberProfile, TimeSource};

/// Everything seeded into a fresh container.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Member the presentation layer acts as.
    pub current_user: MemberProfile,
    pub circles: Vec<Circle>,
    pub families: Vec<VaultFamily>,
    pub vaults: Vec<Vault>,
    pub listings: Vec<Listing>,
    pub posts: Vec<SocialPost>,
    pub notifications: Vec<Notification>,
    pub conversations: Vec<(Conversation, Vec<DirectMessage>)>,
    pub members: Vec<Member>,
    pub modules: Vec<LearnModule>,
}

impl Dataset {
    /// No seeded content, only the acting member.
    pub fn empty(current_user: MemberProfile) -> Self {
        Self {
            current_user,
            circles: Vec::new(),
            families: Vec::new(),
            vaults: Vec::new(),
            listings: Vec::new(),
            posts: Vec::new(),
            notifications: Vec::new(),
            conversations: Vec::new(),
            members: Vec::new(),
            modules: Vec::new(),
        }
    }

    pub fn summary(&self) -> DatasetSummary {
        DatasetSummary {
            circles: self.circles.len(),
            vaults: self.vaults.len(),
            families: self.families.len(),
            listings: self.listings.len(),
            posts: self.posts.len(),
            notifications: self.notifications.len(),
            conversations: self.conversations.len(),
            members: self.members.len(),
            modules: self.modules.len(),
        }
    }
}

/// Entity counts, logged at boot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DatasetSummary {
    pub circles: usize,
    pub vaults: usize,
    pub families: usize,
    pub listings: usize,
    pub posts: usize,
    pub notifications: usize,
    pub conversations: usize,
    pub members: usize,
    pub modules: usize,
}

/// Import `dataset` into the subsystem services.
pub fn load<CR, VR, CatR, DR, T1, T2>(
    dataset: Dataset,
    ledger: &RotationLedgerService<CR, T1>,
    vaults: &VaultLifecycleService<VR, T2>,
    catalog: &MarketplaceCatalogService<CatR>,
    directory: &CommunityDirectoryService<DR>,
) -> DomainResult<DatasetSummary>
where
    CR: CircleRepository,
    VR: VaultRepository,
    CatR: CatalogRepository,
    DR: DirectoryRepository,
    T1: TimeSource,
    T2: TimeSource,
{
    let summary = dataset.summary();

    for circle in dataset.circles {
        ledger.import_circle(circle)?;
    }
    for family in dataset.families {
        vaults.import_family(family)?;
    }
    for vault in dataset.vaults {
        vaults.import_vault(vault)?;
    }
    for listing in dataset.listings {
        catalog.import_listing(listing)?;
    }
    for post in dataset.posts {
        catalog.import_post(post)?;
    }
    for notification in dataset.notifications {
        catalog.import_notification(notification)?;
    }
    for (conversation, messages) in dataset.conversations {
        catalog.import_conversation(conversation, messages)?;
    }
    for member in dataset.members {
        directory.import_member(member)?;
    }
    for module in dataset.modules {
        directory.import_module(module)?;
    }

    tracing::info!(
        "[runtime] Seeded {} circles, {} vaults in {} families, {} listings, {} members, {} modules",
        summary.circles,
        summary.vaults,
        summary.families,
        summary.listings,
        summary.members,
        summary.modules
    );
    Ok(summary)
}
