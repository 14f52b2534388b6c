//! # App Container
//!
//! ## Initialization Order
//!
//! ```text
//! 1. Validate configuration
//! 2. Open the key-value store (file-backed when configured)
//! 3. Rotation Ledger, Vault Lifecycle, Marketplace Catalog, Cart Session,
//!    Community Directory
//! 4. Seed the dataset
//! 5. Shop settings, seeded with the current user's listings
//! 6. Circle -> vault coordinator over the ledger and vault services
//! ```

use std::sync::Arc;

use ac_01_rotation_ledger::{InMemoryCircleRepository, RotationLedgerApi, RotationLedgerService};
use ac_02_vault_lifecycle::{InMemoryVaultRepository, VaultLifecycleApi, VaultLifecycleService};
use ac_03_marketplace_catalog::{InMemoryCatalog, MarketplaceCatalogApi, MarketplaceCatalogService};
use ac_04_cart_session::CartSessionService;
use ac_05_local_store::{InMemoryKVStore, JsonFileKVStore, KeyValueStore, ShopSettings, StoreError};
use ac_06_community_directory::{
    CommunityDirectoryApi, CommunityDirectoryService, InMemoryDirectory,
};
use shared_types::{DomainError, MemberProfile, SystemTimeSource, TimeSource};
use thiserror::Error;
use tracing::info;

use crate::container::config::{AppConfig, ConfigError};
use crate::coordinator::CircleVaultCoordinator;
use crate::seed::{self, Dataset, DatasetSummary};

/// Clock shared by every time-aware subsystem.
pub type Clock = Arc<dyn TimeSource>;

pub type LedgerService = RotationLedgerService<InMemoryCircleRepository, Clock>;
pub type VaultService = VaultLifecycleService<InMemoryVaultRepository, Clock>;
pub type CatalogService = MarketplaceCatalogService<InMemoryCatalog>;
pub type CartService = CartSessionService<Clock>;
pub type DirectoryService = CommunityDirectoryService<InMemoryDirectory>;
pub type SharedStore = Arc<dyn KeyValueStore>;
pub type Shop = ShopSettings<SharedStore>;

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("key-value store: {0}")]
    Store(#[from] StoreError),

    #[error("seed dataset: {0}")]
    Seed(#[from] DomainError),
}

pub struct AppContainer {
    pub config: AppConfig,
    /// Member the presentation layer acts as.
    pub current_user: MemberProfile,
    pub ledger: Arc<LedgerService>,
    pub vaults: Arc<VaultService>,
    pub catalog: Arc<CatalogService>,
    pub cart: Arc<CartService>,
    pub directory: Arc<DirectoryService>,
    pub shop: Arc<Shop>,
    pub coordinator: CircleVaultCoordinator,
    pub seeded: DatasetSummary,
}

impl AppContainer {
    /// Wire every subsystem and load `dataset`.
    pub fn build(config: AppConfig, clock: Clock, dataset: Dataset) -> Result<Self, BootstrapError> {
        config.validate()?;

        let store: SharedStore = match &config.storage.kv_path {
            Some(path) => {
                info!("[runtime] Opening key-value store at {}", path.display());
                Arc::new(JsonFileKVStore::open(path)?)
            }
            None => Arc::new(InMemoryKVStore::new()),
        };

        let ledger = Arc::new(RotationLedgerService::new(
            InMemoryCircleRepository::new(),
            Arc::clone(&clock),
            config.ledger.clone(),
        ));
        let vaults = Arc::new(VaultLifecycleService::new(
            InMemoryVaultRepository::new(),
            Arc::clone(&clock),
            config.vault.clone(),
        ));
        let catalog = Arc::new(MarketplaceCatalogService::new(
            InMemoryCatalog::new(),
            config.catalog.clone(),
        ));
        let cart = Arc::new(CartSessionService::new(Arc::clone(&clock)));
        let directory = Arc::new(CommunityDirectoryService::new(InMemoryDirectory::new()));

        let current_user = dataset.current_user.clone();
        let seeded = seed::load(dataset, &*ledger, &*vaults, &*catalog, &*directory)?;

        let seed_items = catalog.list_by_owner(&current_user.id);
        let default_business_mode = !seed_items.is_empty();
        let shop = Arc::new(ShopSettings::new(store, seed_items, default_business_mode));

        let coordinator = CircleVaultCoordinator::new(
            Arc::clone(&ledger) as Arc<dyn RotationLedgerApi>,
            Arc::clone(&vaults) as Arc<dyn VaultLifecycleApi>,
        );

        info!(
            "[runtime] Container ready for {} (rotation {}, vote timeout {:?})",
            current_user.id, config.ledger.rotation_policy, config.vault.vote_timeout_secs
        );

        Ok(Self {
            config,
            current_user,
            ledger,
            vaults,
            catalog,
            cart,
            directory,
            shop,
            coordinator,
            seeded,
        })
    }

    /// Wall clock plus the mock dataset.
    pub fn with_mock_data(config: AppConfig) -> Result<Self, BootstrapError> {
        let clock: Clock = Arc::new(SystemTimeSource);
        let dataset = seed::mock_dataset(clock.now())?;
        Self::build(config, clock, dataset)
    }

    pub fn ledger_api(&self) -> Arc<dyn RotationLedgerApi> {
        Arc::clone(&self.ledger) as Arc<dyn RotationLedgerApi>
    }

    pub fn vault_api(&self) -> Arc<dyn VaultLifecycleApi> {
        Arc::clone(&self.vaults) as Arc<dyn VaultLifecycleApi>
    }

    pub fn catalog_api(&self) -> Arc<dyn MarketplaceCatalogApi> {
        Arc::clone(&self.catalog) as Arc<dyn MarketplaceCatalogApi>
    }

    pub fn directory_api(&self) -> Arc<dyn CommunityDirectoryApi> {
        Arc::clone(&self.directory) as Arc<dyn CommunityDirectoryApi>
    }
}
