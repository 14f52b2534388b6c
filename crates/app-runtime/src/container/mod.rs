//! # Service Container
//!
//! Builds every subsystem once at process start and hands them out behind
//! `Arc`, so the presentation layer and the coordinator share one state.

pub mod config;
pub mod subsystems;

pub use config::{load_config, AppConfig, ConfigError, LoggingConfig, StorageConfig};
pub use subsystems::{
    AppContainer, BootstrapError, CartService, CatalogService, Clock, DirectoryService,
    LedgerService, SharedStore, Shop, VaultService,
};
