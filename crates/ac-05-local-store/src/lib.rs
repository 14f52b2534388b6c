//! # Local Store Subsystem
//!
//! **Subsystem ID:** 5
//!
//! ## Purpose
//!
//! Device-local key-value persistence used by the storefront settings: a
//! string-keyed store of JSON blobs with read, write and delete by key, and the
//! shop settings built on it (business mode, storefront items).
//!
//! ## Module Structure (Hexagonal Architecture)
//!
//! ```text
//! adapters/  - InMemoryKVStore, JsonFileKVStore
//! ports/     - KeyValueStore (outbound), KeyValueStoreExt (typed JSON access)
//! domain/    - StoreError, ShopError, ShopItemUpdate
//! service/   - ShopSettings
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use adapters::{InMemoryKVStore, JsonFileKVStore};
pub use domain::*;
pub use ports::{KeyValueStore, KeyValueStoreExt};
pub use service::{ShopSettings, BUSINESS_MODE_KEY, SHOP_ITEMS_KEY};
