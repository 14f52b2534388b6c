//! # Shop Settings
//!
//! Business-mode flag and storefront items cached over a [`KeyValueStore`].
//!
//! Reads go to the store once and are cached afterwards. Writes hit the store
//! first; the cache changes only when the write succeeded.


use ac_03_marketplace_catalog::Listing;
use parking_lot::RwLock;
use shared_types::{DomainError, EntityKind, ListingId};

use crate::domain::{ShopError, ShopItemUpdate, StoreError};
use crate::ports::outbound::{KeyValueStore, KeyValueStoreExt};

pub const BUSINESS_MODE_KEY: &str = "ascor_business_mode";
pub const SHOP_ITEMS_KEY: &str = "ascor_shop_items";

pub struct ShopSettings<S: KeyValueStore> {
    store: S,
    /// Owner's seeded storefront, used until items are first saved.
    seed_items: Vec<Listing>,
    /// Reported when the stored flag cannot be read.
    default_business_mode: bool,
    business_mode: RwLock<Option<bool>>,
    items: RwLock<Option<Vec<Listing>>>,
}

impl<S: KeyValueStore> ShopSettings<S> {
    pub fn new(store: S, seed_items: Vec<Listing>, default_business_mode: bool) -> Self {
        Self {
            store,
            seed_items,
            default_business_mode,
            business_mode: RwLock::new(None),
            items: RwLock::new(None),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn business_mode(&self) -> bool {
        if let Some(cached) = *self.business_mode.read() {
            return cached;
        }
        match self.store.get(BUSINESS_MODE_KEY) {
            Ok(value) => {
                let enabled = value.as_deref() == Some("true");
                *self.business_mode.write() = Some(enabled);
                enabled
            }
            Err(err) => {
                tracing::warn!("[ac-05] Reading business mode failed: {}", err);
                self.default_business_mode
            }
        }
    }

    pub fn set_business_mode(&self, enabled: bool) -> Result<(), StoreError> {
        self.store.put(BUSINESS_MODE_KEY, if enabled { "true" } else { "false" })?;
        *self.business_mode.write() = Some(enabled);
        tracing::info!("[ac-05] Business mode set to {}", enabled);
        Ok(())
    }

    /// Saved items, or the seeded storefront when nothing usable is saved.
    pub fn get_shop_items(&self) -> Vec<Listing> {
        if let Some(cached) = self.items.read().as_ref() {
            return cached.clone();
        }
        let items = match self.store.get_json::<Vec<Listing>>(SHOP_ITEMS_KEY) {
            Ok(Some(items)) => items,
            Ok(None) => self.seed_items.clone(),
            Err(err) => {
                tracing::warn!("[ac-05] Stored shop items unreadable, using seed: {}", err);
                self.seed_items.clone()
            }
        };
        *self.items.write() = Some(items.clone());
        items
    }

    fn save_items(&self, items: Vec<Listing>) -> Result<(), StoreError> {
        self.store.put_json(SHOP_ITEMS_KEY, &items)?;
        *self.items.write() = Some(items);
        Ok(())
    }

    pub fn add_shop_item(&self, item: Listing) -> Result<(), ShopError> {
        item.validate()?;
        let mut items = self.get_shop_items();
        if items.iter().any(|i| i.id == item.id) {
            return Err(DomainError::precondition(format!(
                "shop item {} already exists",
                item.id
            ))
            .into());
        }
        let id = item.id.clone();
        items.push(item);
        self.save_items(items)?;
        tracing::info!("[ac-05] Shop item {} added", id);
        Ok(())
    }

    pub fn update_shop_item(
        &self,
        item_id: &ListingId,
        update: ShopItemUpdate,
    ) -> Result<Listing, ShopError> {
        let mut items = self.get_shop_items();
        let slot = items
            .iter_mut()
            .find(|i| &i.id == item_id)
            .ok_or_else(|| DomainError::not_found(EntityKind::Listing, item_id))?;
        let updated = update.apply(slot)?;
        *slot = updated.clone();
        self.save_items(items)?;
        tracing::info!("[ac-05] Shop item {} updated", item_id);
        Ok(updated)
    }

    /// Returns whether an item was removed.
    pub fn delete_shop_item(&self, item_id: &ListingId) -> Result<bool, StoreError> {
        let mut items = self.get_shop_items();
        let before = items.len();
        items.retain(|i| &i.id != item_id);
        let removed = items.len() != before;
        self.save_items(items)?;
        if removed {
            tracing::info!("[ac-05] Shop item {} deleted", item_id);
        }
        Ok(removed)
    }

    /// Fresh id for a new storefront item.
    pub fn generate_item_id() -> ListingId {
        ListingId::generate()
    }
}
