//! Storefront item edits.

use ac_03_marketplace_catalog::{Listing, Pricing};
use serde::{Deserialize, Serialize};
use shared_types::DomainResult;

/// Partial update of a shop item. `None` fields are left as they are.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopItemUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub pricing: Option<Pricing>,
    pub tags: Option<Vec<String>>,
    pub inventory: Option<u32>,
    pub delivery_info: Option<String>,
}

impl ShopItemUpdate {
    /// Applies the update to a copy of `item` and validates the result.
    pub fn apply(self, item: &Listing) -> DomainResult<Listing> {
        let mut updated = item.clone();
        if let Some(title) = self.title {
            updated.title = title;
        }
        if let Some(description) = self.description {
            updated.description = description;
        }
        if let Some(image) = self.image {
            updated.image = image;
        }
        if let Some(pricing) = self.pricing {
            updated.pricing = pricing;
        }
        if let Some(tags) = self.tags {
            updated.tags = tags;
        }
        if let Some(inventory) = self.inventory {
            updated.inventory = Some(inventory);
        }
        if let Some(delivery_info) = self.delivery_info {
            updated.delivery_info = Some(delivery_info);
        }
        updated.validate()?;
        Ok(updated)
    }
}
