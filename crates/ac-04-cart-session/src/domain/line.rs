//! Cart lines.
//!
//! A line is identified by `(listing_id, variants)`. The variant selection is a
//! `BTreeMap`, so two selections with the same pairs compare equal regardless
//! of the order the options were picked in.

use std::collections::BTreeMap;

use ac_03_marketplace_catalog::Listing;
use serde::{Deserialize, Serialize};
use shared_types::{Amount, DomainError, DomainResult, ListingId, UserId};

/// Variant name -> chosen option.
pub type VariantSelection = BTreeMap<String, String>;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Seller {
    pub id: UserId,
    pub username: String,
    pub avatar: String,
}

/// Identity of a cart line.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineKey {
    pub listing_id: ListingId,
    pub variants: VariantSelection,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub listing_id: ListingId,
    pub title: String,
    pub image: String,
    pub unit_price: Amount,
    pub quantity: u32,
    #[serde(default)]
    pub variants: VariantSelection,
    pub seller: Seller,
    pub delivery_info: Option<String>,
    /// Stock on hand when the line was built; `None` means unlimited.
    #[serde(default)]
    pub inventory: Option<u32>,
}

impl CartItem {
    /// Line for `quantity` units of a priced listing.
    ///
    /// Every variant the listing offers must be chosen, and only with one of
    /// its options. Stocked listings cap the quantity at the inventory.
    pub fn from_listing(
        listing: &Listing,
        variants: VariantSelection,
        quantity: u32,
    ) -> DomainResult<Self> {
        if quantity == 0 {
            return Err(DomainError::invalid_amount(0, "quantity must be positive"));
        }
        let unit_price = listing.price().ok_or_else(|| {
            DomainError::precondition(format!("listing {} is not for sale", listing.id))
        })?;
        let owner = listing.owner.as_ref().ok_or_else(|| {
            DomainError::precondition(format!("listing {} has no seller", listing.id))
        })?;
        check_stock(quantity, listing.inventory)?;

        for (name, option) in &variants {
            let offered = listing
                .variant(name)
                .is_some_and(|v| v.options.iter().any(|o| o == option));
            if !offered {
                return Err(DomainError::precondition(format!(
                    "{} '{}' is not offered for {}",
                    name, option, listing.id
                )));
            }
        }
        if let Some(missing) = listing
            .variants
            .iter()
            .find(|v| !variants.contains_key(&v.name))
        {
            return Err(DomainError::precondition(format!(
                "choose a {} for {}",
                missing.name, listing.id
            )));
        }

        Ok(Self {
            listing_id: listing.id.clone(),
            title: listing.title.clone(),
            image: listing.image.clone(),
            unit_price,
            quantity,
            variants,
            seller: Seller {
                id: owner.id.clone(),
                username: owner.username.clone(),
                avatar: owner.avatar.clone(),
            },
            delivery_info: listing.delivery_info.clone(),
            inventory: listing.inventory,
        })
    }

    pub fn key(&self) -> LineKey {
        LineKey {
            listing_id: self.listing_id.clone(),
            variants: self.variants.clone(),
        }
    }

    pub fn matches(&self, listing_id: &ListingId, variants: &VariantSelection) -> bool {
        &self.listing_id == listing_id && &self.variants == variants
    }

    pub fn subtotal(&self) -> Amount {
        self.unit_price.saturating_mul(self.quantity as Amount)
    }
}

/// Fails with `InvalidAmount` when `quantity` exceeds the stock on hand.
pub(crate) fn check_stock(quantity: u32, inventory: Option<u32>) -> DomainResult<()> {
    match inventory {
        Some(stock) if quantity > stock => Err(DomainError::invalid_amount(
            quantity as Amount,
            format!("only {} in stock", stock),
        )),
        _ => Ok(()),
    }
}
