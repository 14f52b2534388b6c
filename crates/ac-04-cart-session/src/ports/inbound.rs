//! Driving Ports (API - Inbound)
//!
//! The cart has no outbound ports: it lives only as long as the client session.

use ac_03_marketplace_catalog::Listing;
use shared_types::{Amount, DomainResult, UserId};

use crate::domain::{CartItem, CartStore, CheckoutReceipt, LineKey, VariantSelection};

/// Primary Cart Session API.
pub trait CartSessionApi: Send + Sync {
    /// Add a prepared line; returns the merged quantity.
    fn add_item(&self, item: CartItem) -> DomainResult<u32>;

    /// Add `quantity` units of a listing with the given variant choices.
    fn add_listing(
        &self,
        listing: &Listing,
        variants: VariantSelection,
        quantity: u32,
    ) -> DomainResult<u32>;

    fn remove_item(&self, key: &LineKey) -> DomainResult<CartItem>;

    /// Zero removes the line.
    fn set_quantity(&self, key: &LineKey, quantity: u32) -> DomainResult<()>;

    fn clear_seller(&self, seller_id: &UserId) -> usize;

    fn clear_all(&self);

    fn items(&self) -> Vec<CartItem>;

    /// Lines grouped by seller, in first-added order.
    fn stores(&self) -> Vec<CartStore>;

    fn total_items(&self) -> u32;

    fn total_price(&self) -> Amount;

    fn store_subtotal(&self, seller_id: &UserId) -> Option<Amount>;

    fn checkout_seller(&self, seller_id: &UserId) -> DomainResult<CheckoutReceipt>;

    fn checkout_all(&self) -> DomainResult<CheckoutReceipt>;
}
