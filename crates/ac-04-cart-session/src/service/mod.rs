//! # Cart Session Service
//!
//! Wraps one [`Cart`] behind a lock for the active client session.


use ac_03_marketplace_catalog::Listing;
use parking_lot::RwLock;
use shared_types::{Amount, DomainResult, TimeSource, UserId};

use crate::domain::{Cart, CartItem, CartStore, CheckoutReceipt, LineKey, VariantSelection};
use crate::ports::inbound::CartSessionApi;

pub struct CartSessionService<T: TimeSource> {
    cart: RwLock<Cart>,
    time_source: T,
}

impl<T: TimeSource> CartSessionService<T> {
    pub fn new(time_source: T) -> Self {
        Self {
            cart: RwLock::new(Cart::new()),
            time_source,
        }
    }

    /// Copy of the current cart.
    pub fn snapshot(&self) -> Cart {
        self.cart.read().clone()
    }
}

impl<T: TimeSource> CartSessionApi for CartSessionService<T> {
    fn add_item(&self, item: CartItem) -> DomainResult<u32> {
        let listing_id = item.listing_id.clone();
        let quantity = self
            .cart
            .write()
            .add_item(item)
            .inspect_err(|err| tracing::warn!("[ac-04] Add {} rejected: {}", listing_id, err))?;
        tracing::debug!("[ac-04] {} now x{} in cart", listing_id, quantity);
        Ok(quantity)
    }

    fn add_listing(
        &self,
        listing: &Listing,
        variants: VariantSelection,
        quantity: u32,
    ) -> DomainResult<u32> {
        let item = CartItem::from_listing(listing, variants, quantity).inspect_err(|err| {
            tracing::warn!("[ac-04] Listing {} cannot be added: {}", listing.id, err)
        })?;
        self.add_item(item)
    }

    fn remove_item(&self, key: &LineKey) -> DomainResult<CartItem> {
        let removed = self.cart.write().remove_item(key)?;
        tracing::debug!("[ac-04] Removed {} from cart", removed.listing_id);
        Ok(removed)
    }

    fn set_quantity(&self, key: &LineKey, quantity: u32) -> DomainResult<()> {
        self.cart.write().set_quantity(key, quantity)
    }

    fn clear_seller(&self, seller_id: &UserId) -> usize {
        let removed = self.cart.write().clear_seller(seller_id);
        tracing::debug!("[ac-04] Cleared {} lines from seller {}", removed, seller_id);
        removed
    }

    fn clear_all(&self) {
        self.cart.write().clear_all();
    }

    fn items(&self) -> Vec<CartItem> {
        self.cart.read().items().to_vec()
    }

    fn stores(&self) -> Vec<CartStore> {
        self.cart.read().stores()
    }

    fn total_items(&self) -> u32 {
        self.cart.read().total_items()
    }

    fn total_price(&self) -> Amount {
        self.cart.read().total_price()
    }

    fn store_subtotal(&self, seller_id: &UserId) -> Option<Amount> {
        self.cart.read().store(seller_id).map(|s| s.subtotal())
    }

    fn checkout_seller(&self, seller_id: &UserId) -> DomainResult<CheckoutReceipt> {
        let now = self.time_source.now();
        let receipt = self.cart.write().checkout_seller(seller_id, now)?;
        tracing::info!(
            "[ac-04] Checked out {} items from seller {} for {}",
            receipt.total_items,
            seller_id,
            receipt.total_price
        );
        Ok(receipt)
    }

    fn checkout_all(&self) -> DomainResult<CheckoutReceipt> {
        let now = self.time_source.now();
        let receipt = self.cart.write().checkout_all(now)?;
        tracing::info!(
            "[ac-04] Checked out {} items from {} sellers for {}",
            receipt.total_items,
            receipt.stores.len(),
            receipt.total_price
        );
        Ok(receipt)
    }
}
