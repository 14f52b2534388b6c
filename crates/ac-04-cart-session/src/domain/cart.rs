//! Session cart.
//!
//! Lines are kept in the order they were first added; sellers are grouped in
//! the order their first line was added.

use serde::{Deserialize, Serialize};
use shared_types::{Amount, DomainError, DomainResult, EntityKind, Timestamp, UserId};

use super::line::{check_stock, CartItem, LineKey, Seller};

/// One seller's share of the cart.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartStore {
    pub seller: Seller,
    pub items: Vec<CartItem>,
}

impl CartStore {
    pub fn subtotal(&self) -> Amount {
        self.items
            .iter()
            .fold(0, |sum: Amount, i| sum.saturating_add(i.subtotal()))
    }

    pub fn item_count(&self) -> u32 {
        count_units(&self.items)
    }
}

/// Result of a checkout; the checked-out lines are gone from the cart.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutReceipt {
    pub stores: Vec<CartStore>,
    pub total_items: u32,
    pub total_price: Amount,
    pub placed_at: Timestamp,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn line(&self, key: &LineKey) -> Option<&CartItem> {
        self.items
            .iter()
            .find(|i| i.matches(&key.listing_id, &key.variants))
    }

    fn position(&self, key: &LineKey) -> DomainResult<usize> {
        self.items
            .iter()
            .position(|i| i.matches(&key.listing_id, &key.variants))
            .ok_or_else(|| DomainError::not_found(EntityKind::CartLine, &key.listing_id))
    }

    /// Adds a line, merging quantities into an existing line with the same key.
    /// Returns the line's quantity after the merge.
    ///
    /// The merged quantity may not exceed the stock on hand; the newest line's
    /// inventory wins when both carry one.
    pub fn add_item(&mut self, item: CartItem) -> DomainResult<u32> {
        if item.quantity == 0 {
            return Err(DomainError::invalid_amount(0, "quantity must be positive"));
        }
        match self
            .items
            .iter_mut()
            .find(|i| i.matches(&item.listing_id, &item.variants))
        {
            Some(existing) => {
                let inventory = item.inventory.or(existing.inventory);
                let merged = existing.quantity.saturating_add(item.quantity);
                check_stock(merged, inventory)?;
                existing.quantity = merged;
                existing.inventory = inventory;
                Ok(merged)
            }
            None => {
                check_stock(item.quantity, item.inventory)?;
                let quantity = item.quantity;
                self.items.push(item);
                Ok(quantity)
            }
        }
    }

    pub fn remove_item(&mut self, key: &LineKey) -> DomainResult<CartItem> {
        let index = self.position(key)?;
        Ok(self.items.remove(index))
    }

    /// Sets a line's quantity. Zero removes the line.
    pub fn set_quantity(&mut self, key: &LineKey, quantity: u32) -> DomainResult<()> {
        let index = self.position(key)?;
        if quantity == 0 {
            self.items.remove(index);
        } else {
            check_stock(quantity, self.items[index].inventory)?;
            self.items[index].quantity = quantity;
        }
        Ok(())
    }

    /// Drops every line sold by `seller_id`. Returns the number of lines removed.
    pub fn clear_seller(&mut self, seller_id: &UserId) -> usize {
        let before = self.items.len();
        self.items.retain(|i| &i.seller.id != seller_id);
        before - self.items.len()
    }

    pub fn clear_all(&mut self) {
        self.items.clear();
    }

    pub fn stores(&self) -> Vec<CartStore> {
        group_by_seller(&self.items)
    }

    pub fn store(&self, seller_id: &UserId) -> Option<CartStore> {
        self.stores().into_iter().find(|s| &s.seller.id == seller_id)
    }

    pub fn total_items(&self) -> u32 {
        count_units(&self.items)
    }

    pub fn total_price(&self) -> Amount {
        self.items
            .iter()
            .fold(0, |sum: Amount, i| sum.saturating_add(i.subtotal()))
    }

    /// Checks out one seller's lines.
    pub fn checkout_seller(
        &mut self,
        seller_id: &UserId,
        now: Timestamp,
    ) -> DomainResult<CheckoutReceipt> {
        let store = self
            .store(seller_id)
            .ok_or_else(|| {
                DomainError::precondition(format!("nothing in the cart from seller {}", seller_id))
            })?;
        self.clear_seller(seller_id);
        Ok(receipt(vec![store], now))
    }

    /// Checks out the whole cart.
    pub fn checkout_all(&mut self, now: Timestamp) -> DomainResult<CheckoutReceipt> {
        if self.is_empty() {
            return Err(DomainError::precondition("cart is empty"));
        }
        let stores = self.stores();
        self.clear_all();
        Ok(receipt(stores, now))
    }
}

/// Unit count, saturating at `u32::MAX`.
fn count_units(items: &[CartItem]) -> u32 {
    items
        .iter()
        .fold(0, |sum: u32, i| sum.saturating_add(i.quantity))
}

fn group_by_seller(items: &[CartItem]) -> Vec<CartStore> {
    let mut stores: Vec<CartStore> = Vec::new();
    for item in items {
        match stores.iter_mut().find(|s| s.seller.id == item.seller.id) {
            Some(store) => store.items.push(item.clone()),
            None => stores.push(CartStore {
                seller: item.seller.clone(),
                items: vec![item.clone()],
            }),
        }
    }
    stores
}

fn receipt(stores: Vec<CartStore>, now: Timestamp) -> CheckoutReceipt {
    CheckoutReceipt {
        total_items: stores
            .iter()
            .fold(0, |sum: u32, s| sum.saturating_add(s.item_count())),
        total_price: stores
            .iter()
            .fold(0, |sum: Amount, s| sum.saturating_add(s.subtotal())),
        stores,
        placed_at: now,
    }
}
