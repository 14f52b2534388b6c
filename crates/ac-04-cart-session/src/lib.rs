//! # Cart Session Subsystem
//!
//! **Subsystem ID:** 4
//!
//! ## Purpose
//!
//! Ephemeral shopping cart owned by the active client session: line items
//! grouped by seller, totals, and per-seller or whole-cart checkout. Nothing
//! is persisted.
//!
//! ## Line Identity
//!
//! `(listing_id, variant selection)`. Adding a line with an existing identity
//! merges quantities; a different selection makes a new line.
//!
//! ## Module Structure
//!
//! ```text
//! ports/     - CartSessionApi (inbound)
//! domain/    - CartItem, Cart, CartStore, CheckoutReceipt
//! service/   - CartSessionService
//! ```

pub mod domain;
pub mod ports;
pub mod service;

pub use domain::*;
pub use ports::CartSessionApi;
pub use service::CartSessionService;
