//! # Marketplace Catalog Subsystem
//!
//! **Subsystem ID:** 3
//!
//! ## Purpose
//!
//! Read-only query surface over storefront listings and opportunity cards
//! (business, service, cause, external), plus the social feed, notification
//! list and direct-message inbox the presentation layer renders alongside.
//!
//! Queries never fail: an unknown id yields `None` or an empty list. Content is
//! validated once at load time (`Listing::validate`).
//!
//! ## Module Structure (Hexagonal Architecture)
//!
//! ```text
//! adapters/  - InMemoryCatalog
//! ports/     - MarketplaceCatalogApi (inbound), CatalogRepository (outbound)
//! domain/    - listings, feed, notifications, inbox
//! service/   - MarketplaceCatalogService
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use adapters::InMemoryCatalog;
pub use domain::*;
pub use ports::{CatalogRepository, MarketplaceCatalogApi};
pub use service::{CatalogConfig, MarketplaceCatalogService};
