//! # Domain Layer - Marketplace Catalog
//!
//! - `listing`: storefront listings and opportunity cards
//! - `feed`: social posts, notifications, conversations

pub mod feed;
pub mod listing;

pub use feed::*;
pub use listing::*;
