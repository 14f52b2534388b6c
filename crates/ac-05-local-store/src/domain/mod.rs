//! # Domain Layer - Local Store
//!
//! - `errors`: store and shop settings failures
//! - `shop`: storefront item edits

pub mod errors;
pub mod shop;

pub use errors::*;
pub use shop::*;
