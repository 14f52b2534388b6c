//! # Domain Layer - Cart Session
//!
//! - `line`: cart lines, their identity and construction from listings
//! - `cart`: the session cart, seller grouping, totals and checkout

pub mod cart;
pub mod line;

pub use cart::*;
pub use line::*;
