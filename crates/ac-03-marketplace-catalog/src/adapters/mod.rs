//! # Adapters Module
//!
//! - `memory`: in-memory catalog content

pub mod memory;

pub use memory::InMemoryCatalog;
