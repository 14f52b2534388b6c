//! # Adapters Module
//!
//! - `memory`: in-memory member and module registries

pub mod memory;

pub use memory::InMemoryDirectory;
