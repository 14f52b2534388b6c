//! # Adapters Module
//!
//! - `memory`: in-memory vault repository

pub mod memory;

pub use memory::InMemoryVaultRepository;
