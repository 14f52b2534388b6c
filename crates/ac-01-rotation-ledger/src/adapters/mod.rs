//! # Adapters Module
//!
//! - `memory`: in-memory circle repository

pub mod memory;

pub use memory::InMemoryCircleRepository;
