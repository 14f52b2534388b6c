//! # Adapters Module
//!
//! - `memory`: in-memory store for tests and ephemeral sessions
//! - `json_file`: single JSON document on disk

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileKVStore;
pub use memory::InMemoryKVStore;
