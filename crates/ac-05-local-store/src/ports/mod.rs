//! Ports module for the Local Store

pub mod outbound;

pub use outbound::{KeyValueStore, KeyValueStoreExt};
