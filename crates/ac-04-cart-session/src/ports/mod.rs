//! Ports module for the Cart Session

pub mod inbound;

pub use inbound::CartSessionApi;
