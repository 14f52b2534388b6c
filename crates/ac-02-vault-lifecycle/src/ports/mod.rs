//! Ports module for the Vault Lifecycle

pub mod inbound;
pub mod outbound;

pub use inbound::VaultLifecycleApi;
pub use outbound::VaultRepository;
