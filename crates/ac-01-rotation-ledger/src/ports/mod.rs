//! Ports module for the Rotation Ledger

pub mod inbound;
pub mod outbound;

pub use inbound::RotationLedgerApi;
pub use outbound::CircleRepository;
