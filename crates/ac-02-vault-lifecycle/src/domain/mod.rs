//! # Domain Layer - Vault Lifecycle
//!
//! - `entities`: Vault aggregate, milestones, media, messages, votes
//! - `quorum`: majority arithmetic and vote tallies
//! - `progress`: funding and milestone progress views

pub mod entities;
pub mod progress;
pub mod quorum;

pub use entities::*;
pub use progress::*;
pub use quorum::*;
