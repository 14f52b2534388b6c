//! # Vault Lifecycle Subsystem
//!
//! **Subsystem ID:** 2
//!
//! ## Purpose
//!
//! Owns goal-driven shared funds: contributions, milestone verification with
//! supporting documents, contributor quorum votes and the terminal release.
//!
//! ## Domain Invariants
//!
//! | Invariant | Enforcement Location |
//! |-----------|---------------------|
//! | `raised` never decreases | `Vault::record_contribution` |
//! | `milestones_met` iff every required milestone is verified | `Vault::attach_verification`, `Vault::add_milestone` |
//! | One vote per contributor per round | `Vault::cast_vote` |
//! | Release needs `approvals >= ceil(contributors / 2)` | `quorum::release_eligible` |
//! | `released` is terminal | `Vault::ensure_not_released` |
//!
//! ## Module Structure (Hexagonal Architecture)
//!
//! ```text
//! adapters/  - InMemoryVaultRepository
//! ports/     - VaultLifecycleApi (inbound), VaultRepository (outbound)
//! domain/    - Vault state machine, quorum, progress views
//! service/   - VaultLifecycleService
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use adapters::InMemoryVaultRepository;
pub use domain::*;
pub use ports::{VaultLifecycleApi, VaultRepository};
pub use service::{VaultConfig, VaultLifecycleService};
