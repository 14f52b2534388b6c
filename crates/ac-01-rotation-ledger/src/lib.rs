//! # Rotation Ledger Subsystem
//!
//! **Subsystem ID:** 1
//!
//! ## Purpose
//!
//! Owns circle membership, contribution tracking and payout rotation for
//! fixed-size (4 seats, 4 months) rotating savings circles.
//!
//! ## Domain Invariants
//!
//! | Invariant | Enforcement Location |
//! |-----------|---------------------|
//! | `filled_seats <= 4` | `Circle::resolve_request` |
//! | `recruiting -> active` iff the 4th seat fills | `Circle::resolve_request` |
//! | Fixed contribution, once per member per month | `Circle::post_contribution` |
//! | One payout per member per cycle | `RotationPolicy::assign` + `Circle::advance_cycle` |
//! | Failed commands leave no partial state | `CircleRepository::update` |
//!
//! ## Circle Lifecycle
//!
//! ```text
//! [RECRUITING] ──4th seat──→ [ACTIVE] ──month 4──→ [VOTING] ──end / convert──→ [COMPLETED]
//!                               ↑                      │
//!                               └────── restart ───────┘
//! ```
//!
//! ## Module Structure (Hexagonal Architecture)
//!
//! ```text
//! adapters/  - InMemoryCircleRepository
//! ports/     - RotationLedgerApi (inbound), CircleRepository (outbound)
//! domain/    - Circle state machine, rotation policies, payout arithmetic
//! service/   - RotationLedgerService
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use adapters::InMemoryCircleRepository;
pub use domain::*;
pub use ports::{CircleRepository, RotationLedgerApi};
pub use service::{LedgerConfig, RotationLedgerService};
