//! # Domain Layer - Rotation Ledger
//!
//! Pure circle rules with no I/O.
//!
//! ## Components
//!
//! - `entities`: Circle, CircleMember, JoinRequest and the circle state machine
//! - `rotation`: payout order assignment policies
//! - `services`: payout arithmetic, progress and the income advisory

pub mod entities;
pub mod rotation;
pub mod services;

pub use entities::*;
pub use rotation::*;
pub use services::*;
