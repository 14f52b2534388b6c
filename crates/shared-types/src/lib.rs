//! # Shared Types Crate
//!
//! Types used by more than one Ascor subsystem.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: ids, amounts and member profiles are defined once here.
//! - **One Error Taxonomy**: every domain command returns [`DomainResult`], so the
//!   presentation layer maps failures to notifications in one place.
//! - **Injected Time**: subsystems never read the clock directly; they take a
//!   [`TimeSource`] so tests can pin timestamps.

pub mod entities;
pub mod errors;
pub mod ids;
pub mod time;

pub use entities::*;
pub use errors::*;
pub use ids::*;
pub use time::*;
