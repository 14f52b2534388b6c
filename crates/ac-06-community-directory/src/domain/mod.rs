//! # Domain Layer - Community Directory
//!
//! - `member`: member records shown on profile screens
//! - `learn`: learning modules and lesson progress

pub mod learn;
pub mod member;

pub use learn::*;
pub use member::*;
