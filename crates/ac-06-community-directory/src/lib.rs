//! # Community Directory Subsystem
//!
//! **Subsystem ID:** 6
//!
//! ## Purpose
//!
//! Read-only registries behind the profile and learning-hub screens: every
//! platform member with their savings track record, and the catalog of
//! learning modules with per-lesson completion.
//!
//! ## Domain Invariants
//!
//! | Rule | Enforcement |
//! |------|-------------|
//! | Member ids and usernames are unique | `InMemoryDirectory::insert_member` |
//! | On-time rate lies in `[0, 1]` | `Member::validate` |
//! | Module rating lies in `[0, 5]` | `LearnModule::validate` |
//! | A lesson unlocks once the lesson before it is complete | `LearnModule::is_lesson_locked` |
//!
//! ## Module Structure (Hexagonal Architecture)
//!
//! ```text
//! adapters/  - InMemoryDirectory
//! ports/     - CommunityDirectoryApi (inbound), DirectoryRepository (outbound)
//! domain/    - members, learn modules
//! service/   - CommunityDirectoryService
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use adapters::InMemoryDirectory;
pub use domain::*;
pub use ports::{CommunityDirectoryApi, DirectoryRepository};
pub use service::CommunityDirectoryService;
