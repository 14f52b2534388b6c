//! # Ascor Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── scenarios.rs   # End-to-end command sequences against fresh services
//!     ├── flows.rs       # Cross-subsystem flows through the app container
//!     └── properties.rs  # Invariants under generated inputs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p ascor-tests
//! cargo test -p ascor-tests integration::flows::
//! ```

pub mod integration;
