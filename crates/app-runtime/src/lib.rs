//! # App Runtime
//!
//! Boots the Ascor domain core for the presentation layer.
//!
//! ## Startup Sequence
//!
//! 1. Load configuration from the environment (`container::config`)
//! 2. Initialise logging (`logging`)
//! 3. Build the container and seed the dataset (`container`, `seed`)
//! 4. Hand out the container; queries and commands go through it
//!
//! ## Modules
//!
//! - `container/` - configuration and subsystem wiring
//! - `seed/` - mock dataset
//! - `coordinator` - circle -> vault conversion across subsystems
//! - `queries` - read-only snapshots exposed to the presentation layer

pub mod container;
pub mod coordinator;
pub mod logging;
pub mod queries;
pub mod seed;

pub use container::{load_config, AppConfig, AppContainer, BootstrapError, ConfigError};
pub use coordinator::{CircleVaultCoordinator, SettledCycle};
pub use logging::init_logging;
pub use queries::MemberPage;
pub use seed::{mock_dataset, Dataset, DatasetSummary};
