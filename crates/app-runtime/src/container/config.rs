//! # App Configuration
//!
//! Unified configuration for all subsystems and runtime parameters.
//!
//! ## Environment Overrides
//!
//! | Variable | Effect |
//! |----------|--------|
//! | `ASCOR_ROTATION_POLICY` | `join_order` or `seeded:<u64>` |
//! | `ASCOR_VOTE_TIMEOUT_SECS` | Vault vote round expiry; `0` disables it |
//! | `ASCOR_SEARCH_LIMIT` | Maximum catalog search hits |
//! | `ASCOR_KV_PATH` | JSON file backing the local store; unset keeps it in memory |
//! | `ASCOR_LOG` | `tracing` filter directive |

use std::path::PathBuf;

use ac_01_rotation_ledger::{LedgerConfig, ParseRotationPolicyError, RotationPolicy};
use ac_02_vault_lifecycle::VaultConfig;
use ac_03_marketplace_catalog::CatalogConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const ENV_ROTATION_POLICY: &str = "ASCOR_ROTATION_POLICY";
pub const ENV_VOTE_TIMEOUT_SECS: &str = "ASCOR_VOTE_TIMEOUT_SECS";
pub const ENV_SEARCH_LIMIT: &str = "ASCOR_SEARCH_LIMIT";
pub const ENV_KV_PATH: &str = "ASCOR_KV_PATH";
pub const ENV_LOG: &str = "ASCOR_LOG";

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub ledger: LedgerConfig,
    pub vault: VaultConfig,
    pub catalog: CatalogConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

/// Local key-value store configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// JSON file backing the store. `None` keeps everything in memory.
    pub kv_path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `ac_02_vault_lifecycle=debug`.
    pub filter: String,
    pub with_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            with_target: false,
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {var}: {source}")]
    RotationPolicy {
        var: &'static str,
        #[source]
        source: ParseRotationPolicyError,
    },

    #[error("invalid {var} '{value}': expected an unsigned integer")]
    InvalidNumber { var: &'static str, value: String },

    #[error("{var} is set but empty")]
    Empty { var: &'static str },

    #[error("catalog search limit must be at least 1")]
    ZeroSearchLimit,

    #[error("vote timeout must be positive when set")]
    ZeroVoteTimeout,

    #[error("KV store path {0} is a directory")]
    KvPathIsDirectory(PathBuf),

    #[error("invalid log filter '{filter}': {message}")]
    LogFilter { filter: String, message: String },

    #[error("logging could not be initialised: {0}")]
    LoggingInit(String),
}

impl AppConfig {
    /// Build a configuration from defaults plus overrides read through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_ROTATION_POLICY) {
            config.ledger.rotation_policy =
                raw.parse::<RotationPolicy>()
                    .map_err(|source| ConfigError::RotationPolicy {
                        var: ENV_ROTATION_POLICY,
                        source,
                    })?;
        }
        if let Some(raw) = lookup(ENV_VOTE_TIMEOUT_SECS) {
            let secs = parse_number(ENV_VOTE_TIMEOUT_SECS, &raw)?;
            config.vault.vote_timeout_secs = (secs > 0).then_some(secs);
        }
        if let Some(raw) = lookup(ENV_SEARCH_LIMIT) {
            config.catalog.max_search_results = parse_number(ENV_SEARCH_LIMIT, &raw)? as usize;
        }
        if let Some(raw) = lookup(ENV_KV_PATH) {
            if raw.trim().is_empty() {
                return Err(ConfigError::Empty { var: ENV_KV_PATH });
            }
            config.storage.kv_path = Some(PathBuf::from(raw.trim()));
        }
        if let Some(raw) = lookup(ENV_LOG) {
            if raw.trim().is_empty() {
                return Err(ConfigError::Empty { var: ENV_LOG });
            }
            config.logging.filter = raw.trim().to_string();
        }

        Ok(config)
    }

    /// Reject contradictory settings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.catalog.max_search_results == 0 {
            return Err(ConfigError::ZeroSearchLimit);
        }
        if self.vault.vote_timeout_secs == Some(0) {
            return Err(ConfigError::ZeroVoteTimeout);
        }
        if let Some(path) = &self.storage.kv_path {
            if path.is_dir() {
                return Err(ConfigError::KvPathIsDirectory(path.clone()));
            }
        }
        Ok(())
    }
}

fn parse_number(var: &'static str, raw: &str) -> Result<u64, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidNumber {
        var,
        value: raw.to_string(),
    })
}

/// Load configuration from the process environment.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    AppConfig::from_lookup(|key| std::env::var(key).ok())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.ledger.rotation_policy, RotationPolicy::JoinOrder);
        assert_eq!(config.vault.vote_timeout_secs, None);
        assert!(config.storage.kv_path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            (ENV_ROTATION_POLICY, "seeded:7"),
            (ENV_VOTE_TIMEOUT_SECS, "3600"),
            (ENV_SEARCH_LIMIT, "10"),
            (ENV_KV_PATH, "/tmp/ascor/kv.json"),
            (ENV_LOG, "debug"),
        ]))
        .unwrap();
        assert_eq!(
            config.ledger.rotation_policy,
            RotationPolicy::SeededDraw { seed: 7 }
        );
        assert_eq!(config.vault.vote_timeout_secs, Some(3600));
        assert_eq!(config.catalog.max_search_results, 10);
        assert_eq!(
            config.storage.kv_path,
            Some(PathBuf::from("/tmp/ascor/kv.json"))
        );
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn test_zero_timeout_means_none() {
        let config = AppConfig::from_lookup(lookup(&[(ENV_VOTE_TIMEOUT_SECS, "0")])).unwrap();
        assert_eq!(config.vault.vote_timeout_secs, None);
    }

    #[test]
    fn test_malformed_values() {
        assert!(matches!(
            AppConfig::from_lookup(lookup(&[(ENV_ROTATION_POLICY, "random")])),
            Err(ConfigError::RotationPolicy { .. })
        ));
        assert!(matches!(
            AppConfig::from_lookup(lookup(&[(ENV_VOTE_TIMEOUT_SECS, "soon")])),
            Err(ConfigError::InvalidNumber { .. })
        ));
        assert!(matches!(
            AppConfig::from_lookup(lookup(&[(ENV_KV_PATH, "  ")])),
            Err(ConfigError::Empty { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_contradictions() {
        let mut config = AppConfig::default();
        config.catalog.max_search_results = 0;
        assert!(matches!(config.validate(), Err(ConfigError::ZeroSearchLimit)));

        let mut config = AppConfig::default();
        config.vault.vote_timeout_secs = Some(0);
        assert!(matches!(config.validate(), Err(ConfigError::ZeroVoteTimeout)));

        let dir = tempfile::tempdir().unwrap();
        let mut config = AppConfig::default();
        config.storage.kv_path = Some(dir.path().to_path_buf());
        assert!(matches!(
            config.validate(),
            Err(ConfigError::KvPathIsDirectory(_))
        ));
    }

    #[test]
    fn test_config_serializes() {
        let json = serde_json::to_value(AppConfig::default()).unwrap();
        assert_eq!(json["logging"]["filter"], "info");
    }
}
