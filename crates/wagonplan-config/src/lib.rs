//! Configuration system for wagonplan.
//!
//! Load optimizer configuration from TOML or YAML files to tune the
//! exhaustive-search threshold and calibration to the deployment hardware
//! without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use wagonplan_config::{OptimizerConfig, ThreadCount};
//!
//! let config = OptimizerConfig::from_toml_str(r#"
//!     enforce_path_grouping = false
//!     threshold = 40320
//!     calibration_constant = 250000.0
//!     thread_count = "none"
//! "#).unwrap();
//!
//! assert!(!config.enforce_path_grouping);
//! assert_eq!(config.threshold, 40_320);
//! assert_eq!(config.thread_count, ThreadCount::None);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use wagonplan_config::OptimizerConfig;
//!
//! let config = OptimizerConfig::load("wagonplan.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use wagonplan_core::WagonPlanError;

/// Default exhaustive-search threshold, in candidate orders.
pub const DEFAULT_THRESHOLD: u64 = 5_000_000;

/// Default throughput of the reference hardware, in candidate orders per second.
pub const DEFAULT_CALIBRATION_CONSTANT: f64 = 2_000_000.0;

/// Default maximum number of fronts one exhaustive search may permute.
pub const DEFAULT_EXACT_SEARCH_LIMIT: usize = 10;

/// Default maximum number of path orders tried by the ratio fallback (6!).
pub const DEFAULT_PATH_PERMUTATION_LIMIT: u64 = 720;

/// Default number of candidates evaluated between cancellation checks.
pub const DEFAULT_BATCH_SIZE: u64 = 4096;

/// Largest accepted `path_permutation_limit` (10!).
pub const MAX_PATH_PERMUTATION_LIMIT: u64 = 3_628_800;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<ConfigError> for WagonPlanError {
    fn from(err: ConfigError) -> Self {
        WagonPlanError::Config(err.to_string())
    }
}

/// Main optimizer configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", default)]
pub struct OptimizerConfig {
    /// Whether a locomotive must finish all fronts of a path before moving
    /// to the next path.
    pub enforce_path_grouping: bool,

    /// Maximum candidate count for which exhaustive search runs.
    pub threshold: u64,

    /// Candidate orders evaluated per second on the deployment hardware.
    pub calibration_constant: f64,

    /// Maximum number of fronts one exhaustive search may permute.
    pub exact_search_limit_per_group: usize,

    /// Maximum number of path orders the ratio fallback enumerates before
    /// settling on one canonical path order.
    pub path_permutation_limit: u64,

    /// Candidates evaluated between cancellation checks.
    pub batch_size: u64,

    /// Number of threads for parallel search branches and groups.
    pub thread_count: ThreadCount,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            enforce_path_grouping: true,
            threshold: DEFAULT_THRESHOLD,
            calibration_constant: DEFAULT_CALIBRATION_CONSTANT,
            exact_search_limit_per_group: DEFAULT_EXACT_SEARCH_LIMIT,
            path_permutation_limit: DEFAULT_PATH_PERMUTATION_LIMIT,
            batch_size: DEFAULT_BATCH_SIZE,
            thread_count: ThreadCount::Auto,
        }
    }
}

impl OptimizerConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads and validates configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML, or
    /// fails [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config = Self::from_toml_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Checks value ranges that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.calibration_constant.is_finite() && self.calibration_constant > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "calibration_constant must be positive, got {}",
                self.calibration_constant
            )));
        }
        if self.batch_size == 0 {
            return Err(ConfigError::Invalid("batch_size must be at least 1".into()));
        }
        if self.path_permutation_limit > MAX_PATH_PERMUTATION_LIMIT {
            return Err(ConfigError::Invalid(format!(
                "path_permutation_limit must not exceed {}, got {}",
                MAX_PATH_PERMUTATION_LIMIT, self.path_permutation_limit
            )));
        }
        if self.thread_count == ThreadCount::Count(0) {
            return Err(ConfigError::Invalid(
                "thread_count must be at least 1".into(),
            ));
        }
        Ok(())
    }

    pub fn with_path_grouping(mut self, enforce: bool) -> Self {
        self.enforce_path_grouping = enforce;
        self
    }

    pub fn with_threshold(mut self, threshold: u64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_calibration_constant(mut self, per_second: f64) -> Self {
        self.calibration_constant = per_second;
        self
    }

    pub fn with_exact_search_limit(mut self, fronts: usize) -> Self {
        self.exact_search_limit_per_group = fronts;
        self
    }

    pub fn with_path_permutation_limit(mut self, limit: u64) -> Self {
        self.path_permutation_limit = limit;
        self
    }

    pub fn with_batch_size(mut self, batch_size: u64) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub fn with_thread_count(mut self, thread_count: ThreadCount) -> Self {
        self.thread_count = thread_count;
        self
    }
}

/// Thread count configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThreadCount {
    /// Use the global rayon pool.
    #[default]
    Auto,

    /// Run everything on the calling thread.
    None,

    /// Specific number of threads.
    Count(usize),
}
