//! Planning entry point that hides the optimizer wiring.

use std::io::ErrorKind;
use std::path::Path;

use wagonplan_config::{ConfigError, OptimizerConfig};
use wagonplan_core::{Result, Station};
use wagonplan_solver::{FleetPlan, Optimizer};

/// Configuration file read by [`plan_station`] from the working directory.
pub const CONFIG_FILE: &str = "wagonplan.toml";

/// Loads the optimizer configuration at `path`, or the defaults if the file
/// does not exist.
///
/// # Errors
///
/// Returns [`WagonPlanError::Config`](wagonplan_core::WagonPlanError::Config)
/// if the file exists but cannot be read, parsed or validated.
pub fn load_config(path: impl AsRef<Path>) -> Result<OptimizerConfig> {
    match OptimizerConfig::load(path) {
        Ok(config) => Ok(config),
        Err(ConfigError::Io(err)) if err.kind() == ErrorKind::NotFound => {
            Ok(OptimizerConfig::default())
        }
        Err(err) => Err(err.into()),
    }
}

/// Plans every front of `station` for `resource_count` locomotives, using
/// `wagonplan.toml` when present.
pub fn plan_station(station: &Station, resource_count: usize) -> Result<FleetPlan> {
    let config = load_config(CONFIG_FILE)?;
    plan_station_with(station, resource_count, config)
}

/// Plans every front of `station` with an explicit configuration.
pub fn plan_station_with(
    station: &Station,
    resource_count: usize,
    config: OptimizerConfig,
) -> Result<FleetPlan> {
    #[cfg(feature = "console")]
    crate::console::init();

    Optimizer::new(config)?.partition(station, &station.all_indices(), resource_count)
}
