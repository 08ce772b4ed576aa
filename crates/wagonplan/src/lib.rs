//! wagonplan - wagon delivery sequencing for shunting locomotives
//!
//! Describe the station's fronts and connecting paths, pick the number of
//! locomotives and call [`plan_station`].
//!
//! # Example
//!
//! ```rust
//! use wagonplan::prelude::*;
//!
//! let station = StationBuilder::new()
//!     .path([(4, 1.0), (2, 1.0)])
//!     .path([(6, 3.0)])
//!     .build()
//!     .unwrap();
//!
//! let fleet = wagonplan::plan_station(&station, 2).unwrap();
//! assert_eq!(fleet.assignments.len(), 2);
//! assert!(fleet.savings >= 0.0);
//!
//! let text = wagonplan::report::render(&station, &fleet);
//! assert!(text.contains("Locomotive 2"));
//! ```

// Domain types
pub use wagonplan_core::{
    Front, FrontSpec, Path, PathLayout, Result, Station, StationBuilder, StationLayout,
    WagonPlanError,
};

// Configuration
pub use wagonplan_config::{ConfigError, OptimizerConfig, ThreadCount};

// Engine
pub use wagonplan_solver::{
    estimate, optimal_order, order_cost, ratio_order, FleetPlan, Optimizer, SearchStatus,
    ServicePlan, SizeEstimate, Strategy,
};

#[cfg(feature = "console")]
pub mod console;
pub mod report;

mod solver;
pub use solver::{load_config, plan_station, plan_station_with, CONFIG_FILE};

pub mod prelude {
    pub use super::{
        FleetPlan, FrontSpec, OptimizerConfig, Optimizer, ServicePlan, Station, StationBuilder,
        Strategy,
    };
}
