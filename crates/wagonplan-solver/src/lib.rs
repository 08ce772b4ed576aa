//! wagonplan Solver Engine
//!
//! This crate computes the order in which locomotives deliver wagons to
//! loading/unloading fronts so that the total wagon-hours are minimal:
//! - Cost model (wagon-hours of a visiting order)
//! - Ratio rule ordering heuristic
//! - Exhaustive search over the (optionally path-grouped) order space
//! - Combinatorial size estimation gating the exhaustive search
//! - Single-locomotive optimizer with heuristic fallback
//! - Multi-locomotive partitioner
//!
//! Logging levels:
//! - **INFO**: Optimization start/end, partition summaries
//! - **DEBUG**: Strategy selection, per-locomotive results
//! - **TRACE**: Search branch progress

pub mod cost;
pub mod estimate;
pub mod exhaustive;
pub mod optimizer;
pub mod partition;
pub mod plan;
pub mod ratio;
pub mod space;
pub mod stats;

pub use cost::{front_cost, order_cost};
pub use estimate::{estimate, estimate_unconstrained, factorial, SizeEstimate};
pub use exhaustive::{optimal_order, ExhaustiveSearch, SearchOutcome};
pub use optimizer::Optimizer;
pub use partition::round_robin;
pub use plan::{FleetPlan, SearchStatus, ServicePlan, Strategy};
pub use ratio::ratio_order;
pub use space::{next_permutation, OrderSpace};
pub use stats::SearchStats;
