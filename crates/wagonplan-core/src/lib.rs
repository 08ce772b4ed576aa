//! wagonplan Core - domain types for wagon delivery sequencing
//!
//! This crate provides the fundamental abstractions for wagonplan:
//! - Fronts (loading/unloading points) and the paths grouping them
//! - The validated `Station` aggregate consumed by the solver
//! - Layout types for ingesting station data from external input
//! - The shared error type

pub mod domain;
pub mod error;

pub use domain::{Front, FrontSpec, Path, PathLayout, Station, StationBuilder, StationLayout};
pub use error::{Result, WagonPlanError};
