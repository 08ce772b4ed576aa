//! Shared test fixtures for wagonplan crates.
//!
//! This crate provides stations and pure reference functions for testing.
//! It only depends on `wagonplan-core`, so the solver can use it as a
//! dev-dependency without a cycle.
//!
//! - [`fixtures`] - Stations used across the test suites
//! - [`reference`] - Naive cost and brute-force search used as oracles
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! wagonplan-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```
//! use wagonplan_test::fixtures::two_fronts;
//! use wagonplan_test::reference::brute_force;
//!
//! let station = two_fronts();
//! let (_, cost) = brute_force(&station.all_indices(), &station);
//! assert_eq!(cost, 25.0);
//! ```

pub mod fixtures;
pub mod reference;
