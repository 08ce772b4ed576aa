//! Domain model for front sequencing.
//!
//! A [`Station`] owns the fronts to be serviced and the connecting paths that
//! group them. It is validated once on construction and read-only afterwards;
//! every optimizer request borrows it.

mod front;
mod layout;
mod station;

pub use front::{Front, FrontSpec, Path};
pub use layout::{PathLayout, StationLayout};
pub use station::{Station, StationBuilder};

#[cfg(test)]
mod tests;
