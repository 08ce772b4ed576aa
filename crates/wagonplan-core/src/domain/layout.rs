//! Nested input layout, as collected by an input provider: a list of paths,
//! each with its fronts.

use super::front::FrontSpec;

/// Fronts of one connecting path.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct PathLayout {
    #[cfg_attr(feature = "serde", serde(default))]
    pub fronts: Vec<FrontSpec>,
}

/// Station input grouped by path.
///
/// With the `serde` feature enabled this deserializes from documents like:
///
/// ```toml
/// [[paths]]
/// fronts = [
///     { wagon_count = 10, travel_time = 1.0 },
///     { wagon_count = 5, travel_time = 2.0 },
/// ]
///
/// [[paths]]
/// fronts = [{ wagon_count = 3, travel_time = 0.5 }]
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct StationLayout {
    #[cfg_attr(feature = "serde", serde(default))]
    pub paths: Vec<PathLayout>,
}

impl StationLayout {
    pub fn new(paths: Vec<PathLayout>) -> Self {
        Self { paths }
    }

    /// Total number of fronts across all paths.
    pub fn front_count(&self) -> usize {
        self.paths.iter().map(|p| p.fronts.len()).sum()
    }
}
