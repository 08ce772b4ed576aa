//! The validated station aggregate.

use super::front::{Front, FrontSpec, Path};
use super::layout::StationLayout;
use crate::error::{Result, WagonPlanError};

/// Fronts and the connecting paths that partition them.
///
/// # Example
///
/// ```
/// use wagonplan_core::{FrontSpec, Station};
///
/// let station = Station::new(
///     vec![FrontSpec::new(10, 1.0), FrontSpec::new(5, 2.0), FrontSpec::new(3, 0.5)],
///     vec![vec![0, 1], vec![2]],
/// ).unwrap();
///
/// assert_eq!(station.front_count(), 3);
/// assert_eq!(station.front(2).path_id(), 1);
/// assert_eq!(station.front(1).local_index(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Station {
    fronts: Vec<Front>,
    paths: Vec<Path>,
}

impl Station {
    /// Creates a station from fronts in ingestion order and a path grouping
    /// over their 0-based indices.
    ///
    /// # Errors
    ///
    /// Returns [`WagonPlanError::InvalidInput`] if there are no fronts, a
    /// front has zero wagons or a negative/non-finite travel time, a path is
    /// empty or references an unknown front, or the paths do not partition
    /// the fronts exactly.
    pub fn new(specs: Vec<FrontSpec>, paths: Vec<Vec<usize>>) -> Result<Self> {
        if specs.is_empty() {
            return Err(WagonPlanError::invalid("station has no fronts"));
        }
        for (id, spec) in specs.iter().enumerate() {
            check_spec(id, spec)?;
        }

        let mut placement: Vec<Option<(usize, usize)>> = vec![None; specs.len()];
        for (path_id, members) in paths.iter().enumerate() {
            if members.is_empty() {
                return Err(WagonPlanError::invalid(format!(
                    "path {} has no fronts",
                    path_id + 1
                )));
            }
            for (local_index, &front) in members.iter().enumerate() {
                let slot = placement.get_mut(front).ok_or_else(|| {
                    WagonPlanError::invalid(format!(
                        "path {} references unknown front {}",
                        path_id + 1,
                        front + 1
                    ))
                })?;
                if let Some((other, _)) = slot {
                    return Err(WagonPlanError::invalid(format!(
                        "front {} belongs to both path {} and path {}",
                        front + 1,
                        *other + 1,
                        path_id + 1
                    )));
                }
                *slot = Some((path_id, local_index));
            }
        }

        let fronts = specs
            .into_iter()
            .zip(placement)
            .enumerate()
            .map(|(id, (spec, slot))| match slot {
                Some((path_id, local_index)) => Ok(Front::new(id, spec, path_id, local_index)),
                None => Err(WagonPlanError::invalid(format!(
                    "front {} is not on any path",
                    id + 1
                ))),
            })
            .collect::<Result<Vec<_>>>()?;

        let paths = paths
            .into_iter()
            .enumerate()
            .map(|(id, members)| Path::new(id, members))
            .collect();

        Ok(Self { fronts, paths })
    }

    /// Creates a station from a nested path/front layout. Front ids follow
    /// the layout order across paths.
    pub fn from_layout(layout: &StationLayout) -> Result<Self> {
        let mut builder = StationBuilder::new();
        for path in &layout.paths {
            builder = builder.path(path.fronts.iter().copied());
        }
        builder.build()
    }

    /// Creates a station whose fronts all share one path.
    pub fn single_path(specs: Vec<FrontSpec>) -> Result<Self> {
        let members = (0..specs.len()).collect();
        Self::new(specs, vec![members])
    }

    /// Creates a station where every front has its own path, so path grouping
    /// never constrains the visiting order.
    pub fn separate_paths(specs: Vec<FrontSpec>) -> Result<Self> {
        let paths = (0..specs.len()).map(|i| vec![i]).collect();
        Self::new(specs, paths)
    }

    pub fn fronts(&self) -> &[Front] {
        &self.fronts
    }

    /// Returns the front at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn front(&self, index: usize) -> &Front {
        &self.fronts[index]
    }

    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    pub fn front_count(&self) -> usize {
        self.fronts.len()
    }

    /// All front indices in ingestion order.
    pub fn all_indices(&self) -> Vec<usize> {
        (0..self.fronts.len()).collect()
    }

    /// Checks that `indices` is a non-empty set of known fronts.
    pub fn check_subset(&self, indices: &[usize]) -> Result<()> {
        if indices.is_empty() {
            return Err(WagonPlanError::invalid("no fronts requested"));
        }
        let mut seen = vec![false; self.fronts.len()];
        for &index in indices {
            match seen.get_mut(index) {
                None => {
                    return Err(WagonPlanError::invalid(format!(
                        "unknown front {}",
                        index + 1
                    )))
                }
                Some(true) => {
                    return Err(WagonPlanError::invalid(format!(
                        "front {} requested twice",
                        index + 1
                    )))
                }
                Some(flag) => *flag = true,
            }
        }
        Ok(())
    }

    /// The path grouping restricted to `indices`.
    ///
    /// Paths keep their order and fronts keep their local order; paths with
    /// no requested front are dropped. Indices must be a valid subset.
    pub fn groups_for(&self, indices: &[usize]) -> Vec<Vec<usize>> {
        let mut member = vec![false; self.fronts.len()];
        for &index in indices {
            member[index] = true;
        }
        self.paths
            .iter()
            .map(|path| {
                path.fronts()
                    .iter()
                    .copied()
                    .filter(|&front| member[front])
                    .collect::<Vec<_>>()
            })
            .filter(|group| !group.is_empty())
            .collect()
    }
}

fn check_spec(id: usize, spec: &FrontSpec) -> Result<()> {
    if spec.wagon_count == 0 {
        return Err(WagonPlanError::invalid(format!(
            "front {} has no wagons",
            id + 1
        )));
    }
    if !spec.travel_time.is_finite() || spec.travel_time < 0.0 {
        return Err(WagonPlanError::invalid(format!(
            "front {} has invalid travel time {}",
            id + 1,
            spec.travel_time
        )));
    }
    Ok(())
}

/// Incremental station construction, one path at a time.
///
/// ```
/// use wagonplan_core::StationBuilder;
///
/// let station = StationBuilder::new()
///     .path([(4, 1.0), (2, 1.0)])
///     .path([(6, 3.0)])
///     .build()
///     .unwrap();
///
/// assert_eq!(station.paths().len(), 2);
/// assert_eq!(station.paths()[1].fronts(), &[2]);
/// ```
#[derive(Debug, Default, Clone)]
pub struct StationBuilder {
    specs: Vec<FrontSpec>,
    paths: Vec<Vec<usize>>,
}

impl StationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a path holding the given fronts; ids continue from the
    /// previous path.
    pub fn path<I, F>(mut self, fronts: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<FrontSpec>,
    {
        let start = self.specs.len();
        self.specs.extend(fronts.into_iter().map(Into::into));
        self.paths.push((start..self.specs.len()).collect());
        self
    }

    pub fn build(self) -> Result<Station> {
        Station::new(self.specs, self.paths)
    }
}
