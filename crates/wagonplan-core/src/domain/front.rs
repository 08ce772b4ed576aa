//! Fronts and paths.

/// Input data for a single front, before ids are assigned.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct FrontSpec {
    /// Number of wagons to deliver to the front.
    pub wagon_count: u32,
    /// Travel time from the station to the front, in hours.
    pub travel_time: f64,
}

impl FrontSpec {
    pub fn new(wagon_count: u32, travel_time: f64) -> Self {
        Self {
            wagon_count,
            travel_time,
        }
    }
}

impl From<(u32, f64)> for FrontSpec {
    fn from((wagon_count, travel_time): (u32, f64)) -> Self {
        Self::new(wagon_count, travel_time)
    }
}

/// A loading/unloading point serviced by a locomotive.
///
/// Fronts are created by [`Station`](super::Station) in ingestion order and
/// never change afterwards. `id` is 0-based; display code adds one.
#[derive(Debug, Clone, PartialEq)]
pub struct Front {
    id: usize,
    wagon_count: u32,
    travel_time: f64,
    path_id: usize,
    local_index: usize,
}

impl Front {
    pub(crate) fn new(
        id: usize,
        spec: FrontSpec,
        path_id: usize,
        local_index: usize,
    ) -> Self {
        Self {
            id,
            wagon_count: spec.wagon_count,
            travel_time: spec.travel_time,
            path_id,
            local_index,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn wagon_count(&self) -> u32 {
        self.wagon_count
    }

    pub fn travel_time(&self) -> f64 {
        self.travel_time
    }

    /// The connecting path this front belongs to.
    pub fn path_id(&self) -> usize {
        self.path_id
    }

    /// Position of this front within its path.
    pub fn local_index(&self) -> usize {
        self.local_index
    }

    /// Travel time per wagon, the ratio-rule sort key.
    pub fn ratio(&self) -> f64 {
        self.travel_time / f64::from(self.wagon_count)
    }

    /// Wagon-hours of this front when it is serviced alone.
    pub fn wagon_hours(&self) -> f64 {
        f64::from(self.wagon_count) * self.travel_time
    }
}

/// A connecting track grouping a non-empty ordered set of fronts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    id: usize,
    fronts: Vec<usize>,
}

impl Path {
    pub(crate) fn new(id: usize, fronts: Vec<usize>) -> Self {
        Self { id, fronts }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    /// Front indices on this path, in local order.
    pub fn fronts(&self) -> &[usize] {
        &self.fronts
    }

    pub fn len(&self) -> usize {
        self.fronts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fronts.is_empty()
    }
}

impl AsRef<[usize]> for Path {
    fn as_ref(&self) -> &[usize] {
        &self.fronts
    }
}
