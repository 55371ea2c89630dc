//! Per-station-count results and the optimum query.

use serde::Serialize;

use crate::domain::InvalidParameter;

/// Error from the station-count sweep.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SweepError {
    /// An optimum was requested from a table with no entries
    #[error("no station counts were evaluated; the line is too short for a full accelerate and brake cycle")]
    EmptyResult,

    /// The line needs more station counts than the configured limit allows
    #[error("sweep would run up to {upper_bound} stations, above the limit of {limit}")]
    TooManyStations { upper_bound: f64, limit: usize },

    /// Sweep configuration was invalid
    #[error(transparent)]
    InvalidParameter(#[from] InvalidParameter),
}

/// Journey time breakdown for one candidate station count.
///
/// Distances are in metres and times in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StationCountResult {
    /// Number of stations on the line, terminals included.
    pub station_count: usize,

    /// Spacing between adjacent stations.
    pub interstation_distance: f64,

    /// Distance run at maximum speed between two stations.
    /// Negative when the spacing is shorter than one accelerate and brake cycle.
    pub cruise_distance: f64,

    /// Running time over every segment plus dwell at intermediate stops.
    pub vehicle_time: f64,

    /// Walk time from origin to the nearest station.
    pub access_time: f64,

    /// Expected platform wait.
    pub wait_time: f64,

    /// Total time from leaving the door to arriving at the destination door.
    pub door_to_door_time: f64,
}

/// Results of one sweep, ordered by increasing station count.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResultTable {
    results: Vec<StationCountResult>,
}

impl ResultTable {
    /// Build a table from results already in increasing station-count order.
    pub(crate) fn from_ordered(results: Vec<StationCountResult>) -> Self {
        debug_assert!(
            results
                .windows(2)
                .all(|w| w[0].station_count < w[1].station_count),
            "results must be ordered by station count"
        );
        Self { results }
    }

    /// Number of station counts evaluated.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Returns true if no station count was evaluated.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Iterate over results in increasing station-count order.
    pub fn iter(&self) -> std::slice::Iter<'_, StationCountResult> {
        self.results.iter()
    }

    /// Look up the result for a given station count.
    pub fn get(&self, station_count: usize) -> Option<&StationCountResult> {
        self.results
            .binary_search_by_key(&station_count, |r| r.station_count)
            .ok()
            .map(|idx| &self.results[idx])
    }

    /// Result with the fewest stations.
    pub fn first(&self) -> Option<&StationCountResult> {
        self.results.first()
    }

    /// Result with the most stations.
    pub fn last(&self) -> Option<&StationCountResult> {
        self.results.last()
    }

    /// The result with the shortest door-to-door time.
    ///
    /// When several station counts share the minimum exactly, the one with
    /// the fewest stations is returned.
    pub fn optimum(&self) -> Result<StationCountResult, SweepError> {
        let mut results = self.results.iter();
        let mut best = results.next().ok_or(SweepError::EmptyResult)?;

        for candidate in results {
            if candidate.door_to_door_time < best.door_to_door_time {
                best = candidate;
            }
        }

        Ok(*best)
    }
}

impl<'a> IntoIterator for &'a ResultTable {
    type Item = &'a StationCountResult;
    type IntoIter = std::slice::Iter<'a, StationCountResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Return the entry of `table` with the shortest door-to-door time.
///
/// Fails with [`SweepError::EmptyResult`] when the table has no entries.
pub fn get_optimum(table: &ResultTable) -> Result<StationCountResult, SweepError> {
    table.optimum()
}
