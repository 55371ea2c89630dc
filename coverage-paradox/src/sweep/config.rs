//! Sweep configuration.

use crate::domain::InvalidParameter;

use super::table::SweepError;

/// Fewest stations a line can have: one at each end.
pub const MIN_STATION_COUNT: usize = 2;

/// Default cap on the exclusive upper station-count bound.
///
/// Realistic lines stay in the low tens; anything near this is a unit
/// mix-up rather than a line worth tabulating.
pub const DEFAULT_STATION_LIMIT: usize = 10_000;

/// Configuration parameters for the station-count sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepConfig {
    min_station_count: usize,
    station_limit: usize,
}

impl SweepConfig {
    /// Create a configuration starting the sweep at `min_station_count` and
    /// refusing lines whose upper bound exceeds `station_limit`.
    pub fn new(min_station_count: usize, station_limit: usize) -> Result<Self, SweepError> {
        if min_station_count < MIN_STATION_COUNT {
            return Err(InvalidParameter::new(
                "min_station_count",
                min_station_count as f64,
                "at least 2",
            )
            .into());
        }
        if station_limit < min_station_count {
            return Err(InvalidParameter::new(
                "station_limit",
                station_limit as f64,
                "at least min_station_count",
            )
            .into());
        }
        Ok(Self {
            min_station_count,
            station_limit,
        })
    }

    /// First station count evaluated (inclusive).
    /// Counts below two have no interstation geometry.
    pub fn min_station_count(&self) -> usize {
        self.min_station_count
    }

    /// Largest upper bound a sweep may have before it is refused.
    pub fn station_limit(&self) -> usize {
        self.station_limit
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            min_station_count: MIN_STATION_COUNT,
            station_limit: DEFAULT_STATION_LIMIT,
        }
    }
}
