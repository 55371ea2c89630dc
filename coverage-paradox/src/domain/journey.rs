//! Passenger journey parameters.

use super::error::{InvalidParameter, require_positive};

/// A passenger's line-haul distance and walking pace.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JourneyProfile {
    journey_distance: f64,
    walk_speed: f64,
}

impl JourneyProfile {
    /// Create a profile from journey distance (m) and walking speed (m/s).
    pub fn new(journey_distance: f64, walk_speed: f64) -> Result<Self, InvalidParameter> {
        Ok(Self {
            journey_distance: require_positive("journey_distance", journey_distance)?,
            walk_speed: require_positive("walk_speed", walk_speed)?,
        })
    }

    /// Length of the line being travelled (m).
    pub fn journey_distance(&self) -> f64 {
        self.journey_distance
    }

    /// Average walking pace to and from stations (m/s).
    pub fn walk_speed(&self) -> f64 {
        self.walk_speed
    }
}
