//! Data transfer objects for web requests and responses.

use serde::Serialize;

use crate::form::SimulationParameters;
use crate::sweep::{ResultTable, StationCountResult};

/// The SI model inputs a sweep ran with, including derived kinematics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParametersView {
    /// Journey distance (m)
    pub journey_distance: f64,

    /// Walking speed (m/s)
    pub walk_speed: f64,

    /// Maximum line speed (m/s)
    pub max_speed: f64,

    /// Acceleration (m/s²)
    pub accel_rate: f64,

    /// Deceleration (m/s²)
    pub decel_rate: f64,

    /// Distance to reach line speed (m)
    pub accel_distance: f64,

    /// Distance to stop from line speed (m)
    pub decel_distance: f64,

    /// Time to reach line speed (s)
    pub accel_time: f64,

    /// Time to stop from line speed (s)
    pub decel_time: f64,

    /// Headway (s)
    pub headway: f64,

    /// Dwell time (s)
    pub dwell_time: f64,

    /// Exclusive upper bound of the station counts swept
    pub max_station_count: usize,
}

impl ParametersView {
    pub fn from_parameters(params: &SimulationParameters, max_station_count: usize) -> Self {
        let vehicle = &params.vehicle;
        Self {
            journey_distance: params.journey.journey_distance(),
            walk_speed: params.journey.walk_speed(),
            max_speed: vehicle.max_speed(),
            accel_rate: vehicle.accel_rate(),
            decel_rate: vehicle.decel_rate(),
            accel_distance: vehicle.accel_distance(),
            decel_distance: vehicle.decel_distance(),
            accel_time: vehicle.accel_time(),
            decel_time: vehicle.decel_time(),
            headway: params.operations.headway(),
            dwell_time: params.operations.dwell_time(),
            max_station_count,
        }
    }
}

/// Response for a full sweep.
#[derive(Debug, Serialize)]
pub struct SweepResponse {
    /// Inputs in SI units
    pub parameters: ParametersView,

    /// One entry per station count, fewest stations first
    pub results: ResultTable,

    /// Best station count, or null if the sweep was empty
    pub optimum: Option<StationCountResult>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
