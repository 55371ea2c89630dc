//! User-facing line parameters.
//!
//! People describe a line in kilometres, km/h, minutes and trains per hour.
//! The model works in metres and seconds. This module is the single place
//! where that conversion happens.

use serde::{Deserialize, Serialize};

use crate::domain::{
    InvalidParameter, JourneyProfile, OperationsProfile, VehicleProfile, require_positive,
};
use crate::sweep::{ResultTable, SweepEngine, SweepError};

const METRES_PER_KM: f64 = 1000.0;
const KMH_PER_MS: f64 = 3.6;
const SECONDS_PER_MINUTE: f64 = 60.0;
const SECONDS_PER_HOUR: f64 = 3600.0;

/// Line parameters as entered by a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormValues {
    /// Journey distance (km)
    pub journey_distance_km: f64,

    /// Trains per hour per direction
    pub trains_per_hour: f64,

    /// Maximum line speed (km/h)
    pub max_speed_kmh: f64,

    /// Mean acceleration (m/s²)
    pub accel_rate: f64,

    /// Mean deceleration (m/s²)
    pub decel_rate: f64,

    /// Dwell time at each intermediate station (minutes)
    pub dwell_time_mins: f64,

    /// Average walking pace (km/h)
    pub walk_speed_kmh: f64,
}

impl FormValues {
    /// Convert to SI units and validate.
    pub fn to_parameters(&self) -> Result<SimulationParameters, InvalidParameter> {
        let trains_per_hour = require_positive("trains_per_hour", self.trains_per_hour)?;

        let vehicle = VehicleProfile::new(
            self.max_speed_kmh / KMH_PER_MS,
            self.accel_rate,
            self.decel_rate,
        )?;
        let operations = OperationsProfile::new(
            SECONDS_PER_HOUR / trains_per_hour,
            self.dwell_time_mins * SECONDS_PER_MINUTE,
        )?;
        let journey = JourneyProfile::new(
            self.journey_distance_km * METRES_PER_KM,
            self.walk_speed_kmh / KMH_PER_MS,
        )?;

        Ok(SimulationParameters {
            vehicle,
            operations,
            journey,
        })
    }
}

impl Default for FormValues {
    fn default() -> Self {
        Self {
            journey_distance_km: 10.0,
            trains_per_hour: 12.0,
            max_speed_kmh: 80.0,
            accel_rate: 1.0,
            decel_rate: 1.0,
            dwell_time_mins: 0.5,
            walk_speed_kmh: 5.0,
        }
    }
}

/// The three validated model inputs for one line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationParameters {
    pub vehicle: VehicleProfile,
    pub operations: OperationsProfile,
    pub journey: JourneyProfile,
}

impl SimulationParameters {
    /// A sweep engine over these parameters.
    pub fn engine(&self) -> SweepEngine<'_> {
        SweepEngine::new(&self.journey, &self.vehicle, &self.operations)
    }

    /// Evaluate every feasible station count for this line.
    pub fn run_sweep(&self) -> Result<ResultTable, SweepError> {
        self.engine().sweep()
    }
}
