//! Vehicle kinematics.

use super::error::{InvalidParameter, require_positive};

/// Performance envelope of a rail vehicle.
///
/// The vehicle accelerates at a constant rate up to its maximum line speed,
/// cruises, then brakes at a constant rate to a stand. The distances and
/// times spent accelerating and braking are derived once at construction.
///
/// # Examples
///
/// ```
/// use coverage_paradox::domain::VehicleProfile;
///
/// let vehicle = VehicleProfile::new(20.0, 1.0, 1.0).unwrap();
/// assert_eq!(vehicle.accel_distance(), 200.0);
/// assert_eq!(vehicle.accel_time(), 20.0);
///
/// // A vehicle that cannot accelerate is rejected
/// assert!(VehicleProfile::new(20.0, 0.0, 1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VehicleProfile {
    max_speed: f64,
    accel_rate: f64,
    decel_rate: f64,

    accel_distance: f64,
    decel_distance: f64,
    accel_time: f64,
    decel_time: f64,
}

impl VehicleProfile {
    /// Create a profile from maximum speed (m/s) and acceleration and
    /// deceleration rates (m/s²).
    pub fn new(
        max_speed: f64,
        accel_rate: f64,
        decel_rate: f64,
    ) -> Result<Self, InvalidParameter> {
        let max_speed = require_positive("max_speed", max_speed)?;
        let accel_rate = require_positive("accel_rate", accel_rate)?;
        let decel_rate = require_positive("decel_rate", decel_rate)?;

        let speed_sq = max_speed * max_speed;

        // Extreme inputs can underflow to zero or overflow to infinity here
        Ok(Self {
            max_speed,
            accel_rate,
            decel_rate,
            accel_distance: require_positive("accel_distance", speed_sq / (2.0 * accel_rate))?,
            decel_distance: require_positive("decel_distance", speed_sq / (2.0 * decel_rate))?,
            accel_time: require_positive("accel_time", max_speed / accel_rate)?,
            decel_time: require_positive("decel_time", max_speed / decel_rate)?,
        })
    }

    /// Maximum line speed (m/s).
    pub fn max_speed(&self) -> f64 {
        self.max_speed
    }

    /// Mean acceleration (m/s²).
    pub fn accel_rate(&self) -> f64 {
        self.accel_rate
    }

    /// Mean deceleration (m/s²).
    pub fn decel_rate(&self) -> f64 {
        self.decel_rate
    }

    /// Distance covered accelerating from rest to maximum speed (m).
    pub fn accel_distance(&self) -> f64 {
        self.accel_distance
    }

    /// Distance covered braking from maximum speed to rest (m).
    pub fn decel_distance(&self) -> f64 {
        self.decel_distance
    }

    /// Time taken to reach maximum speed from rest (s).
    pub fn accel_time(&self) -> f64 {
        self.accel_time
    }

    /// Time taken to stop from maximum speed (s).
    pub fn decel_time(&self) -> f64 {
        self.decel_time
    }

    /// Distance of one full accelerate-then-brake cycle (m).
    pub fn cycle_distance(&self) -> f64 {
        self.accel_distance + self.decel_distance
    }
}
