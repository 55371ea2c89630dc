//! Service operation parameters.

use super::error::{InvalidParameter, require_non_negative};

/// How the line is operated: service interval and station stop length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperationsProfile {
    headway: f64,
    dwell_time: f64,
}

impl OperationsProfile {
    /// Create a profile from headway and dwell time, both in seconds.
    pub fn new(headway: f64, dwell_time: f64) -> Result<Self, InvalidParameter> {
        Ok(Self {
            headway: require_non_negative("headway", headway)?,
            dwell_time: require_non_negative("dwell_time", dwell_time)?,
        })
    }

    /// Time between consecutive trains (s).
    pub fn headway(&self) -> f64 {
        self.headway
    }

    /// Time spent stopped at each intermediate station (s).
    pub fn dwell_time(&self) -> f64 {
        self.dwell_time
    }
}
