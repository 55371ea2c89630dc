//! Station-count sweep.
//!
//! For a fixed line length, every feasible station count is evaluated with a
//! closed-form door-to-door time model:
//!
//! - more stations shorten the walk to the nearest station, but
//! - every extra stop costs an accelerate, brake and dwell cycle.
//!
//! The sweep stops before the count at which the spacing becomes too short
//! for the vehicle to reach line speed between stops.

use tracing::{debug, trace};

use crate::domain::{JourneyProfile, OperationsProfile, VehicleProfile};

use super::config::{MIN_STATION_COUNT, SweepConfig};
use super::table::{ResultTable, StationCountResult, SweepError};

/// Evaluates door-to-door times across candidate station counts.
///
/// The engine borrows its inputs read-only. The only state it keeps is a
/// copy of the table produced by the last [`run`](Self::run), so that the
/// optimum can be queried afterwards.
#[derive(Debug, Clone)]
pub struct SweepEngine<'a> {
    journey: &'a JourneyProfile,
    vehicle: &'a VehicleProfile,
    operations: &'a OperationsProfile,
    config: SweepConfig,
    last: Option<ResultTable>,
}

impl<'a> SweepEngine<'a> {
    /// Create an engine with the default configuration.
    pub fn new(
        journey: &'a JourneyProfile,
        vehicle: &'a VehicleProfile,
        operations: &'a OperationsProfile,
    ) -> Self {
        Self::with_config(journey, vehicle, operations, SweepConfig::default())
    }

    /// Create an engine with an explicit configuration.
    pub fn with_config(
        journey: &'a JourneyProfile,
        vehicle: &'a VehicleProfile,
        operations: &'a OperationsProfile,
        config: SweepConfig,
    ) -> Self {
        Self {
            journey,
            vehicle,
            operations,
            config,
            last: None,
        }
    }

    /// Exclusive upper bound on the station counts evaluated.
    ///
    /// `ceil(journey_distance / (accel_distance + decel_distance) + 0.5)`
    ///
    /// Fails with [`SweepError::TooManyStations`] when the bound is not
    /// finite or exceeds the configured station limit.
    pub fn max_station_count(&self) -> Result<usize, SweepError> {
        let cycles = self.journey.journey_distance() / self.vehicle.cycle_distance();
        let upper_bound = (cycles + 0.5).ceil();
        let limit = self.config.station_limit();

        if !upper_bound.is_finite() || upper_bound > limit as f64 {
            return Err(SweepError::TooManyStations { upper_bound, limit });
        }

        Ok(upper_bound as usize)
    }

    /// Evaluate the journey time breakdown for `station_count` stations.
    ///
    /// `station_count` must be at least two; fewer stations have no
    /// interstation geometry. Counts beyond
    /// [`max_station_count`](Self::max_station_count) are fine: there the
    /// cruise distance goes negative and is carried through unclamped.
    pub fn evaluate(&self, station_count: usize) -> StationCountResult {
        debug_assert!(
            station_count >= MIN_STATION_COUNT,
            "a line needs at least two stations, got {station_count}"
        );

        let n = station_count as f64;
        let vehicle = self.vehicle;

        let interstation_distance = self.journey.journey_distance() / (n - 0.5);
        let cruise_distance =
            interstation_distance - vehicle.accel_distance() - vehicle.decel_distance();
        let cruise_time = cruise_distance / vehicle.max_speed();
        let interstation_time = cruise_time + vehicle.accel_time() + vehicle.decel_time();

        let vehicle_time =
            interstation_time * (n - 1.0) + self.operations.dwell_time() * (n - 2.0);
        let access_time = (interstation_distance / 4.0) / self.journey.walk_speed();
        let wait_time = self.operations.headway() / 2.0;
        let door_to_door_time = vehicle_time + 2.0 * access_time + wait_time;

        trace!(
            station_count,
            interstation_distance,
            cruise_distance,
            door_to_door_time,
            "evaluated station count"
        );

        StationCountResult {
            station_count,
            interstation_distance,
            cruise_distance,
            vehicle_time,
            access_time,
            wait_time,
            door_to_door_time,
        }
    }

    /// Evaluate every station count in `[min_station_count, max_station_count)`.
    ///
    /// Returns an empty table when the line is too short for even the
    /// smallest count. Does not touch the cached result.
    pub fn sweep(&self) -> Result<ResultTable, SweepError> {
        let lower = self.config.min_station_count();
        let upper = self.max_station_count()?;

        let results: Vec<StationCountResult> = (lower..upper).map(|n| self.evaluate(n)).collect();

        debug!(
            journey_distance = self.journey.journey_distance(),
            lower,
            upper,
            evaluated = results.len(),
            "station-count sweep complete"
        );

        Ok(ResultTable::from_ordered(results))
    }

    /// Run the sweep and remember the table for [`optimum`](Self::optimum).
    ///
    /// A failed run clears the remembered table.
    pub fn run(&mut self) -> Result<ResultTable, SweepError> {
        self.last = None;
        let table = self.sweep()?;
        self.last = Some(table.clone());
        Ok(table)
    }

    /// The table produced by the last [`run`](Self::run), if any.
    pub fn last_result(&self) -> Option<&ResultTable> {
        self.last.as_ref()
    }

    /// Optimum of the last [`run`](Self::run).
    ///
    /// Fails with [`SweepError::EmptyResult`] if nothing has been run yet or
    /// the last table was empty.
    pub fn optimum(&self) -> Result<StationCountResult, SweepError> {
        self.last
            .as_ref()
            .ok_or(SweepError::EmptyResult)
            .and_then(ResultTable::optimum)
    }
}

/// Evaluate every feasible station count for the given line.
pub fn run_sweep(
    journey: &JourneyProfile,
    vehicle: &VehicleProfile,
    operations: &OperationsProfile,
) -> Result<ResultTable, SweepError> {
    SweepEngine::new(journey, vehicle, operations).sweep()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
    }

    /// 10 km line, 20 m/s vehicle at 1 m/s², 5 minute headway, 30 s dwell.
    fn reference() -> (JourneyProfile, VehicleProfile, OperationsProfile) {
        (
            JourneyProfile::new(10_000.0, 1.4).unwrap(),
            VehicleProfile::new(20.0, 1.0, 1.0).unwrap(),
            OperationsProfile::new(300.0, 30.0).unwrap(),
        )
    }

    #[test]
    fn reference_line_bounds() {
        let (jny, veh, ops) = reference();
        let engine = SweepEngine::new(&jny, &veh, &ops);

        assert_eq!(veh.accel_distance(), 200.0);
        assert_eq!(veh.decel_distance(), 200.0);
        assert_eq!(engine.max_station_count(), Ok(26));

        let table = engine.sweep().unwrap();
        assert_eq!(table.len(), 24);
        assert_eq!(table.first().map(|r| r.station_count), Some(2));
        assert_eq!(table.last().map(|r| r.station_count), Some(25));
    }

    #[test]
    fn reference_line_optimum_is_interior() {
        let (jny, veh, ops) = reference();
        let table = run_sweep(&jny, &veh, &ops).unwrap();
        let best = table.optimum().unwrap();

        assert!(best.station_count > 2);
        assert!(best.station_count < 25);
        assert_eq!(best.station_count, 9);
    }

    #[test]
    fn evaluate_two_stations() {
        let (jny, veh, ops) = reference();
        let r = SweepEngine::new(&jny, &veh, &ops).evaluate(2);

        // 10000 / 1.5
        let s_is = 10_000.0 / 1.5;
        assert!(close(r.interstation_distance, s_is));
        assert!(close(r.cruise_distance, s_is - 400.0));
        // One segment, no intermediate dwell
        assert!(close(r.vehicle_time, (s_is - 400.0) / 20.0 + 40.0));
        assert!(close(r.access_time, s_is / 4.0 / 1.4));
        assert_eq!(r.wait_time, 150.0);
        assert!(close(
            r.door_to_door_time,
            r.vehicle_time + 2.0 * r.access_time + 150.0
        ));
    }

    #[test]
    fn evaluate_counts_intermediate_dwells() {
        let (jny, veh, _) = reference();
        let no_dwell = OperationsProfile::new(300.0, 0.0).unwrap();
        let with_dwell = OperationsProfile::new(300.0, 30.0).unwrap();

        let a = SweepEngine::new(&jny, &veh, &no_dwell).evaluate(6);
        let b = SweepEngine::new(&jny, &veh, &with_dwell).evaluate(6);

        // Four intermediate stops at 30 s each
        assert!(close(b.vehicle_time - a.vehicle_time, 120.0));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "at least two stations")]
    fn evaluate_below_two_stations_panics_in_debug() {
        let (jny, veh, ops) = reference();
        SweepEngine::new(&jny, &veh, &ops).evaluate(1);
    }

    #[test]
    fn negative_cruise_propagates() {
        let (jny, veh, ops) = reference();
        let engine = SweepEngine::new(&jny, &veh, &ops);

        // Spacing of ~253 m is shorter than the 400 m cycle
        let r = engine.evaluate(40);
        assert!(r.cruise_distance < 0.0);
        assert!(close(r.cruise_distance, 10_000.0 / 39.5 - 400.0));
    }

    #[test]
    fn short_line_yields_empty_table() {
        let jny = JourneyProfile::new(300.0, 1.4).unwrap();
        let veh = VehicleProfile::new(20.0, 1.0, 1.0).unwrap();
        let ops = OperationsProfile::new(300.0, 30.0).unwrap();

        let mut engine = SweepEngine::new(&jny, &veh, &ops);
        assert_eq!(engine.max_station_count(), Ok(2));

        let table = engine.run().unwrap();
        assert!(table.is_empty());
        assert_eq!(table.optimum(), Err(SweepError::EmptyResult));
        assert_eq!(engine.optimum(), Err(SweepError::EmptyResult));
    }

    #[test]
    fn long_line_exceeds_station_limit() {
        // 1000 km at 20 km/h with 10 m/s² needs 324001 station counts
        let jny = JourneyProfile::new(1_000_000.0, 1.4).unwrap();
        let veh = VehicleProfile::new(20.0 / 3.6, 10.0, 10.0).unwrap();
        let ops = OperationsProfile::new(300.0, 30.0).unwrap();

        let mut engine = SweepEngine::new(&jny, &veh, &ops);
        let err = engine.run().unwrap_err();

        assert!(matches!(
            err,
            SweepError::TooManyStations { limit: 10_000, upper_bound } if upper_bound > 300_000.0
        ));
        assert!(engine.last_result().is_none());
        assert_eq!(run_sweep(&jny, &veh, &ops), Err(err));
    }

    #[test]
    fn overflowing_bound_is_refused() {
        let jny = JourneyProfile::new(f64::MAX, 1.4).unwrap();
        let veh = VehicleProfile::new(1e-100, 1.0, 1.0).unwrap();
        let ops = OperationsProfile::new(300.0, 30.0).unwrap();

        let err = SweepEngine::new(&jny, &veh, &ops)
            .max_station_count()
            .unwrap_err();
        assert!(matches!(
            err,
            SweepError::TooManyStations { upper_bound, .. } if upper_bound.is_infinite()
        ));
    }

    #[test]
    fn bound_equal_to_limit_is_allowed() {
        let (jny, veh, ops) = reference();
        let at_limit = SweepConfig::new(2, 26).unwrap();
        let below = SweepConfig::new(2, 25).unwrap();

        let table = SweepEngine::with_config(&jny, &veh, &ops, at_limit)
            .sweep()
            .unwrap();
        assert_eq!(table.len(), 24);

        let err = SweepEngine::with_config(&jny, &veh, &ops, below)
            .sweep()
            .unwrap_err();
        assert_eq!(
            err,
            SweepError::TooManyStations {
                upper_bound: 26.0,
                limit: 25
            }
        );
    }

    #[test]
    fn optimum_before_run_is_empty() {
        let (jny, veh, ops) = reference();
        let engine = SweepEngine::new(&jny, &veh, &ops);

        assert!(engine.last_result().is_none());
        assert_eq!(engine.optimum(), Err(SweepError::EmptyResult));
    }

    #[test]
    fn run_caches_last_table() {
        let (jny, veh, ops) = reference();
        let mut engine = SweepEngine::new(&jny, &veh, &ops);

        let table = engine.run().unwrap();
        assert_eq!(engine.last_result(), Some(&table));
        assert_eq!(engine.optimum().unwrap(), table.optimum().unwrap());
    }

    #[test]
    fn custom_lower_bound() {
        let (jny, veh, ops) = reference();
        let config = SweepConfig::new(10, 100).unwrap();
        let table = SweepEngine::with_config(&jny, &veh, &ops, config)
            .sweep()
            .unwrap();

        assert_eq!(table.first().map(|r| r.station_count), Some(10));
        assert_eq!(table.len(), 16);
        assert!(table.iter().all(|r| r.station_count >= 2));
    }

    #[test]
    fn lower_bound_above_upper_is_empty() {
        let (jny, veh, ops) = reference();
        let config = SweepConfig::new(30, 100).unwrap();
        let table = SweepEngine::with_config(&jny, &veh, &ops, config)
            .sweep()
            .unwrap();

        assert!(table.is_empty());
    }

    #[test]
    fn wait_independent_of_station_count() {
        let (jny, veh, ops) = reference();
        let table = run_sweep(&jny, &veh, &ops).unwrap();

        assert!(table.iter().all(|r| r.wait_time == 150.0));
    }
}
