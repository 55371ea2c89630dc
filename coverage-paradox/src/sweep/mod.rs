//! Station-count optimisation.
//!
//! Denser stations shorten the walk to the line but slow every train down.
//! This module sweeps the feasible station counts for one line, computes a
//! door-to-door journey time for each, and picks the count that minimises it.

mod config;
mod engine;
mod table;

pub use config::{DEFAULT_STATION_LIMIT, MIN_STATION_COUNT, SweepConfig};
pub use engine::{SweepEngine, run_sweep};
pub use table::{ResultTable, StationCountResult, SweepError, get_optimum};
