//! Web layer for the station-spacing model.
//!
//! Accepts line parameters in user units and returns the sweep as JSON.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
