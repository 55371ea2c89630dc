//! Physical model inputs for the station-spacing trade-off.
//!
//! All types here are in SI units (metres, seconds) and enforce their
//! invariants at construction time, so code that receives them can trust
//! their validity.

mod error;
mod journey;
mod operations;
mod vehicle;

pub use error::InvalidParameter;
pub(crate) use error::require_positive;
pub use journey::JourneyProfile;
pub use operations::OperationsProfile;
pub use vehicle::VehicleProfile;
