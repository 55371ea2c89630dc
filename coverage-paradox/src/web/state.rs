//! Application state for the web layer.

use std::sync::Arc;

use crate::form::FormValues;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Parameters offered to clients as a starting point
    pub defaults: Arc<FormValues>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(defaults: FormValues) -> Self {
        Self {
            defaults: Arc::new(defaults),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(FormValues::default())
    }
}
