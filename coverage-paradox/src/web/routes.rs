//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tracing::{info, warn};

use crate::domain::InvalidParameter;
use crate::form::FormValues;
use crate::sweep::{StationCountResult, SweepError};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/defaults", get(defaults))
        .route("/sweep", post(sweep))
        .route("/sweep/optimum", post(sweep_optimum))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Default line parameters, in user units.
async fn defaults(State(state): State<AppState>) -> Json<FormValues> {
    Json(state.defaults.as_ref().clone())
}

/// Run the full station-count sweep.
///
/// An empty sweep is not an error here: the table is returned with a null
/// optimum so the caller can see why.
async fn sweep(Json(form): Json<FormValues>) -> Result<Json<SweepResponse>, AppError> {
    let params = form.to_parameters()?;
    let engine = params.engine();
    let max_station_count = engine.max_station_count()?;
    let results = engine.sweep()?;
    let optimum = results.optimum().ok();

    info!(
        evaluated = results.len(),
        optimum = optimum.map(|r| r.station_count),
        "sweep request"
    );

    Ok(Json(SweepResponse {
        parameters: ParametersView::from_parameters(&params, max_station_count),
        results,
        optimum,
    }))
}

/// Run the sweep and return only the best station count.
async fn sweep_optimum(
    Json(form): Json<FormValues>,
) -> Result<Json<StationCountResult>, AppError> {
    let params = form.to_parameters()?;
    let mut engine = params.engine();
    engine.run()?;
    let best = engine.optimum()?;

    info!(station_count = best.station_count, "optimum request");

    Ok(Json(best))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Unprocessable { message: String },
}

impl From<InvalidParameter> for AppError {
    fn from(e: InvalidParameter) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<SweepError> for AppError {
    fn from(e: SweepError) -> Self {
        match e {
            SweepError::EmptyResult => AppError::Unprocessable {
                message: e.to_string(),
            },
            SweepError::TooManyStations { .. } => AppError::BadRequest {
                message: e.to_string(),
            },
            SweepError::InvalidParameter(inner) => inner.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Unprocessable { message } => (StatusCode::UNPROCESSABLE_ENTITY, message),
        };

        warn!(%status, %message, "request rejected");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
