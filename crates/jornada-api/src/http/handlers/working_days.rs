//! Business-time calculation endpoint.
//!
//! GET /api/working-days - Add working days and/or hours to a start instant.

use std::time::Instant;

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use chrono::Utc;

use jornada_core::request::validate_params;
use jornada_types::api::WorkingDateResponse;

use crate::http::error::AppError;
use crate::http::extractors::query::WorkingDaysQuery;
use crate::state::AppState;

/// GET /api/working-days - Resolve `days` working days then `hours` working
/// hours after `date` (or now), in the configured business calendar.
///
/// `days` and `hours` must be plain digit strings; `days=1.5` or `hours=5abc`
/// is a 400. Seconds in `date` are dropped before counting.
pub async fn working_days(
    State(state): State<AppState>,
    query: Result<Query<WorkingDaysQuery>, QueryRejection>,
) -> Result<Json<WorkingDateResponse>, AppError> {
    let start = Instant::now();
    let request_id = uuid::Uuid::now_v7().to_string();

    let Query(query) = query.map_err(|rejection| {
        tracing::debug!(%request_id, %rejection, "query rejected");
        AppError::Validation("Invalid query parameters".to_string())
    })?;

    let request = validate_params(&query.as_raw(), Utc::now()).inspect_err(|err| {
        tracing::debug!(%request_id, %err, "invalid parameters");
    })?;

    let result = state.calculator.calculate(&request);

    tracing::info!(
        %request_id,
        days = request.days,
        hours = request.hours,
        start = %request.start,
        result = %result,
        elapsed_us = start.elapsed().as_micros() as u64,
        "working date calculated"
    );

    Ok(Json(WorkingDateResponse::from_instant(result)))
}
