//! Simulated real-time vitals endpoint.

use axum::extract::{Path, State};
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::insight;
use crate::insight::types::RealtimeReading;

/// `GET /api/realtime/:id` — one simulated monitor reading.
pub async fn reading(
    State(ctx): State<ApiContext>,
    Path(id): Path<String>,
) -> Result<Json<RealtimeReading>, ApiError> {
    let patient = ctx
        .store
        .patient(&id)
        .ok_or_else(|| ApiError::NotFound("Patient not found".into()))?;

    let reading = insight::simulate_next(patient, &mut rand::thread_rng())?;
    Ok(Json(reading))
}
