//! Disease progression endpoint.

use axum::extract::{Path, State};
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::insight;
use crate::insight::types::Prediction;

/// `GET /api/predict/progression/:id` — per-condition trajectory
/// bundles. A chart with no conditions is a 400, not an empty list.
pub async fn predict(
    State(ctx): State<ApiContext>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Prediction>>, ApiError> {
    let patient = ctx
        .store
        .patient(&id)
        .ok_or_else(|| ApiError::NotFound("Patient not found".into()))?;

    let predictions = insight::predict(patient, &mut rand::thread_rng())?;
    Ok(Json(predictions))
}
