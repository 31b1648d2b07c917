//! Imaging study listing and simulated image analysis.

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::insight;
use crate::insight::types::ImagingReport;
use crate::models::ImagingStudy;

/// `GET /api/images/:id` — studies for a patient. An unknown patient or
/// one with no studies gets an empty array, not a 404.
pub async fn list(
    State(ctx): State<ApiContext>,
    Path(patient_id): Path<String>,
) -> Json<Vec<ImagingStudy>> {
    Json(ctx.store.images_for(&patient_id).to_vec())
}

/// Request body. `image_id` is optional at the serde level so a missing
/// key maps to a 400 with a message, not a rejection.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ImageAnalyzeRequest {
    pub image_id: Option<String>,
}

/// `POST /api/analyze/image` — simulated findings for one study.
pub async fn analyze(
    State(ctx): State<ApiContext>,
    Json(request): Json<ImageAnalyzeRequest>,
) -> Result<Json<ImagingReport>, ApiError> {
    let image_id = request
        .image_id
        .ok_or_else(|| ApiError::BadRequest("image_id is required".into()))?;

    let study = ctx
        .store
        .find_image(&image_id)
        .ok_or_else(|| ApiError::NotFound("Image not found".into()))?;

    let report = insight::synthesize_findings(study, &mut rand::thread_rng());
    Ok(Json(report))
}
