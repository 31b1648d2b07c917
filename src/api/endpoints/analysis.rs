//! Analysis report endpoint.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::insight;
use crate::insight::types::AnalysisReport;

/// Request body. `patient_id` is optional at the serde level so a
/// missing key maps to a 400 with a message, not a rejection.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AnalyzeRequest {
    pub patient_id: Option<String>,
}

/// `POST /api/analyze` — condition-driven analysis report.
pub async fn analyze(
    State(ctx): State<ApiContext>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisReport>, ApiError> {
    let patient_id = request
        .patient_id
        .ok_or_else(|| ApiError::BadRequest("patient_id is required".into()))?;

    let patient = ctx
        .store
        .patient(&patient_id)
        .ok_or_else(|| ApiError::NotFound("Patient not found".into()))?;

    let report = insight::analyze(patient, &ctx.store, &mut rand::thread_rng());
    Ok(Json(report))
}
