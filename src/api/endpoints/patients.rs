//! Patient roster and chart endpoints.

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::models::PatientRecord;

/// Roster row: demographics only, no chart data.
#[derive(Serialize)]
pub struct PatientSummary {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub gender: String,
}

/// `GET /api/patients` — roster of all seeded patients.
pub async fn list(State(ctx): State<ApiContext>) -> Json<Vec<PatientSummary>> {
    let summaries = ctx
        .store
        .patients()
        .into_iter()
        .map(|patient| PatientSummary {
            id: patient.id.clone(),
            name: patient.name.clone(),
            age: patient.age,
            gender: patient.gender.clone(),
        })
        .collect();

    Json(summaries)
}

/// `GET /api/patients/:id` — the full chart.
pub async fn detail(
    State(ctx): State<ApiContext>,
    Path(id): Path<String>,
) -> Result<Json<PatientRecord>, ApiError> {
    let patient = ctx
        .store
        .patient(&id)
        .ok_or_else(|| ApiError::NotFound("Patient not found".into()))?;

    Ok(Json(patient.clone()))
}
