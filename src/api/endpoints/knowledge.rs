//! Condition knowledge-base endpoint.

use axum::extract::{Path, State};
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::models::ConditionEntry;

/// `GET /api/knowledge/:condition` — knowledge-base entry by exact name.
pub async fn lookup(
    State(ctx): State<ApiContext>,
    Path(condition): Path<String>,
) -> Result<Json<ConditionEntry>, ApiError> {
    let entry = ctx
        .store
        .condition(&condition)
        .ok_or_else(|| ApiError::NotFound("Condition not found".into()))?;

    Ok(Json(entry.clone()))
}
