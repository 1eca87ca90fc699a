//! Handlers for the `/candidates` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use hireflow_core::types::DbId;
use serde::Deserialize;
use serde_json::Value;

use super::parse_path_id;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

const INVALID_STAGE_ID: &str = "newStageId is required and must be a valid number";

/// Body of `PUT /candidates/{id}/stage`.
///
/// `newStageId` is accepted as a JSON integer or a numeric string.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStageRequest {
    #[serde(default)]
    pub new_stage_id: Option<Value>,
}

impl UpdateStageRequest {
    /// The requested stage id. Zero counts as missing; any other integer is
    /// passed on and resolved (or not found) by the pipeline.
    pub fn stage_id(&self) -> AppResult<DbId> {
        let id = match &self.new_stage_id {
            Some(Value::Number(n)) => n.as_i64(),
            Some(Value::String(s)) => s.trim().parse::<DbId>().ok(),
            _ => None,
        };
        id.filter(|id| *id != 0)
            .ok_or_else(|| AppError::BadRequest(INVALID_STAGE_ID.to_string()))
    }
}

/// PUT /candidates/{id}/stage
///
/// Move the candidate's most recent application to `newStageId`.
pub async fn update_stage(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<UpdateStageRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let candidate_id = parse_path_id(&id, "Candidate")?;
    let Json(input) =
        body.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let stage_id = input.stage_id()?;

    let result = hireflow_pipeline::move_candidate_to_stage(
        state.store.as_ref(),
        candidate_id,
        stage_id,
        state.config.transition_policy,
    )
    .await?;
    Ok(Json(result))
}
