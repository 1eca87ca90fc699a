//! Handlers for the `/positions` resource.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use hireflow_core::types::DbId;
use hireflow_pipeline::candidates_found_message;
use serde::Serialize;

use super::parse_path_id;
use crate::error::AppResult;
use crate::response::{DataResponse, ListResponse};
use crate::state::AppState;

/// `meta` block of the candidate board response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardMeta {
    pub position_id: DbId,
    pub total_candidates: usize,
    pub message: String,
}

/// GET /positions/{id}/candidates
///
/// Every candidate with an application for the position, with their current
/// stage and average interview score.
pub async fn list_candidates(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let position_id = parse_path_id(&id, "Position")?;

    let candidates =
        hireflow_pipeline::list_candidates_in_process(state.store.as_ref(), position_id).await?;

    let meta = BoardMeta {
        position_id,
        total_candidates: candidates.len(),
        message: candidates_found_message(candidates.len()),
    };
    Ok(Json(ListResponse::ok(candidates, meta)))
}

/// GET /positions/{id}/interview-flow
pub async fn interview_flow(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let position_id = parse_path_id(&id, "Position")?;
    let flow = hireflow_pipeline::interview_flow(state.store.as_ref(), position_id).await?;
    Ok(Json(DataResponse { data: flow }))
}
