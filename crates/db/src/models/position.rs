use hireflow_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `positions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Position {
    pub id: DbId,
    pub title: String,
    pub interview_flow_id: DbId,
    pub status: String,
    pub created_at: Timestamp,
}

/// DTO for creating a new position. Status defaults to `Open`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePosition {
    pub title: String,
    pub interview_flow_id: DbId,
    pub status: Option<String>,
}
