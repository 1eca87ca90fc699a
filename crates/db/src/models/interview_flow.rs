//! Interview flow and interview step models.
//!
//! A flow is the ordered set of steps a position's candidates move through.

use hireflow_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `interview_flows` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct InterviewFlow {
    pub id: DbId,
    pub description: String,
    pub created_at: Timestamp,
}

/// DTO for creating a new interview flow.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateInterviewFlow {
    pub description: String,
}

/// A row from the `interview_steps` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct InterviewStep {
    pub id: DbId,
    pub interview_flow_id: DbId,
    pub name: String,
    pub order_index: i32,
}

/// DTO for creating a new interview step.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateInterviewStep {
    pub interview_flow_id: DbId,
    pub name: String,
    pub order_index: i32,
}
