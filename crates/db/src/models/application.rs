//! Application model and the joined read shapes used by the pipeline.

use hireflow_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `applications` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Application {
    pub id: DbId,
    pub position_id: DbId,
    pub candidate_id: DbId,
    pub application_date: Timestamp,
    pub current_interview_step: DbId,
    pub notes: Option<String>,
}

/// DTO for creating an application. `application_date` defaults to now.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateApplication {
    pub position_id: DbId,
    pub candidate_id: DbId,
    pub application_date: Option<Timestamp>,
    pub current_interview_step: DbId,
    pub notes: Option<String>,
}

/// One application on a position's board, joined to its candidate and
/// current interview step.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct ApplicationBoardRow {
    pub application_id: DbId,
    pub candidate_id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub current_interview_step: DbId,
    pub current_interview_step_name: String,
}

/// A candidate's most recent application, joined to its position and
/// current interview step.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct LatestApplication {
    pub application_id: DbId,
    pub application_date: Timestamp,
    pub position_id: DbId,
    pub position_title: String,
    pub interview_flow_id: DbId,
    pub current_interview_step: DbId,
    pub current_interview_step_name: String,
}
