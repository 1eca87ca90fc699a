use hireflow_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `interviews` table.
///
/// `score` is `None` until the interview has been scored.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Interview {
    pub id: DbId,
    pub application_id: DbId,
    pub interview_step_id: DbId,
    pub interview_date: Timestamp,
    pub result: Option<String>,
    pub score: Option<i32>,
    pub notes: Option<String>,
}

/// DTO for recording an interview. `interview_date` defaults to now.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateInterview {
    pub application_id: DbId,
    pub interview_step_id: DbId,
    pub interview_date: Option<Timestamp>,
    pub result: Option<String>,
    pub score: Option<i32>,
    pub notes: Option<String>,
}

/// The score of one scored interview, keyed by its application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRow)]
pub struct InterviewScore {
    pub application_id: DbId,
    pub score: i32,
}
