//! Repository for the `interview_flows` table.

use hireflow_core::types::DbId;
use sqlx::PgPool;

use crate::models::interview_flow::{CreateInterviewFlow, InterviewFlow};

const COLUMNS: &str = "id, description, created_at";

/// Provides access to interview flows.
pub struct InterviewFlowRepo;

impl InterviewFlowRepo {
    /// Insert a new flow, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateInterviewFlow,
    ) -> Result<InterviewFlow, sqlx::Error> {
        let query = format!(
            "INSERT INTO interview_flows (description) VALUES ($1) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, InterviewFlow>(&query)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<InterviewFlow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM interview_flows WHERE id = $1");
        sqlx::query_as::<_, InterviewFlow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
