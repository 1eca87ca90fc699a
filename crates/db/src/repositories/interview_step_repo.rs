//! Repository for the `interview_steps` table.

use hireflow_core::types::DbId;
use sqlx::PgPool;

use crate::models::interview_flow::{CreateInterviewStep, InterviewStep};

const COLUMNS: &str = "id, interview_flow_id, name, order_index";

/// Provides access to the steps of interview flows.
pub struct InterviewStepRepo;

impl InterviewStepRepo {
    /// Insert a new step, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateInterviewStep,
    ) -> Result<InterviewStep, sqlx::Error> {
        let query = format!(
            "INSERT INTO interview_steps (interview_flow_id, name, order_index) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, InterviewStep>(&query)
            .bind(input.interview_flow_id)
            .bind(&input.name)
            .bind(input.order_index)
            .fetch_one(pool)
            .await
    }

    /// Find a step by its internal ID, regardless of flow.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<InterviewStep>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM interview_steps WHERE id = $1");
        sqlx::query_as::<_, InterviewStep>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the steps of a flow, ordered by order_index, then id.
    pub async fn list_by_flow(
        pool: &PgPool,
        interview_flow_id: DbId,
    ) -> Result<Vec<InterviewStep>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM interview_steps \
             WHERE interview_flow_id = $1 \
             ORDER BY order_index, id"
        );
        sqlx::query_as::<_, InterviewStep>(&query)
            .bind(interview_flow_id)
            .fetch_all(pool)
            .await
    }
}
