//! Repository for the `interviews` table.

use hireflow_core::types::DbId;
use sqlx::PgPool;

use crate::models::interview::{CreateInterview, Interview, InterviewScore};

const COLUMNS: &str =
    "id, application_id, interview_step_id, interview_date, result, score, notes";

/// Provides access to interviews. Interviews are read-only to the pipeline;
/// `create` exists for onboarding flows and fixtures.
pub struct InterviewRepo;

impl InterviewRepo {
    /// Insert a new interview, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateInterview) -> Result<Interview, sqlx::Error> {
        let query = format!(
            "INSERT INTO interviews \
                (application_id, interview_step_id, interview_date, result, score, notes) \
             VALUES ($1, $2, COALESCE($3, NOW()), $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Interview>(&query)
            .bind(input.application_id)
            .bind(input.interview_step_id)
            .bind(input.interview_date)
            .bind(&input.result)
            .bind(input.score)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// Scores of every scored interview on the given applications.
    ///
    /// Interviews with a NULL score are excluded.
    pub async fn list_scores_for_applications(
        pool: &PgPool,
        application_ids: &[DbId],
    ) -> Result<Vec<InterviewScore>, sqlx::Error> {
        if application_ids.is_empty() {
            return Ok(Vec::new());
        }
        sqlx::query_as::<_, InterviewScore>(
            "SELECT application_id, score FROM interviews \
             WHERE application_id = ANY($1) AND score IS NOT NULL \
             ORDER BY application_id, id",
        )
        .bind(application_ids)
        .fetch_all(pool)
        .await
    }
}
