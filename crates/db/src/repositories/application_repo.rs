//! Repository for the `applications` table.

use hireflow_core::types::DbId;
use sqlx::PgPool;

use crate::models::application::{
    Application, ApplicationBoardRow, CreateApplication, LatestApplication,
};

const COLUMNS: &str =
    "id, position_id, candidate_id, application_date, current_interview_step, notes";

/// Provides access to applications and the joined views the pipeline reads.
pub struct ApplicationRepo;

impl ApplicationRepo {
    /// Insert a new application, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateApplication,
    ) -> Result<Application, sqlx::Error> {
        let query = format!(
            "INSERT INTO applications \
                (position_id, candidate_id, application_date, current_interview_step, notes) \
             VALUES ($1, $2, COALESCE($3, NOW()), $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Application>(&query)
            .bind(input.position_id)
            .bind(input.candidate_id)
            .bind(input.application_date)
            .bind(input.current_interview_step)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// Find an application by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Application>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM applications WHERE id = $1");
        sqlx::query_as::<_, Application>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Every application for a position, joined to candidate and current step.
    ///
    /// Ordered by application id (storage order).
    pub async fn list_board_rows(
        pool: &PgPool,
        position_id: DbId,
    ) -> Result<Vec<ApplicationBoardRow>, sqlx::Error> {
        sqlx::query_as::<_, ApplicationBoardRow>(
            "SELECT a.id AS application_id, c.id AS candidate_id, \
                    c.first_name, c.last_name, \
                    a.current_interview_step, s.name AS current_interview_step_name \
             FROM applications a \
             JOIN candidates c ON c.id = a.candidate_id \
             JOIN interview_steps s ON s.id = a.current_interview_step \
             WHERE a.position_id = $1 \
             ORDER BY a.id",
        )
        .bind(position_id)
        .fetch_all(pool)
        .await
    }

    /// The candidate's most recent application.
    ///
    /// Latest by `application_date`; ties go to the highest id.
    pub async fn find_latest_for_candidate(
        pool: &PgPool,
        candidate_id: DbId,
    ) -> Result<Option<LatestApplication>, sqlx::Error> {
        sqlx::query_as::<_, LatestApplication>(
            "SELECT a.id AS application_id, a.application_date, \
                    p.id AS position_id, p.title AS position_title, p.interview_flow_id, \
                    a.current_interview_step, s.name AS current_interview_step_name \
             FROM applications a \
             JOIN positions p ON p.id = a.position_id \
             JOIN interview_steps s ON s.id = a.current_interview_step \
             WHERE a.candidate_id = $1 \
             ORDER BY a.application_date DESC, a.id DESC \
             LIMIT 1",
        )
        .bind(candidate_id)
        .fetch_optional(pool)
        .await
    }

    /// Move an application to `new_step_id` only if it still sits in
    /// `expected_step_id`.
    ///
    /// Returns `false` when the row was not updated, either because the
    /// application does not exist or because a concurrent write moved it.
    pub async fn update_current_step(
        pool: &PgPool,
        application_id: DbId,
        expected_step_id: DbId,
        new_step_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE applications SET current_interview_step = $3 \
             WHERE id = $1 AND current_interview_step = $2",
        )
        .bind(application_id)
        .bind(expected_step_id)
        .bind(new_step_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
