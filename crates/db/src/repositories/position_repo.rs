//! Repository for the `positions` table.

use hireflow_core::types::DbId;
use sqlx::PgPool;

use crate::models::position::{CreatePosition, Position};

const COLUMNS: &str = "id, title, interview_flow_id, status, created_at";

/// Provides access to positions.
pub struct PositionRepo;

impl PositionRepo {
    /// Insert a new position, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreatePosition) -> Result<Position, sqlx::Error> {
        let query = format!(
            "INSERT INTO positions (title, interview_flow_id, status) \
             VALUES ($1, $2, COALESCE($3, 'Open')) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Position>(&query)
            .bind(&input.title)
            .bind(input.interview_flow_id)
            .bind(&input.status)
            .fetch_one(pool)
            .await
    }

    /// Find a position by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Position>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM positions WHERE id = $1");
        sqlx::query_as::<_, Position>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
