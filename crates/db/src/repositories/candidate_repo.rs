//! Repository for the `candidates` table.

use hireflow_core::types::DbId;
use sqlx::PgPool;

use crate::models::candidate::{Candidate, CreateCandidate};

const COLUMNS: &str = "id, first_name, last_name, email, created_at";

/// Provides access to candidates.
pub struct CandidateRepo;

impl CandidateRepo {
    /// Insert a new candidate, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateCandidate) -> Result<Candidate, sqlx::Error> {
        let query = format!(
            "INSERT INTO candidates (first_name, last_name, email) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Candidate>(&query)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .fetch_one(pool)
            .await
    }

    /// Find a candidate by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Candidate>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM candidates WHERE id = $1");
        sqlx::query_as::<_, Candidate>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
