use hireflow_core::naming::full_name;
use hireflow_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `candidates` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Candidate {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub created_at: Timestamp,
}

impl Candidate {
    pub fn full_name(&self) -> String {
        full_name(&self.first_name, &self.last_name)
    }
}

/// DTO for creating a new candidate.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCandidate {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}
