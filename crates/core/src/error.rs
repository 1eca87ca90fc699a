use std::fmt;

use crate::types::DbId;

/// Entities the pipeline operations look up by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Position,
    Candidate,
    InterviewStep,
    /// Looked up through the owning candidate, so the id is a candidate id.
    Application,
}

impl Entity {
    /// Human-readable message for a failed lookup of this entity.
    pub fn not_found_message(&self, id: &DbId) -> String {
        match self {
            Self::Position => format!("Position with ID {id} not found"),
            Self::Candidate => format!("Candidate with ID {id} not found"),
            Self::InterviewStep => format!("Interview step with ID {id} not found"),
            Self::Application => format!("No application found for candidate with ID {id}"),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Position => "position",
            Self::Candidate => "candidate",
            Self::InterviewStep => "interview_step",
            Self::Application => "application",
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{}", .entity.not_found_message(.id))]
    NotFound { entity: Entity, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),
}

impl CoreError {
    pub fn not_found(entity: Entity, id: DbId) -> Self {
        Self::NotFound { entity, id }
    }
}
