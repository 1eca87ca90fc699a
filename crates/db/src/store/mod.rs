//! Store access for the pipeline operations.
//!
//! [`PipelineStore`] is the handle the pipeline operations receive. It is
//! constructed once at startup, shared as `Arc<dyn PipelineStore>`, and
//! dropped at shutdown. Two implementations exist:
//!
//! - [`PgPipelineStore`]: PostgreSQL through the repositories.
//! - [`InMemoryPipelineStore`]: mutex-guarded maps, used as a test double.

use async_trait::async_trait;
use hireflow_core::types::DbId;

use crate::models::application::{ApplicationBoardRow, LatestApplication};
use crate::models::candidate::Candidate;
use crate::models::interview::InterviewScore;
use crate::models::interview_flow::InterviewStep;
use crate::models::position::Position;

mod memory;
mod postgres;

pub use memory::InMemoryPipelineStore;
pub use postgres::PgPipelineStore;

/// Failure of the underlying store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Reads and the single conditional write the pipeline needs.
#[async_trait]
pub trait PipelineStore: Send + Sync {
    /// Round-trip probe used by the health endpoint.
    async fn health_check(&self) -> Result<(), StoreError>;

    async fn find_position(&self, id: DbId) -> Result<Option<Position>, StoreError>;

    async fn find_candidate(&self, id: DbId) -> Result<Option<Candidate>, StoreError>;

    async fn find_interview_step(&self, id: DbId) -> Result<Option<InterviewStep>, StoreError>;

    /// Steps of a flow ordered by `order_index`, then id.
    async fn list_interview_steps(
        &self,
        interview_flow_id: DbId,
    ) -> Result<Vec<InterviewStep>, StoreError>;

    /// One row per application for the position, in storage order.
    async fn list_position_applications(
        &self,
        position_id: DbId,
    ) -> Result<Vec<ApplicationBoardRow>, StoreError>;

    /// Scores of the scored interviews on the given applications.
    async fn list_scored_interviews(
        &self,
        application_ids: &[DbId],
    ) -> Result<Vec<InterviewScore>, StoreError>;

    /// The candidate's application with the latest date, highest id on ties.
    async fn find_latest_application(
        &self,
        candidate_id: DbId,
    ) -> Result<Option<LatestApplication>, StoreError>;

    /// Set the application's current step to `new_step_id` if and only if it
    /// is still `expected_step_id`. Returns whether the row changed.
    async fn update_current_step(
        &self,
        application_id: DbId,
        expected_step_id: DbId,
        new_step_id: DbId,
    ) -> Result<bool, StoreError>;
}
