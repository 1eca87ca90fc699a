use async_trait::async_trait;
use hireflow_core::types::DbId;

use super::{PipelineStore, StoreError};
use crate::models::application::{ApplicationBoardRow, LatestApplication};
use crate::models::candidate::Candidate;
use crate::models::interview::InterviewScore;
use crate::models::interview_flow::InterviewStep;
use crate::models::position::Position;
use crate::repositories::{
    ApplicationRepo, CandidateRepo, InterviewRepo, InterviewStepRepo, PositionRepo,
};
use crate::DbPool;

/// [`PipelineStore`] backed by a PostgreSQL pool.
#[derive(Clone)]
pub struct PgPipelineStore {
    pool: DbPool,
}

impl PgPipelineStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Close the pool, waiting for checked-out connections to return.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl PipelineStore for PgPipelineStore {
    async fn health_check(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }

    async fn find_position(&self, id: DbId) -> Result<Option<Position>, StoreError> {
        Ok(PositionRepo::find_by_id(&self.pool, id).await?)
    }

    async fn find_candidate(&self, id: DbId) -> Result<Option<Candidate>, StoreError> {
        Ok(CandidateRepo::find_by_id(&self.pool, id).await?)
    }

    async fn find_interview_step(&self, id: DbId) -> Result<Option<InterviewStep>, StoreError> {
        Ok(InterviewStepRepo::find_by_id(&self.pool, id).await?)
    }

    async fn list_interview_steps(
        &self,
        interview_flow_id: DbId,
    ) -> Result<Vec<InterviewStep>, StoreError> {
        Ok(InterviewStepRepo::list_by_flow(&self.pool, interview_flow_id).await?)
    }

    async fn list_position_applications(
        &self,
        position_id: DbId,
    ) -> Result<Vec<ApplicationBoardRow>, StoreError> {
        Ok(ApplicationRepo::list_board_rows(&self.pool, position_id).await?)
    }

    async fn list_scored_interviews(
        &self,
        application_ids: &[DbId],
    ) -> Result<Vec<InterviewScore>, StoreError> {
        Ok(InterviewRepo::list_scores_for_applications(&self.pool, application_ids).await?)
    }

    async fn find_latest_application(
        &self,
        candidate_id: DbId,
    ) -> Result<Option<LatestApplication>, StoreError> {
        Ok(ApplicationRepo::find_latest_for_candidate(&self.pool, candidate_id).await?)
    }

    async fn update_current_step(
        &self,
        application_id: DbId,
        expected_step_id: DbId,
        new_step_id: DbId,
    ) -> Result<bool, StoreError> {
        Ok(
            ApplicationRepo::update_current_step(
                &self.pool,
                application_id,
                expected_step_id,
                new_step_id,
            )
            .await?,
        )
    }
}
