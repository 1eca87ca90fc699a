//! Stage Transition: move a candidate's latest application to another stage.
//!
//! The read of the current stage and the write of the new one are tied
//! together by a conditional update: the write only lands if the
//! application still sits in the stage that was read. A lost race re-reads
//! and re-plans, so the before/after pair in every response is the one that
//! was actually applied.

use hireflow_core::error::{CoreError, Entity};
use hireflow_core::transition::{
    already_in_stage_message, conflict_message, plan_transition, stage_updated_message,
    TransitionPlan, TransitionPolicy, MAX_TRANSITION_ATTEMPTS,
};
use hireflow_core::types::DbId;
use hireflow_db::PipelineStore;
use serde::Serialize;

use crate::error::PipelineError;

/// Response of a stage transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransitionResult {
    pub success: bool,
    pub message: String,
    pub data: TransitionData,
}

/// Payload of a transition. The field set depends on whether a write
/// happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TransitionData {
    #[serde(rename_all = "camelCase")]
    AlreadyInStage {
        candidate_id: DbId,
        candidate_name: String,
        current_stage_id: DbId,
        current_stage_name: String,
        position_id: DbId,
        position_title: String,
    },
    #[serde(rename_all = "camelCase")]
    Moved {
        candidate_id: DbId,
        candidate_name: String,
        previous_stage_id: DbId,
        previous_stage_name: String,
        new_stage_id: DbId,
        new_stage_name: String,
        position_id: DbId,
        position_title: String,
    },
}

impl TransitionData {
    pub fn changed(&self) -> bool {
        matches!(self, Self::Moved { .. })
    }
}

/// Move the candidate's most recent application to `target_stage_id`.
///
/// Checks, in order: the candidate exists, the target stage exists, the
/// candidate has an application. When the application is already in the
/// target stage nothing is written.
pub async fn move_candidate_to_stage(
    store: &dyn PipelineStore,
    candidate_id: DbId,
    target_stage_id: DbId,
    policy: TransitionPolicy,
) -> Result<TransitionResult, PipelineError> {
    let candidate = store
        .find_candidate(candidate_id)
        .await?
        .ok_or(CoreError::not_found(Entity::Candidate, candidate_id))?;

    let target = store
        .find_interview_step(target_stage_id)
        .await?
        .ok_or(CoreError::not_found(Entity::InterviewStep, target_stage_id))?;

    let candidate_name = candidate.full_name();

    for attempt in 1..=MAX_TRANSITION_ATTEMPTS {
        let application = store
            .find_latest_application(candidate_id)
            .await?
            .ok_or(CoreError::not_found(Entity::Application, candidate_id))?;

        policy.check_target(target.id, target.interview_flow_id, application.interview_flow_id)?;

        match plan_transition(application.current_interview_step, target.id) {
            TransitionPlan::AlreadyInStage { step_id } => {
                tracing::debug!(candidate_id, step_id, "Candidate already in target stage");
                return Ok(TransitionResult {
                    success: true,
                    message: already_in_stage_message(&target.name),
                    data: TransitionData::AlreadyInStage {
                        candidate_id,
                        candidate_name,
                        current_stage_id: step_id,
                        current_stage_name: target.name,
                        position_id: application.position_id,
                        position_title: application.position_title,
                    },
                });
            }
            TransitionPlan::Move { from, to } => {
                let applied = store
                    .update_current_step(application.application_id, from, to)
                    .await?;

                if applied {
                    tracing::info!(
                        candidate_id,
                        application_id = application.application_id,
                        from,
                        to,
                        "Candidate stage updated"
                    );
                    return Ok(TransitionResult {
                        success: true,
                        message: stage_updated_message(
                            &application.current_interview_step_name,
                            &target.name,
                        ),
                        data: TransitionData::Moved {
                            candidate_id,
                            candidate_name,
                            previous_stage_id: from,
                            previous_stage_name: application.current_interview_step_name,
                            new_stage_id: to,
                            new_stage_name: target.name,
                            position_id: application.position_id,
                            position_title: application.position_title,
                        },
                    });
                }

                tracing::warn!(
                    candidate_id,
                    application_id = application.application_id,
                    attempt,
                    "Application stage changed concurrently, re-reading"
                );
            }
        }
    }

    Err(CoreError::Conflict(conflict_message(candidate_id)).into())
}
