//! Pipeline Query: the per-position candidate board.

use std::collections::HashMap;

use hireflow_core::error::{CoreError, Entity};
use hireflow_core::naming::full_name;
use hireflow_core::scoring::average_score;
use hireflow_core::types::DbId;
use hireflow_db::PipelineStore;
use serde::{Serialize, Serializer};

use crate::error::PipelineError;

/// One candidate card on the board.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateSummary {
    pub candidate_id: DbId,
    pub full_name: String,
    pub current_interview_step: DbId,
    pub current_interview_step_name: String,
    /// Mean of the scored interviews across every stage of the application.
    /// `None` (serialized as `null`) when nothing has been scored yet.
    #[serde(serialize_with = "serialize_score")]
    pub average_score: Option<f64>,
    pub application_id: DbId,
}

/// Whole means go out as JSON integers (`8`, not `8.0`).
fn serialize_score<S>(score: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match *score {
        Some(value) if value.is_finite() && value.fract() == 0.0 => {
            serializer.serialize_i64(value as i64)
        }
        Some(value) => serializer.serialize_f64(value),
        None => serializer.serialize_none(),
    }
}

/// Summary line for the board's `meta.message`.
pub fn candidates_found_message(total: usize) -> String {
    if total == 0 {
        "No candidates found in process for this position".to_string()
    } else {
        format!("Found {total} candidate(s) in process")
    }
}

/// List every candidate with an application for the position.
///
/// Rows come back in the store's order, one per application. An existing
/// position with no applications yields an empty list.
pub async fn list_candidates_in_process(
    store: &dyn PipelineStore,
    position_id: DbId,
) -> Result<Vec<CandidateSummary>, PipelineError> {
    store
        .find_position(position_id)
        .await?
        .ok_or(CoreError::not_found(Entity::Position, position_id))?;

    let rows = store.list_position_applications(position_id).await?;
    if rows.is_empty() {
        tracing::debug!(position_id, "No applications for position");
        return Ok(Vec::new());
    }

    let application_ids: Vec<DbId> = rows.iter().map(|row| row.application_id).collect();
    let mut scores: HashMap<DbId, Vec<Option<i32>>> = HashMap::new();
    for interview in store.list_scored_interviews(&application_ids).await? {
        scores
            .entry(interview.application_id)
            .or_default()
            .push(Some(interview.score));
    }

    let summaries: Vec<CandidateSummary> = rows
        .into_iter()
        .map(|row| CandidateSummary {
            candidate_id: row.candidate_id,
            full_name: full_name(&row.first_name, &row.last_name),
            current_interview_step: row.current_interview_step,
            current_interview_step_name: row.current_interview_step_name,
            average_score: scores
                .remove(&row.application_id)
                .and_then(average_score),
            application_id: row.application_id,
        })
        .collect();

    tracing::debug!(position_id, total = summaries.len(), "Listed candidates in process");
    Ok(summaries)
}
