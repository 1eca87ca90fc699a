//! Seeding helpers for tests against the in-memory store.

use chrono::{Duration, Utc};
use hireflow_core::types::DbId;
use hireflow_db::models::application::{Application, CreateApplication};
use hireflow_db::models::candidate::{Candidate, CreateCandidate};
use hireflow_db::models::interview::CreateInterview;
use hireflow_db::models::interview_flow::{
    CreateInterviewFlow, CreateInterviewStep, InterviewFlow, InterviewStep,
};
use hireflow_db::models::position::{CreatePosition, Position};
use hireflow_db::InMemoryPipelineStore;

pub(crate) fn flow(
    store: &InMemoryPipelineStore,
    steps: &[&str],
) -> (InterviewFlow, Vec<InterviewStep>) {
    let flow = store
        .insert_interview_flow(&CreateInterviewFlow {
            description: "Standard development process".to_string(),
        })
        .unwrap();
    let steps = steps
        .iter()
        .enumerate()
        .map(|(i, name)| {
            store
                .insert_interview_step(&CreateInterviewStep {
                    interview_flow_id: flow.id,
                    name: (*name).to_string(),
                    order_index: i as i32 + 1,
                })
                .unwrap()
        })
        .collect();
    (flow, steps)
}

pub(crate) fn position(store: &InMemoryPipelineStore, flow_id: DbId, title: &str) -> Position {
    store
        .insert_position(&CreatePosition {
            title: title.to_string(),
            interview_flow_id: flow_id,
            status: None,
        })
        .unwrap()
}

pub(crate) fn candidate(store: &InMemoryPipelineStore, first: &str, last: &str) -> Candidate {
    store
        .insert_candidate(&CreateCandidate {
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase()),
        })
        .unwrap()
}

/// Application dated `days_ago` days in the past.
pub(crate) fn application(
    store: &InMemoryPipelineStore,
    position_id: DbId,
    candidate_id: DbId,
    step_id: DbId,
    days_ago: i64,
) -> Application {
    store
        .insert_application(&CreateApplication {
            position_id,
            candidate_id,
            application_date: Some(Utc::now() - Duration::days(days_ago)),
            current_interview_step: step_id,
            notes: None,
        })
        .unwrap()
}

pub(crate) fn interview(
    store: &InMemoryPipelineStore,
    application_id: DbId,
    step_id: DbId,
    score: Option<i32>,
) {
    store
        .insert_interview(&CreateInterview {
            application_id,
            interview_step_id: step_id,
            interview_date: None,
            result: score.map(|_| "Passed".to_string()),
            score,
            notes: None,
        })
        .unwrap();
}
