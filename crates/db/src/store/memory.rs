use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;
use hireflow_core::types::DbId;

use super::{PipelineStore, StoreError};
use crate::models::application::{
    Application, ApplicationBoardRow, CreateApplication, LatestApplication,
};
use crate::models::candidate::{Candidate, CreateCandidate};
use crate::models::interview::{CreateInterview, Interview, InterviewScore};
use crate::models::interview_flow::{
    CreateInterviewFlow, CreateInterviewStep, InterviewFlow, InterviewStep,
};
use crate::models::position::{CreatePosition, Position};

#[derive(Default)]
struct Tables {
    next_id: DbId,
    flows: BTreeMap<DbId, InterviewFlow>,
    steps: BTreeMap<DbId, InterviewStep>,
    positions: BTreeMap<DbId, Position>,
    candidates: BTreeMap<DbId, Candidate>,
    applications: BTreeMap<DbId, Application>,
    interviews: BTreeMap<DbId, Interview>,
}

impl Tables {
    fn allocate_id(&mut self) -> DbId {
        self.next_id += 1;
        self.next_id
    }
}

/// [`PipelineStore`] held entirely in memory.
///
/// Rows live in id-ordered maps behind one mutex, so reads see storage
/// order and the conditional step update is atomic with respect to other
/// calls. Joins drop rows whose references are missing, as an inner join
/// would. Cloning shares the underlying tables.
#[derive(Default, Clone)]
pub struct InMemoryPipelineStore {
    tables: Arc<Mutex<Tables>>,
    offline: Arc<AtomicBool>,
}

impl InMemoryPipelineStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail with [`StoreError::Unavailable`].
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::Release);
    }

    fn lock(&self) -> Result<MutexGuard<'_, Tables>, StoreError> {
        if self.offline.load(Ordering::Acquire) {
            return Err(StoreError::Unavailable("in-memory store is offline".into()));
        }
        self.tables
            .lock()
            .map_err(|_| StoreError::Unavailable("in-memory store lock poisoned".into()))
    }

    // -- Seeding ------------------------------------------------------------

    pub fn insert_interview_flow(
        &self,
        input: &CreateInterviewFlow,
    ) -> Result<InterviewFlow, StoreError> {
        let mut tables = self.lock()?;
        let flow = InterviewFlow {
            id: tables.allocate_id(),
            description: input.description.clone(),
            created_at: Utc::now(),
        };
        tables.flows.insert(flow.id, flow.clone());
        Ok(flow)
    }

    pub fn insert_interview_step(
        &self,
        input: &CreateInterviewStep,
    ) -> Result<InterviewStep, StoreError> {
        let mut tables = self.lock()?;
        let step = InterviewStep {
            id: tables.allocate_id(),
            interview_flow_id: input.interview_flow_id,
            name: input.name.clone(),
            order_index: input.order_index,
        };
        tables.steps.insert(step.id, step.clone());
        Ok(step)
    }

    pub fn insert_position(&self, input: &CreatePosition) -> Result<Position, StoreError> {
        let mut tables = self.lock()?;
        let position = Position {
            id: tables.allocate_id(),
            title: input.title.clone(),
            interview_flow_id: input.interview_flow_id,
            status: input.status.clone().unwrap_or_else(|| "Open".to_string()),
            created_at: Utc::now(),
        };
        tables.positions.insert(position.id, position.clone());
        Ok(position)
    }

    pub fn insert_candidate(&self, input: &CreateCandidate) -> Result<Candidate, StoreError> {
        let mut tables = self.lock()?;
        let candidate = Candidate {
            id: tables.allocate_id(),
            first_name: input.first_name.clone(),
            last_name: input.last_name.clone(),
            email: input.email.clone(),
            created_at: Utc::now(),
        };
        tables.candidates.insert(candidate.id, candidate.clone());
        Ok(candidate)
    }

    pub fn insert_application(
        &self,
        input: &CreateApplication,
    ) -> Result<Application, StoreError> {
        let mut tables = self.lock()?;
        let application = Application {
            id: tables.allocate_id(),
            position_id: input.position_id,
            candidate_id: input.candidate_id,
            application_date: input.application_date.unwrap_or_else(Utc::now),
            current_interview_step: input.current_interview_step,
            notes: input.notes.clone(),
        };
        tables.applications.insert(application.id, application.clone());
        Ok(application)
    }

    pub fn insert_interview(&self, input: &CreateInterview) -> Result<Interview, StoreError> {
        let mut tables = self.lock()?;
        let interview = Interview {
            id: tables.allocate_id(),
            application_id: input.application_id,
            interview_step_id: input.interview_step_id,
            interview_date: input.interview_date.unwrap_or_else(Utc::now),
            result: input.result.clone(),
            score: input.score,
            notes: input.notes.clone(),
        };
        tables.interviews.insert(interview.id, interview.clone());
        Ok(interview)
    }

    /// Read back a stored application, for assertions.
    pub fn application(&self, id: DbId) -> Result<Option<Application>, StoreError> {
        Ok(self.lock()?.applications.get(&id).cloned())
    }
}

#[async_trait]
impl PipelineStore for InMemoryPipelineStore {
    async fn health_check(&self) -> Result<(), StoreError> {
        self.lock().map(|_| ())
    }

    async fn find_position(&self, id: DbId) -> Result<Option<Position>, StoreError> {
        Ok(self.lock()?.positions.get(&id).cloned())
    }

    async fn find_candidate(&self, id: DbId) -> Result<Option<Candidate>, StoreError> {
        Ok(self.lock()?.candidates.get(&id).cloned())
    }

    async fn find_interview_step(&self, id: DbId) -> Result<Option<InterviewStep>, StoreError> {
        Ok(self.lock()?.steps.get(&id).cloned())
    }

    async fn list_interview_steps(
        &self,
        interview_flow_id: DbId,
    ) -> Result<Vec<InterviewStep>, StoreError> {
        let tables = self.lock()?;
        let mut steps: Vec<InterviewStep> = tables
            .steps
            .values()
            .filter(|step| step.interview_flow_id == interview_flow_id)
            .cloned()
            .collect();
        steps.sort_by_key(|step| (step.order_index, step.id));
        Ok(steps)
    }

    async fn list_position_applications(
        &self,
        position_id: DbId,
    ) -> Result<Vec<ApplicationBoardRow>, StoreError> {
        let tables = self.lock()?;
        let rows = tables
            .applications
            .values()
            .filter(|application| application.position_id == position_id)
            .filter_map(|application| {
                let candidate = tables.candidates.get(&application.candidate_id)?;
                let step = tables.steps.get(&application.current_interview_step)?;
                Some(ApplicationBoardRow {
                    application_id: application.id,
                    candidate_id: candidate.id,
                    first_name: candidate.first_name.clone(),
                    last_name: candidate.last_name.clone(),
                    current_interview_step: step.id,
                    current_interview_step_name: step.name.clone(),
                })
            })
            .collect();
        Ok(rows)
    }

    async fn list_scored_interviews(
        &self,
        application_ids: &[DbId],
    ) -> Result<Vec<InterviewScore>, StoreError> {
        let tables = self.lock()?;
        let scores = tables
            .interviews
            .values()
            .filter(|interview| application_ids.contains(&interview.application_id))
            .filter_map(|interview| {
                interview.score.map(|score| InterviewScore {
                    application_id: interview.application_id,
                    score,
                })
            })
            .collect();
        Ok(scores)
    }

    async fn find_latest_application(
        &self,
        candidate_id: DbId,
    ) -> Result<Option<LatestApplication>, StoreError> {
        let tables = self.lock()?;
        let latest = tables
            .applications
            .values()
            .filter(|application| application.candidate_id == candidate_id)
            .filter_map(|application| {
                let position = tables.positions.get(&application.position_id)?;
                let step = tables.steps.get(&application.current_interview_step)?;
                Some(LatestApplication {
                    application_id: application.id,
                    application_date: application.application_date,
                    position_id: position.id,
                    position_title: position.title.clone(),
                    interview_flow_id: position.interview_flow_id,
                    current_interview_step: step.id,
                    current_interview_step_name: step.name.clone(),
                })
            })
            .max_by_key(|latest| (latest.application_date, latest.application_id));
        Ok(latest)
    }

    async fn update_current_step(
        &self,
        application_id: DbId,
        expected_step_id: DbId,
        new_step_id: DbId,
    ) -> Result<bool, StoreError> {
        let mut tables = self.lock()?;
        match tables.applications.get_mut(&application_id) {
            Some(application) if application.current_interview_step == expected_step_id => {
                application.current_interview_step = new_step_id;
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
