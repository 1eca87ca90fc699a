//! Stage transition planning and policy.
//!
//! A transition is planned against the candidate's latest application as
//! loaded by the caller. Planning is pure: it decides whether a write is
//! needed and validates the target against the configured policy, but the
//! write itself happens in the store layer.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// How many times a transition re-reads the application after losing a
/// conditional write to a concurrent transition.
pub const MAX_TRANSITION_ATTEMPTS: u32 = 3;

pub const POLICY_PERMISSIVE: &str = "permissive";
pub const POLICY_FLOW_ONLY: &str = "flow_only";

/// All valid transition policy names.
pub const VALID_POLICIES: &[&str] = &[POLICY_PERMISSIVE, POLICY_FLOW_ONLY];

// ---------------------------------------------------------------------------
// Policy
// ---------------------------------------------------------------------------

/// Which target stages a transition accepts.
///
/// The order index is never enforced: forward and backward moves are both
/// allowed under every policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionPolicy {
    /// Any existing stage is accepted, including stages from another flow.
    #[default]
    Permissive,
    /// The target stage must belong to the position's interview flow.
    FlowOnly,
}

impl TransitionPolicy {
    pub fn from_str_value(s: &str) -> Result<Self, String> {
        match s.trim().to_ascii_lowercase().as_str() {
            POLICY_PERMISSIVE => Ok(Self::Permissive),
            POLICY_FLOW_ONLY => Ok(Self::FlowOnly),
            other => Err(format!(
                "Invalid transition policy '{other}'. Must be one of: {}",
                VALID_POLICIES.join(", ")
            )),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Permissive => POLICY_PERMISSIVE,
            Self::FlowOnly => POLICY_FLOW_ONLY,
        }
    }

    /// Check the target stage's flow against the position's flow.
    pub fn check_target(
        &self,
        target_step_id: DbId,
        target_flow_id: DbId,
        position_flow_id: DbId,
    ) -> Result<(), CoreError> {
        match self {
            Self::Permissive => Ok(()),
            Self::FlowOnly if target_flow_id == position_flow_id => Ok(()),
            Self::FlowOnly => Err(CoreError::Validation(format!(
                "Interview step {target_step_id} does not belong to interview flow \
                 {position_flow_id} of the candidate's position"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Planning
// ---------------------------------------------------------------------------

/// Outcome of comparing the application's current stage with the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPlan {
    /// The application already sits in the target stage; nothing is written.
    AlreadyInStage { step_id: DbId },
    /// The application moves from `from` to `to`.
    Move { from: DbId, to: DbId },
}

impl TransitionPlan {
    pub fn requires_write(&self) -> bool {
        matches!(self, Self::Move { .. })
    }
}

pub fn plan_transition(current_step_id: DbId, target_step_id: DbId) -> TransitionPlan {
    if current_step_id == target_step_id {
        TransitionPlan::AlreadyInStage {
            step_id: target_step_id,
        }
    } else {
        TransitionPlan::Move {
            from: current_step_id,
            to: target_step_id,
        }
    }
}

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

pub fn already_in_stage_message(stage_name: &str) -> String {
    format!("Candidate is already in stage \"{stage_name}\"")
}

pub fn stage_updated_message(previous_stage_name: &str, new_stage_name: &str) -> String {
    format!(
        "Candidate stage updated successfully from \"{previous_stage_name}\" \
         to \"{new_stage_name}\""
    )
}

pub fn conflict_message(candidate_id: DbId) -> String {
    format!(
        "Stage of candidate {candidate_id} kept changing concurrently; \
         gave up after {MAX_TRANSITION_ATTEMPTS} attempts"
    )
}
