//! Candidate pipeline operations.
//!
//! Every operation takes the store handle explicitly. None of them holds
//! state between calls, so they are safe to run concurrently from any
//! number of request handlers.

pub mod board;
pub mod error;
pub mod flow;
pub mod transition;

#[cfg(test)]
mod fixtures;

pub use board::{candidates_found_message, list_candidates_in_process, CandidateSummary};
pub use error::PipelineError;
pub use flow::{interview_flow, FlowStep, PositionFlow};
pub use transition::{move_candidate_to_stage, TransitionData, TransitionResult};
