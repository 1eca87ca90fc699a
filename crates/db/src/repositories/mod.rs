//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument.

pub mod application_repo;
pub mod candidate_repo;
pub mod interview_flow_repo;
pub mod interview_repo;
pub mod interview_step_repo;
pub mod position_repo;

pub use application_repo::ApplicationRepo;
pub use candidate_repo::CandidateRepo;
pub use interview_flow_repo::InterviewFlowRepo;
pub use interview_repo::InterviewRepo;
pub use interview_step_repo::InterviewStepRepo;
pub use position_repo::PositionRepo;
