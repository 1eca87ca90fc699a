//! Row models and DTOs, one module per table group.

pub mod application;
pub mod candidate;
pub mod interview;
pub mod interview_flow;
pub mod position;
