//! Domain logic for the candidate pipeline.
//!
//! Nothing in this crate touches the database. Functions here operate on
//! values already loaded by the caller so they can be tested in isolation.

pub mod error;
pub mod naming;
pub mod scoring;
pub mod transition;
pub mod types;
