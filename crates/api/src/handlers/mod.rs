pub mod candidate;
pub mod position;

use hireflow_core::types::DbId;

use crate::error::{AppError, AppResult};

/// Parse a raw path segment as an entity id.
///
/// Ids are validated here so a malformed id never reaches the pipeline.
fn parse_path_id(raw: &str, label: &str) -> AppResult<DbId> {
    raw.trim()
        .parse::<DbId>()
        .map_err(|_| AppError::BadRequest(format!("{label} ID must be a valid number")))
}
