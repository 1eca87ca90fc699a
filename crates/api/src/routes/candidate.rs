//! Route definitions for candidates.

use axum::routing::put;
use axum::Router;

use crate::handlers::candidate;
use crate::state::AppState;

/// Routes mounted at `/candidates`.
///
/// ```text
/// PUT /{id}/stage   -> update_stage
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{id}/stage", put(candidate::update_stage))
}
