//! Route definitions for positions.

use axum::routing::get;
use axum::Router;

use crate::handlers::position;
use crate::state::AppState;

/// Routes mounted at `/positions`.
///
/// ```text
/// GET /{id}/candidates       -> list_candidates
/// GET /{id}/interview-flow   -> interview_flow
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{id}/candidates", get(position::list_candidates))
        .route("/{id}/interview-flow", get(position::interview_flow))
}
