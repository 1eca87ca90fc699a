pub mod candidate;
pub mod health;
pub mod position;

use axum::Router;

use crate::state::AppState;

/// Build the pipeline route tree, mounted at the root.
///
/// ```text
/// /positions/{id}/candidates          candidate board (GET)
/// /positions/{id}/interview-flow      ordered stages of the position (GET)
/// /candidates/{id}/stage              move to another stage (PUT)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/positions", position::router())
        .nest("/candidates", candidate::router())
}
