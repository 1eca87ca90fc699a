use std::sync::Arc;

use hireflow_db::PipelineStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: both fields are behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Store handle, PostgreSQL in production and in-memory in tests.
    pub store: Arc<dyn PipelineStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
