use hireflow_core::error::CoreError;
use hireflow_db::StoreError;

/// Error raised by a pipeline operation.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
