use thiserror::Error;

use crate::core::data::validation::ValidationError;

#[derive(Debug, Error)]
pub enum CoordinatorError {
    #[error("invalid compute request: {0}")]
    Invalid(#[from] ValidationError),
    #[error("coordinator has been shut down")]
    ShutDown,
    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
    #[error("failed to spawn coordinator thread: {0}")]
    Spawn(#[from] std::io::Error),
}
