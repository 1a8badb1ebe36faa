use thiserror::Error;

use crate::controllers::interactive::errors::coordinator_error::CoordinatorError;
use crate::core::data::validation::ValidationError;
use crate::core::presets::errors::PresetError;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Coordinator(#[from] CoordinatorError),
    #[error(transparent)]
    Preset(#[from] PresetError),
}
