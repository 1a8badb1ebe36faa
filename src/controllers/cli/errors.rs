use thiserror::Error;

use crate::controllers::interactive::errors::coordinator_error::CoordinatorError;
use crate::core::data::pixel_buffer::PixelBufferError;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Coordinator(#[from] CoordinatorError),
    #[error("generation {generation} failed: {message}")]
    Failed { generation: u64, message: String },
    #[error("coordinator stopped before generation {generation} finished")]
    Disconnected { generation: u64 },
    #[error(transparent)]
    PixelBuffer(#[from] PixelBufferError),
}
