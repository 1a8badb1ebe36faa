use thiserror::Error;

use crate::controllers::interactive::errors::session_error::SessionError;

#[derive(Debug, Error)]
pub enum GuiError {
    #[error("event loop failed: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("could not open a window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("framebuffer error: {0}")]
    Pixels(#[from] pixels::Error),
    #[error("framebuffer resize failed: {0}")]
    Texture(#[from] pixels::TextureError),
    #[error(transparent)]
    Session(#[from] SessionError),
}
