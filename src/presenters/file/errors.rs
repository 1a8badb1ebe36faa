use std::path::PathBuf;

use image::ImageFormat;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("cannot tell an image format from {}", .path.display())]
    UnknownFormat { path: PathBuf },
    #[error("{0:?} is not an export format")]
    UnsupportedFormat(ImageFormat),
    #[error("pixel data does not fill a {width}x{height} image")]
    BufferMismatch { width: u32, height: u32 },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Image(#[from] image::ImageError),
}
