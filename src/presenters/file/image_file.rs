use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::pnm::{PnmEncoder, PnmSubtype, SampleEncoding};
use image::{ExtendedColorType, ImageEncoder, ImageFormat, RgbImage};
use log::info;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::presenters::file::errors::ExportError;

pub const EXPORT_FORMATS: [ImageFormat; 4] = [
    ImageFormat::Png,
    ImageFormat::Jpeg,
    ImageFormat::Bmp,
    ImageFormat::Pnm,
];

/// Saves rasters with the format picked from the file extension.
#[derive(Debug, Default, Clone, Copy)]
pub struct ImageFilePresenter {}

impl ImageFilePresenter {
    pub fn new() -> Self {
        Self {}
    }

    pub fn format_for(filepath: &Path) -> Result<ImageFormat, ExportError> {
        let format = ImageFormat::from_path(filepath).map_err(|_| ExportError::UnknownFormat {
            path: filepath.to_path_buf(),
        })?;

        if !EXPORT_FORMATS.contains(&format) {
            return Err(ExportError::UnsupportedFormat(format));
        }

        Ok(format)
    }

    /// `Pnm` alone would pick the PAM subtype, so `.ppm` is encoded as a
    /// binary pixmap explicitly.
    fn write_pixmap(image: &RgbImage, filepath: &Path) -> Result<(), ExportError> {
        let writer = BufWriter::new(File::create(filepath)?);
        let encoder = PnmEncoder::new(writer).with_subtype(PnmSubtype::Pixmap(SampleEncoding::Binary));

        encoder.write_image(image.as_raw(), image.width(), image.height(), ExtendedColorType::Rgb8)?;
        Ok(())
    }
}

impl FilePresenterPort for ImageFilePresenter {
    type Error = ExportError;

    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> Result<(), Self::Error> {
        let format = Self::format_for(filepath)?;
        let (width, height) = (buffer.width(), buffer.height());

        let image = RgbImage::from_raw(width, height, buffer.buffer().to_vec())
            .ok_or(ExportError::BufferMismatch { width, height })?;
        match format {
            ImageFormat::Pnm => Self::write_pixmap(&image, filepath)?,
            _ => image.save_with_format(filepath, format)?,
        }

        info!("wrote {}x{} {:?} image to {}", width, height, format, filepath.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;

    fn checkerboard() -> PixelBuffer {
        let mut buffer = PixelBuffer::new(3, 2);
        for y in 0..2 {
            for x in 0..3 {
                let colour = if (x + y) % 2 == 0 {
                    Colour::new(255, 0, 0)
                } else {
                    Colour::new(0, 0, 255)
                };
                buffer.set_pixel(x, y, colour).unwrap();
            }
        }
        buffer
    }

    #[test]
    fn test_png_round_trips_pixels() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("view.png");

        ImageFilePresenter::new().present(&checkerboard(), &path).unwrap();

        let written = image::open(&path).unwrap().to_rgb8();
        assert_eq!(written.dimensions(), (3, 2));
        assert_eq!(written.get_pixel(0, 0).0, [255, 0, 0]);
        assert_eq!(written.get_pixel(1, 0).0, [0, 0, 255]);
    }

    #[test]
    fn test_ppm_is_binary_pixmap() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("view.ppm");

        ImageFilePresenter::new().present(&checkerboard(), &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"P6"));
        assert!(bytes.ends_with(checkerboard().buffer()));
    }

    #[test]
    fn test_ppm_reads_back_with_same_pixels() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("view.ppm");

        ImageFilePresenter::new().present(&checkerboard(), &path).unwrap();

        let written = image::open(&path).unwrap().to_rgb8();
        assert_eq!(written.dimensions(), (3, 2));
        assert_eq!(written.as_raw().as_slice(), checkerboard().buffer());
    }

    #[test]
    fn test_format_follows_extension() {
        assert_eq!(
            ImageFilePresenter::format_for(Path::new("a.JPG")).unwrap(),
            ImageFormat::Jpeg
        );
        assert_eq!(
            ImageFilePresenter::format_for(Path::new("a.bmp")).unwrap(),
            ImageFormat::Bmp
        );
    }

    #[test]
    fn test_unknown_extension_is_rejected_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("view.xyz");

        let result = ImageFilePresenter::new().present(&checkerboard(), &path);

        assert!(matches!(result, Err(ExportError::UnknownFormat { .. })));
        assert!(!path.exists());
    }

    #[test]
    fn test_format_outside_export_set_is_rejected() {
        let result = ImageFilePresenter::format_for(Path::new("a.gif"));

        assert!(matches!(result, Err(ExportError::UnsupportedFormat(ImageFormat::Gif))));
    }
}
