use log::warn;
use pixels::{Pixels, SurfaceTexture};
use winit::window::Window;

use crate::core::data::pixel_buffer::PixelBuffer;
use crate::presenters::pixels::frame::{clear_frame, fill_rgba_frame};

/// Draws rasters into a window through a `pixels` framebuffer sized 1:1 with
/// the window's physical size.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    width: u32,
    height: u32,
}

impl PixelsPresenter {
    pub fn new(window: &'static Window) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let mut pixels = Pixels::new(size.width, size.height, surface_texture)?;
        clear_frame(pixels.frame_mut());

        Ok(Self {
            pixels,
            width: size.width,
            height: size.height,
        })
    }

    #[must_use]
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError> {
        if width == 0 || height == 0 {
            return Ok(());
        }

        self.pixels.resize_surface(width, height)?;
        self.pixels.resize_buffer(width, height)?;
        self.width = width;
        self.height = height;
        clear_frame(self.pixels.frame_mut());

        Ok(())
    }

    /// Copies `buffer` into the framebuffer if it matches the current size.
    pub fn draw(&mut self, buffer: &PixelBuffer) {
        if !fill_rgba_frame(buffer, self.pixels.frame_mut()) {
            warn!(
                "skipping {}x{} raster for a {}x{} frame",
                buffer.width(),
                buffer.height(),
                self.width,
                self.height
            );
        }
    }

    pub fn render(&self) -> Result<(), pixels::Error> {
        self.pixels.render()
    }
}
