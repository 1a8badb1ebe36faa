use crate::core::data::colour::Colour;
use thiserror::Error;

fn buffer_size(width: u32, height: u32) -> usize {
    width as usize * height as usize * 3
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PixelBufferError {
    #[error("pixel at x:{x}, y:{y} outside of {width}x{height} buffer")]
    PixelOutsideBounds { x: u32, y: u32, width: u32, height: u32 },
    #[error("expected {expected} bytes for the buffer dimensions, got {actual}")]
    BoundsMismatch { expected: usize, actual: usize },
}

pub type PixelBufferData = Vec<u8>;

/// Packed 8-bit RGB raster, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            buffer: vec![0; buffer_size(width, height)],
        }
    }

    pub fn from_data(width: u32, height: u32, buffer: PixelBufferData) -> Result<Self, PixelBufferError> {
        let expected = buffer_size(width, height);

        if expected != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                expected,
                actual: buffer.len(),
            });
        }

        Ok(Self {
            width,
            height,
            buffer,
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    #[must_use]
    pub fn into_data(self) -> PixelBufferData {
        self.buffer
    }

    pub fn pixel(&self, x: u32, y: u32) -> Result<Colour, PixelBufferError> {
        let index = self.index(x, y)?;

        Ok(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, colour: Colour) -> Result<(), PixelBufferError> {
        let index = self.index(x, y)?;

        self.buffer[index] = colour.r;
        self.buffer[index + 1] = colour.g;
        self.buffer[index + 2] = colour.b;

        Ok(())
    }

    fn index(&self, x: u32, y: u32) -> Result<usize, PixelBufferError> {
        if x >= self.width || y >= self.height {
            return Err(PixelBufferError::PixelOutsideBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }

        Ok((y as usize * self.width as usize + x as usize) * 3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_creates_zeroed_buffer() {
        let buffer = PixelBuffer::new(10, 10);

        assert_eq!(buffer.buffer().len(), 300); // 10 * 10 * 3
        assert!(buffer.buffer().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_from_data_valid() {
        let data: Vec<u8> = vec![
            255, 0, 0, // pixel (0,0) - red
            0, 255, 0, // pixel (1,0) - green
            0, 0, 255, // pixel (0,1) - blue
            255, 255, 0, // pixel (1,1) - yellow
        ];
        let buffer = PixelBuffer::from_data(2, 2, data.clone()).unwrap();

        assert_eq!(buffer.buffer(), &data[..]);
        assert_eq!(buffer.pixel(0, 1).unwrap(), Colour::new(0, 0, 255));
    }

    #[test]
    fn test_from_data_buffer_too_small() {
        let result = PixelBuffer::from_data(2, 2, vec![255, 0, 0]);

        assert_eq!(
            result.unwrap_err(),
            PixelBufferError::BoundsMismatch {
                expected: 12,
                actual: 3
            }
        );
    }

    #[test]
    fn test_set_pixel_writes_rgb_triplet() {
        let mut buffer = PixelBuffer::new(3, 2);
        buffer.set_pixel(2, 1, Colour::new(1, 2, 3)).unwrap();

        assert_eq!(&buffer.buffer()[15..18], &[1, 2, 3]);
    }

    #[test]
    fn test_set_pixel_outside_bounds() {
        let mut buffer = PixelBuffer::new(3, 2);

        assert_eq!(
            buffer.set_pixel(3, 0, Colour::WHITE),
            Err(PixelBufferError::PixelOutsideBounds {
                x: 3,
                y: 0,
                width: 3,
                height: 2
            })
        );
    }
}
