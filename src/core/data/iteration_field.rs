use thiserror::Error;

use crate::core::fractals::escape_time::UNESCAPED;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IterationFieldError {
    #[error("field of {width}x{height} needs {expected} values, got {actual}")]
    SizeMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

/// Row-major escape iteration counts, one per pixel.
///
/// Values are escape indices (`>= 0`) or [`UNESCAPED`]. A field is never
/// modified after it has been produced; consumers copy out of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IterationField {
    width: u32,
    height: u32,
    values: Vec<i32>,
}

impl IterationField {
    pub fn from_values(width: u32, height: u32, values: Vec<i32>) -> Result<Self, IterationFieldError> {
        let expected = width as usize * height as usize;

        if values.len() != expected {
            return Err(IterationFieldError::SizeMismatch {
                width,
                height,
                expected,
                actual: values.len(),
            });
        }

        Ok(Self {
            width,
            height,
            values,
        })
    }

    /// For generators whose output is `width * height` values by construction.
    pub(crate) fn from_generated(width: u32, height: u32, values: Vec<i32>) -> Self {
        debug_assert_eq!(values.len(), width as usize * height as usize);

        Self {
            width,
            height,
            values,
        }
    }

    /// A field where every pixel holds the sentinel.
    #[must_use]
    pub fn unescaped(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            values: vec![UNESCAPED; width as usize * height as usize],
        }
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
    pub fn values(&self) -> &[i32] {
        &self.values
    }

    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> Option<i32> {
        if x >= self.width || y >= self.height {
            return None;
        }

        self.values
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    #[must_use]
    pub fn row(&self, y: u32) -> Option<&[i32]> {
        if y >= self.height {
            return None;
        }

        let start = y as usize * self.width as usize;
        self.values.get(start..start + self.width as usize)
    }

    pub(crate) fn rows_mut(&mut self, y_start: u32, y_end: u32) -> &mut [i32] {
        let width = self.width as usize;
        &mut self.values[y_start as usize * width..y_end as usize * width]
    }
}
