use thiserror::Error;

use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::iteration_field::IterationField;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferData, PixelBufferError};
use crate::core::palette::palette::Palette;

#[derive(Debug, Error)]
pub enum GeneratePixelBufferError<E> {
    #[error("colour map error: {0}")]
    ColourMap(#[source] E),
    #[error(transparent)]
    PixelBuffer(#[from] PixelBufferError),
}

/// Maps every value of `field` through `mapper` into a packed RGB buffer of
/// the same dimensions.
pub fn generate_pixel_buffer<CMap>(
    field: &IterationField,
    mapper: &CMap,
) -> Result<PixelBuffer, GeneratePixelBufferError<CMap::Failure>>
where
    CMap: ColourMap<T = i32>,
{
    let mut buffer: PixelBufferData = Vec::with_capacity(field.values().len() * 3);

    for &value in field.values() {
        let Colour { r, g, b } = mapper
            .map(value)
            .map_err(GeneratePixelBufferError::ColourMap)?;

        buffer.extend_from_slice(&[r, g, b]);
    }

    Ok(PixelBuffer::from_data(field.width(), field.height(), buffer)?)
}

/// Colours a field with a palette, which cannot fail to map.
pub fn render_field(field: &IterationField, palette: &Palette) -> Result<PixelBuffer, PixelBufferError> {
    generate_pixel_buffer(field, palette).map_err(|e| match e {
        GeneratePixelBufferError::PixelBuffer(err) => err,
        GeneratePixelBufferError::ColourMap(never) => match never {},
    })
}
