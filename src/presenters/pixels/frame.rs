use crate::core::data::pixel_buffer::PixelBuffer;

/// Copies an RGB raster into an RGBA frame of the same dimensions with full
/// alpha. Returns false, leaving `frame` untouched, when the sizes disagree.
pub fn fill_rgba_frame(buffer: &PixelBuffer, frame: &mut [u8]) -> bool {
    let pixels = buffer.width() as usize * buffer.height() as usize;
    if frame.len() != pixels * 4 {
        return false;
    }

    for (rgb, rgba) in buffer.buffer().chunks_exact(3).zip(frame.chunks_exact_mut(4)) {
        rgba[..3].copy_from_slice(rgb);
        rgba[3] = u8::MAX;
    }

    true
}

pub fn clear_frame(frame: &mut [u8]) {
    for rgba in frame.chunks_exact_mut(4) {
        rgba.copy_from_slice(&[0, 0, 0, u8::MAX]);
    }
}
