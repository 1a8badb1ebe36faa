use std::convert::Infallible;

use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::escape_time::UNESCAPED;
use crate::core::palette::colour_scheme_kinds::ColourSchemeKind;
use crate::core::palette::errors::PaletteError;
use crate::core::palette::schemes::scheme_colour;

pub const PALETTE_SIZE: usize = 256;

/// Colour of pixels that never escaped.
pub const INTERIOR_COLOUR: Colour = Colour::new(127, 127, 127);

/// Lookup table from escape index to colour, cycling every 256 iterations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    entries: [Colour; PALETTE_SIZE],
}

impl Default for Palette {
    fn default() -> Self {
        Self::from_scheme(ColourSchemeKind::default())
    }
}

impl Palette {
    #[must_use]
    pub fn from_scheme(kind: ColourSchemeKind) -> Self {
        Self {
            entries: std::array::from_fn(|i| scheme_colour(kind, i as u8)),
        }
    }

    /// Linear ramp through `anchors`. Each of the `N - 1` segments gets
    /// `256 / (N - 1)` entries and any leftover entries take the last anchor.
    /// Fewer than two anchors gives the default scheme.
    #[must_use]
    pub fn custom(anchors: &[Colour]) -> Self {
        if anchors.len() < 2 {
            return Self::default();
        }

        let steps_per_segment = PALETTE_SIZE / (anchors.len() - 1);
        let mut entries = [anchors[anchors.len() - 1]; PALETTE_SIZE];
        let mut index = 0;

        for pair in anchors.windows(2) {
            let (start, end) = (pair[0], pair[1]);

            for step in 0..steps_per_segment {
                let t = step as f64 / steps_per_segment as f64;
                entries[index] = Colour::new(
                    lerp(start.r, end.r, t),
                    lerp(start.g, end.g, t),
                    lerp(start.b, end.b, t),
                );
                index += 1;
            }
        }

        Self { entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[Colour; PALETTE_SIZE] {
        &self.entries
    }

    #[inline]
    #[must_use]
    pub fn colour(&self, iteration: i32) -> Colour {
        if iteration == UNESCAPED {
            return INTERIOR_COLOUR;
        }

        self.entries[iteration.rem_euclid(PALETTE_SIZE as i32) as usize]
    }
}

impl ColourMap for Palette {
    type T = i32;
    type Failure = Infallible;

    fn map(&self, value: i32) -> Result<Colour, Self::Failure> {
        Ok(self.colour(value))
    }
}

fn lerp(start: u8, end: u8, t: f64) -> u8 {
    (f64::from(start) + (f64::from(end) - f64::from(start)) * t) as u8
}

/// Parses `#rrggbb` (the leading `#` is optional).
pub fn parse_hex_colour(text: &str) -> Result<Colour, PaletteError> {
    let invalid = || PaletteError::InvalidColour(text.to_owned());
    let digits = text.trim().trim_start_matches('#');

    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16).map_err(|_| invalid())
    };

    Ok(Colour::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}
