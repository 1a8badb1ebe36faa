use std::time::Duration;

use log::warn;

use crate::controllers::interactive::events::compute_event::{ComputeEvent, ComputeEventKind};
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::render_field;
use crate::core::data::iteration_field::IterationField;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::data::stripe::Stripe;
use crate::core::palette::palette::Palette;

/// Where the displayed generation has got to.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayState {
    /// Waiting for the first event of the expected generation.
    Pending,
    Preview,
    Refining,
    Finished { elapsed: Duration },
    Failed { message: String },
}

/// The consumer's full-canvas field, fed only by the expected generation.
///
/// Events from any other generation are ignored. The preview is upscaled
/// with nearest-neighbour sampling; stripes overwrite their rows whole.
#[derive(Debug, Clone)]
pub struct DisplayBuffer {
    generation: Option<u64>,
    field: IterationField,
    progress: u8,
    state: DisplayState,
}

impl DisplayBuffer {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            generation: None,
            field: IterationField::unescaped(width, height),
            progress: 0,
            state: DisplayState::Pending,
        }
    }

    /// Starts accepting events of `generation` only. The current contents
    /// stay visible until its preview arrives, unless the canvas size changed.
    pub fn start_generation(&mut self, generation: u64, width: u32, height: u32) {
        if self.field.width() != width || self.field.height() != height {
            self.field = IterationField::unescaped(width, height);
        }

        self.generation = Some(generation);
        self.progress = 0;
        self.state = DisplayState::Pending;
    }

    /// Applies `event` if it belongs to the expected generation; returns
    /// whether it was applied.
    pub fn apply(&mut self, event: &ComputeEvent) -> bool {
        if self.generation != Some(event.generation) {
            return false;
        }

        match &event.kind {
            ComputeEventKind::Preview(preview) => {
                self.upscale_preview(preview);
                self.state = DisplayState::Preview;
            }
            ComputeEventKind::Progress(percent) => {
                self.progress = self.progress.max(*percent);
            }
            ComputeEventKind::StripeReady(stripe) => {
                if !self.copy_stripe(stripe) {
                    return false;
                }
                self.state = DisplayState::Refining;
            }
            ComputeEventKind::Finished { elapsed } => {
                self.progress = 100;
                self.state = DisplayState::Finished { elapsed: *elapsed };
            }
            ComputeEventKind::Error { message } => {
                self.state = DisplayState::Failed {
                    message: message.clone(),
                };
            }
        }

        true
    }

    #[must_use]
    pub fn generation(&self) -> Option<u64> {
        self.generation
    }

    #[must_use]
    pub fn field(&self) -> &IterationField {
        &self.field
    }

    #[must_use]
    pub fn progress(&self) -> u8 {
        self.progress
    }

    #[must_use]
    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self.state, DisplayState::Finished { .. })
    }

    pub fn render(&self, palette: &Palette) -> Result<PixelBuffer, PixelBufferError> {
        render_field(&self.field, palette)
    }

    fn upscale_preview(&mut self, preview: &IterationField) {
        let (width, height) = (self.field.width(), self.field.height());
        let (preview_width, preview_height) = (preview.width(), preview.height());

        if preview_width == 0 || preview_height == 0 {
            return;
        }

        for y in 0..height {
            let source_y = (u64::from(y) * u64::from(preview_height) / u64::from(height)) as u32;
            let Some(source_row) = preview.row(source_y.min(preview_height - 1)) else {
                continue;
            };
            let target = self.field.rows_mut(y, y + 1);

            for (x, value) in target.iter_mut().enumerate() {
                let source_x = (x as u64 * u64::from(preview_width) / u64::from(width)) as usize;
                *value = source_row[source_x.min(source_row.len() - 1)];
            }
        }
    }

    fn copy_stripe(&mut self, stripe: &Stripe) -> bool {
        let fits = stripe.field().width() == self.field.width()
            && stripe.y_end() <= self.field.height()
            && stripe.y_start() <= stripe.y_end();

        if !fits {
            warn!(
                "discarding stripe {}..{} of width {} for a {}x{} canvas",
                stripe.y_start(),
                stripe.y_end(),
                stripe.field().width(),
                self.field.width(),
                self.field.height()
            );
            return false;
        }

        self.field
            .rows_mut(stripe.y_start(), stripe.y_end())
            .copy_from_slice(stripe.field().values());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::stripe::RowRange;
    use crate::core::fractals::escape_time::UNESCAPED;

    fn event(generation: u64, kind: ComputeEventKind) -> ComputeEvent {
        ComputeEvent { generation, kind }
    }

    fn stripe(y_start: u32, y_end: u32, width: u32, value: i32) -> Stripe {
        let rows = RowRange { y_start, y_end };
        let values = vec![value; (width * rows.len()) as usize];
        Stripe::new(rows, IterationField::from_values(width, rows.len(), values).unwrap())
    }

    #[test]
    fn test_ignores_other_generations() {
        let mut display = DisplayBuffer::new(4, 4);
        display.start_generation(2, 4, 4);

        assert!(!display.apply(&event(1, ComputeEventKind::Progress(50))));
        assert!(!display.apply(&event(3, ComputeEventKind::StripeReady(stripe(0, 2, 4, 9)))));
        assert_eq!(display.progress(), 0);
        assert!(display.field().values().iter().all(|&v| v == UNESCAPED));
    }

    #[test]
    fn test_ignores_everything_before_first_generation() {
        let mut display = DisplayBuffer::new(2, 2);

        assert!(!display.apply(&event(1, ComputeEventKind::Progress(10))));
        assert_eq!(display.generation(), None);
    }

    #[test]
    fn test_preview_is_upscaled_nearest_neighbour() {
        let mut display = DisplayBuffer::new(4, 4);
        display.start_generation(1, 4, 4);
        let preview = IterationField::from_values(2, 2, vec![1, 2, 3, 4]).unwrap();

        assert!(display.apply(&event(1, ComputeEventKind::Preview(preview))));

        assert_eq!(
            display.field().values(),
            &[1, 1, 2, 2, 1, 1, 2, 2, 3, 3, 4, 4, 3, 3, 4, 4]
        );
        assert_eq!(display.state(), &DisplayState::Preview);
    }

    #[test]
    fn test_preview_of_uneven_size_fills_canvas() {
        let mut display = DisplayBuffer::new(5, 3);
        display.start_generation(1, 5, 3);
        let preview = IterationField::from_values(1, 1, vec![7]).unwrap();

        display.apply(&event(1, ComputeEventKind::Preview(preview)));

        assert!(display.field().values().iter().all(|&v| v == 7));
    }

    #[test]
    fn test_stripes_overwrite_their_rows() {
        let mut display = DisplayBuffer::new(3, 4);
        display.start_generation(1, 3, 4);

        display.apply(&event(1, ComputeEventKind::StripeReady(stripe(2, 4, 3, 5))));

        assert_eq!(display.field().row(1), Some(&[UNESCAPED; 3][..]));
        assert_eq!(display.field().row(2), Some(&[5, 5, 5][..]));
        assert_eq!(display.field().row(3), Some(&[5, 5, 5][..]));
        assert_eq!(display.state(), &DisplayState::Refining);
    }

    #[test]
    fn test_mismatched_stripe_is_rejected() {
        let mut display = DisplayBuffer::new(3, 4);
        display.start_generation(1, 3, 4);

        assert!(!display.apply(&event(1, ComputeEventKind::StripeReady(stripe(0, 2, 5, 1)))));
        assert!(!display.apply(&event(1, ComputeEventKind::StripeReady(stripe(3, 5, 3, 1)))));
    }

    #[test]
    fn test_error_leaves_field_untouched() {
        let mut display = DisplayBuffer::new(2, 2);
        display.start_generation(1, 2, 2);
        display.apply(&event(1, ComputeEventKind::StripeReady(stripe(0, 2, 2, 3))));
        let before = display.field().clone();

        display.apply(&event(
            1,
            ComputeEventKind::Error {
                message: "boom".to_owned(),
            },
        ));

        assert_eq!(display.field(), &before);
        assert_eq!(
            display.state(),
            &DisplayState::Failed {
                message: "boom".to_owned()
            }
        );
    }

    #[test]
    fn test_finished_records_elapsed_and_full_progress() {
        let mut display = DisplayBuffer::new(2, 2);
        display.start_generation(4, 2, 2);
        display.apply(&event(4, ComputeEventKind::Progress(55)));
        display.apply(&event(
            4,
            ComputeEventKind::Finished {
                elapsed: Duration::from_millis(12),
            },
        ));

        assert!(display.is_finished());
        assert_eq!(display.progress(), 100);
    }

    #[test]
    fn test_new_generation_resets_on_resize_only() {
        let mut display = DisplayBuffer::new(2, 2);
        display.start_generation(1, 2, 2);
        display.apply(&event(1, ComputeEventKind::StripeReady(stripe(0, 2, 2, 8))));

        display.start_generation(2, 2, 2);
        assert_eq!(display.field().get(0, 0), Some(8));

        display.start_generation(3, 4, 2);
        assert_eq!(display.field().width(), 4);
        assert_eq!(display.field().get(0, 0), Some(UNESCAPED));
    }

    #[test]
    fn test_render_uses_palette() {
        let mut display = DisplayBuffer::new(1, 1);
        display.start_generation(1, 1, 1);
        display.apply(&event(1, ComputeEventKind::StripeReady(stripe(0, 1, 1, 0))));
        let palette = Palette::default();

        let buffer = display.render(&palette).unwrap();

        assert_eq!(buffer.pixel(0, 0), Ok(palette.colour(0)));
    }
}
