use crate::core::data::iteration_field::IterationField;

/// Half-open row range `[y_start, y_end)` of a canvas.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RowRange {
    pub y_start: u32,
    pub y_end: u32,
}

impl RowRange {
    #[must_use]
    pub fn len(&self) -> u32 {
        self.y_end - self.y_start
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.y_end <= self.y_start
    }
}

/// A computed horizontal band of the full-resolution canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stripe {
    rows: RowRange,
    field: IterationField,
}

impl Stripe {
    pub(crate) fn new(rows: RowRange, field: IterationField) -> Self {
        debug_assert_eq!(rows.len(), field.height(), "stripe rows must match field height");
        Self { rows, field }
    }

    #[must_use]
    pub fn rows(&self) -> RowRange {
        self.rows
    }

    #[must_use]
    pub fn y_start(&self) -> u32 {
        self.rows.y_start
    }

    #[must_use]
    pub fn y_end(&self) -> u32 {
        self.rows.y_end
    }

    #[must_use]
    pub fn field(&self) -> &IterationField {
        &self.field
    }
}
