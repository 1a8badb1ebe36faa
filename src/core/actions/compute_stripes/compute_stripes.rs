use log::trace;

use crate::core::actions::cancellation::{CancelToken, Cancelled};
use crate::core::actions::generate_fractal::generate_fractal_rayon::{
    GenerateFractalError, generate_rows_rayon_cancelable,
};
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::config::compute_settings::ComputeSettings;
use crate::core::data::iteration_field::IterationField;
use crate::core::data::stripe::{RowRange, Stripe};
use crate::core::data::view_state::ViewState;
use crate::core::util::calculate_stripes::{calculate_stripes, stripe_progress};

/// One unit of progressive output, in the order it is produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StripeOutput {
    Preview(IterationField),
    Progress(u8),
    Stripe(Stripe),
}

/// Computes `view` progressively: a reduced preview first, then full-resolution
/// stripes in ascending row order, each followed by a progress report.
///
/// `build` produces the algorithm for a given view; it is called once for the
/// preview canvas and once for the full canvas. The token is polled before the
/// preview, before every stripe and inside every row. Once it is set nothing
/// more is emitted and [`GenerateFractalError::Cancelled`] is returned.
pub fn compute_stripes<Alg, B, C, E>(
    view: &ViewState,
    build: B,
    settings: &ComputeSettings,
    cancel: &C,
    mut emit: E,
) -> Result<(), GenerateFractalError<Alg::Failure>>
where
    Alg: FractalAlgorithm<Success = i32> + Sync,
    Alg::Failure: Send,
    B: Fn(ViewState) -> Alg,
    C: CancelToken,
    E: FnMut(StripeOutput),
{
    let preview_weight = settings.preview_weight();

    if cancel.is_cancelled() {
        return Err(Cancelled.into());
    }

    let preview_view = view.scaled_down(settings.preview_factor().get());
    let preview = compute_field(&build(preview_view), cancel)?;

    trace!("preview {}x{} ready", preview.width(), preview.height());
    emit(StripeOutput::Preview(preview));
    emit(StripeOutput::Progress(preview_weight));

    let algorithm = build(*view);
    let stripes = calculate_stripes(view.canvas_height(), settings.stripe_height());
    let total = stripes.len();

    for (i, rows) in stripes.into_iter().enumerate() {
        if cancel.is_cancelled() {
            return Err(Cancelled.into());
        }

        let values = generate_rows_rayon_cancelable(&algorithm, rows, cancel)?;
        let field = IterationField::from_generated(view.canvas_width(), rows.len(), values);

        emit(StripeOutput::Stripe(Stripe::new(rows, field)));
        emit(StripeOutput::Progress(stripe_progress(
            preview_weight,
            i + 1,
            total,
        )));
    }

    Ok(())
}

fn compute_field<Alg, C>(
    algorithm: &Alg,
    cancel: &C,
) -> Result<IterationField, GenerateFractalError<Alg::Failure>>
where
    Alg: FractalAlgorithm<Success = i32> + Sync,
    Alg::Failure: Send,
    C: CancelToken,
{
    let rows = RowRange {
        y_start: 0,
        y_end: algorithm.height(),
    };
    let values = generate_rows_rayon_cancelable(algorithm, rows, cancel)?;

    Ok(IterationField::from_generated(
        algorithm.width(),
        algorithm.height(),
        values,
    ))
}
