use rayon::prelude::*;
use thiserror::Error;

use crate::core::actions::cancellation::{
    CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled, NeverCancel,
};
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;
use crate::core::data::stripe::RowRange;

/// Separates cancellation from algorithm failure so callers can treat the
/// former as ordinary control flow.
#[derive(Debug, Error)]
pub enum GenerateFractalError<E> {
    #[error(transparent)]
    Cancelled(#[from] Cancelled),
    #[error("algorithm error: {0}")]
    Algorithm(#[source] E),
}

/// Evaluates the whole canvas in parallel.
#[allow(dead_code)]
pub fn generate_fractal_rayon<Alg>(algorithm: &Alg) -> Result<Vec<Alg::Success>, Alg::Failure>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send,
{
    let rows = RowRange {
        y_start: 0,
        y_end: algorithm.height(),
    };

    generate_rows_rayon_cancelable(algorithm, rows, &NeverCancel).map_err(|e| match e {
        GenerateFractalError::Algorithm(alg_err) => alg_err,
        GenerateFractalError::Cancelled(_) => {
            unreachable!("NeverCancel token should never signal cancellation")
        }
    })
}

/// Evaluates `rows` in parallel, one rayon task per row.
///
/// The token is polled at the start of every row and every
/// [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels within it. Results are row-major,
/// identical to the serial generator regardless of thread count.
pub fn generate_rows_rayon_cancelable<Alg, C>(
    algorithm: &Alg,
    rows: RowRange,
    cancel: &C,
) -> Result<Vec<Alg::Success>, GenerateFractalError<Alg::Failure>>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send,
    C: CancelToken,
{
    let width = algorithm.width();

    let computed: Result<Vec<Vec<Alg::Success>>, GenerateFractalError<Alg::Failure>> = (rows
        .y_start..rows.y_end)
        .into_par_iter()
        .map(|y| {
            let mut row = Vec::with_capacity(width as usize);

            for (i, x) in (0..width).enumerate() {
                if i % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
                    return Err(GenerateFractalError::Cancelled(Cancelled));
                }

                let result = algorithm
                    .compute(Point { x, y })
                    .map_err(GenerateFractalError::Algorithm)?;
                row.push(result);
            }

            Ok(row)
        })
        .collect();

    computed.map(|r| r.into_iter().flatten().collect())
}
