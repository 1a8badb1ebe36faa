use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;
use crate::core::data::stripe::RowRange;

/// Row-major serial evaluation of `rows` across the algorithm's full width.
#[allow(dead_code)]
pub fn generate_rows<Alg: FractalAlgorithm>(
    algorithm: &Alg,
    rows: RowRange,
) -> Result<Vec<Alg::Success>, Alg::Failure> {
    let width = algorithm.width();

    (rows.y_start..rows.y_end)
        .flat_map(|y| (0..width).map(move |x| Point { x, y }))
        .map(|pixel| algorithm.compute(pixel))
        .collect()
}

#[allow(dead_code)]
pub fn generate_fractal<Alg: FractalAlgorithm>(algorithm: &Alg) -> Result<Vec<Alg::Success>, Alg::Failure> {
    generate_rows(
        algorithm,
        RowRange {
            y_start: 0,
            y_end: algorithm.height(),
        },
    )
}
