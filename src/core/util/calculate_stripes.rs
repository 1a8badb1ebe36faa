use crate::core::data::stripe::RowRange;
use std::num::NonZeroU32;

/// Splits `height` rows into consecutive stripes of `stripe_height` rows in
/// ascending order. The last stripe takes whatever rows remain.
#[must_use]
pub fn calculate_stripes(height: u32, stripe_height: NonZeroU32) -> Vec<RowRange> {
    let stripe_height = stripe_height.get();

    (0..height.div_ceil(stripe_height))
        .map(|i| {
            let y_start = i * stripe_height;
            RowRange {
                y_start,
                y_end: y_start.saturating_add(stripe_height).min(height),
            }
        })
        .collect()
}

/// Percentage reported after `completed` of `total` stripes, given the share
/// already credited to the preview.
#[must_use]
pub fn stripe_progress(preview_weight: u8, completed: usize, total: usize) -> u8 {
    let preview_weight = preview_weight.min(100);

    if total == 0 {
        return 100;
    }

    let remaining = u64::from(100 - preview_weight);
    let done = remaining * completed.min(total) as u64 / total as u64;

    preview_weight + done as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn height(rows: u32) -> NonZeroU32 {
        NonZeroU32::new(rows).unwrap()
    }

    #[test]
    fn test_exact_multiple_gives_equal_stripes() {
        let stripes = calculate_stripes(100, height(50));

        assert_eq!(
            stripes,
            vec![
                RowRange { y_start: 0, y_end: 50 },
                RowRange { y_start: 50, y_end: 100 },
            ]
        );
    }

    #[test]
    fn test_last_stripe_takes_remainder() {
        let stripes = calculate_stripes(120, height(50));

        assert_eq!(stripes.len(), 3);
        assert_eq!(stripes[2], RowRange { y_start: 100, y_end: 120 });
    }

    #[test]
    fn test_short_canvas_is_one_stripe() {
        let stripes = calculate_stripes(7, height(50));

        assert_eq!(stripes, vec![RowRange { y_start: 0, y_end: 7 }]);
    }

    #[test]
    fn test_stripes_cover_every_row_once() {
        for rows in [1, 2, 49, 50, 51, 599, 600, 1081] {
            let stripes = calculate_stripes(rows, height(50));
            let mut next = 0;

            for stripe in &stripes {
                assert_eq!(stripe.y_start, next);
                assert!(!stripe.is_empty());
                next = stripe.y_end;
            }

            assert_eq!(next, rows);
        }
    }

    #[test]
    fn test_progress_formula() {
        assert_eq!(stripe_progress(10, 0, 12), 10);
        assert_eq!(stripe_progress(10, 1, 12), 17); // 10 + floor(90 / 12)
        assert_eq!(stripe_progress(10, 11, 12), 92);
        assert_eq!(stripe_progress(10, 12, 12), 100);
    }

    #[test]
    fn test_progress_reaches_100_only_on_last_stripe() {
        for total in 1..200 {
            let mut previous = stripe_progress(10, 0, total);

            for completed in 1..=total {
                let progress = stripe_progress(10, completed, total);

                assert!(progress >= previous);
                assert_eq!(progress == 100, completed == total, "total {}", total);
                previous = progress;
            }
        }
    }
}
