// Copyright 2026 the Metra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-category stacking for stacked bars and areas.

extern crate alloc;

use alloc::vec::Vec;

use crate::series::SeriesFrame;

/// Running totals for stacked rendering.
///
/// `cumulative[s][i]` is the sum of series `0..=s` at category `i`, so each
/// stacked segment spans from `cumulative[s - 1][i]` (or `0` for the first
/// series) up to `cumulative[s][i]`. `totals` is the last cumulative row and
/// feeds the scale-domain calculation.
#[derive(Clone, Debug, Default)]
pub struct StackFrame {
    /// Sum over all series per category.
    pub totals: Vec<f64>,
    /// Cumulative partial sums, one row per series.
    pub cumulative: Vec<Vec<f64>>,
}

/// Computes per-category running totals for an aligned frame.
pub fn stack(frame: &SeriesFrame) -> StackFrame {
    let n = frame.len();
    let mut totals = alloc::vec![0.0; n];
    let mut cumulative = Vec::with_capacity(frame.series().len());

    for (s, _) in frame.series().iter().enumerate() {
        let mut row = alloc::vec![0.0; n];
        for (i, (out, total)) in row.iter_mut().zip(totals.iter_mut()).enumerate() {
            *total += frame.value(s, i);
            *out = *total;
        }
        cumulative.push(row);
    }

    StackFrame { totals, cumulative }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;
    use crate::series::Series;

    #[test]
    fn cumulative_rows_are_partial_sums() {
        let frame = SeriesFrame::align(
            vec![
                Series::new("a", vec![1.0, 2.0]),
                Series::new("b", vec![3.0, 4.0]),
            ],
            vec![],
        );
        let stacked = stack(&frame);
        assert_eq!(stacked.totals, vec![4.0, 6.0]);
        assert_eq!(stacked.cumulative, vec![vec![1.0, 2.0], vec![4.0, 6.0]]);
    }

    #[test]
    fn totals_equal_sum_over_series_per_category() {
        let frame = SeriesFrame::align(
            vec![
                Series::new("a", vec![5.0, 0.0, 2.5]),
                Series::new("b", vec![1.0, 1.0, 1.0]),
                Series::new("c", vec![0.5, 2.0, 4.0]),
            ],
            vec![],
        );
        let stacked = stack(&frame);
        for i in 0..frame.len() {
            let expected: f64 = (0..frame.series().len()).map(|s| frame.value(s, i)).sum();
            assert!((stacked.totals[i] - expected).abs() < 1e-12, "category {i}");
        }
    }

    #[test]
    fn empty_frame_stacks_to_empty() {
        let frame = SeriesFrame::align(vec![], vec![]);
        let stacked = stack(&frame);
        assert!(stacked.totals.is_empty());
        assert!(stacked.cumulative.is_empty());
    }
}
