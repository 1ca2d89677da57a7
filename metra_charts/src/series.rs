// Copyright 2026 the Metra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Series input model and the uniform shape policy.
//!
//! Charts accept multiple series aligned by category index. Inputs whose
//! lengths disagree must not silently misalign categories, so every chart
//! normalizes its input through [`SeriesFrame::align`], which truncates all
//! series (and the category labels) to the shortest common length.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use peniko::Color;

/// One named data series.
#[derive(Clone, Debug)]
pub struct Series {
    /// Display label, shown in legends.
    pub label: String,
    /// Values in category order.
    pub data: Vec<f64>,
    /// Explicit series color. When `None`, a palette color is assigned by
    /// series index.
    pub color: Option<Color>,
}

impl Series {
    /// Creates a series with no explicit color.
    pub fn new(label: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            data,
            color: None,
        }
    }

    /// Sets an explicit series color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

/// Series and category labels normalized to a single common length.
#[derive(Clone, Debug)]
pub struct SeriesFrame {
    series: Vec<Series>,
    labels: Vec<String>,
    len: usize,
}

impl SeriesFrame {
    /// Aligns series and labels by truncating to the shortest length.
    ///
    /// The common length is the minimum over all series' data lengths and,
    /// when labels are provided, the label count. An empty label list is
    /// replaced by index labels (`"0"`, `"1"`, …) rather than shortening the
    /// data to zero.
    pub fn align(series: Vec<Series>, labels: Vec<String>) -> Self {
        let mut len = series.iter().map(|s| s.data.len()).min().unwrap_or(0);
        let labels = if labels.is_empty() {
            (0..len).map(|i| format!("{i}")).collect()
        } else {
            len = len.min(labels.len());
            labels
        };

        let mut series = series;
        for s in &mut series {
            s.data.truncate(len);
        }
        let mut labels = labels;
        labels.truncate(len);

        Self {
            series,
            labels,
            len,
        }
    }

    /// Number of categories after alignment.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the frame has no categories or no series.
    pub fn is_empty(&self) -> bool {
        self.len == 0 || self.series.is_empty()
    }

    /// The aligned series.
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    /// The aligned category labels.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// The value for series `s` at category `i`.
    ///
    /// Out-of-range indices read as `0.0`; alignment guarantees in-range
    /// access for `s < series().len()` and `i < len()`.
    pub fn value(&self, s: usize, i: usize) -> f64 {
        self.series
            .get(s)
            .and_then(|series| series.data.get(i))
            .copied()
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::ToString;
    use alloc::vec;

    use super::*;

    #[test]
    fn align_truncates_to_shortest_series() {
        let frame = SeriesFrame::align(
            vec![
                Series::new("a", vec![1.0, 2.0, 3.0]),
                Series::new("b", vec![4.0, 5.0]),
            ],
            vec!["x".to_string(), "y".to_string(), "z".to_string()],
        );
        assert_eq!(frame.len(), 2);
        assert_eq!(frame.series()[0].data, vec![1.0, 2.0]);
        assert_eq!(frame.labels(), &["x".to_string(), "y".to_string()]);
    }

    #[test]
    fn align_truncates_to_label_count() {
        let frame = SeriesFrame::align(
            vec![Series::new("a", vec![1.0, 2.0, 3.0])],
            vec!["only".to_string()],
        );
        assert_eq!(frame.len(), 1);
        assert_eq!(frame.series()[0].data, vec![1.0]);
    }

    #[test]
    fn empty_labels_are_synthesized_from_indices() {
        let frame = SeriesFrame::align(vec![Series::new("a", vec![7.0, 8.0])], vec![]);
        assert_eq!(frame.labels(), &["0".to_string(), "1".to_string()]);
    }

    #[test]
    fn empty_input_yields_empty_frame() {
        let frame = SeriesFrame::align(vec![], vec![]);
        assert!(frame.is_empty());
        assert_eq!(frame.len(), 0);
    }
}
