// Copyright 2026 the Metra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Legend layout.
//!
//! Legends are swatch + label rows flowed left-to-right and wrapped to the
//! container width. Text shaping stays downstream, so layout accepts a
//! measurer callback for label bounds estimation.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Rect, Size};
use peniko::Color;
use smallvec::SmallVec;

/// A minimal text measurement interface used by legend and axis layout.
///
/// Callers can plug in a real text measurement backend (e.g. based on
/// shaping), or use [`HeuristicTextMeasurer`].
pub trait TextMeasurer {
    /// Returns `(width, height)` in the same coordinate system as the chart.
    fn measure(&self, text: &str, font_size: f64) -> (f64, f64);
}

/// A tiny heuristic text measurer suitable for demos and early layout.
///
/// It assumes an average glyph width of ~0.6em and height of 1em.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, font_size: f64) -> (f64, f64) {
        let width = 0.6 * font_size * text.chars().count() as f64;
        (width, font_size)
    }
}

/// One legend item: a label paired with its swatch color.
#[derive(Clone, Debug)]
pub struct LegendEntry {
    /// The label string shown next to the swatch.
    pub label: String,
    /// The swatch fill color.
    pub color: Color,
}

impl LegendEntry {
    /// Creates an entry with a solid-color swatch.
    pub fn new(label: impl Into<String>, color: Color) -> Self {
        Self {
            label: label.into(),
            color,
        }
    }
}

/// An unpositioned legend specification.
///
/// Entries flow left-to-right in input order and wrap into a new row when
/// the next entry would overflow the container width.
#[derive(Clone, Debug)]
pub struct LegendSpec {
    /// Swatch square size.
    pub swatch_size: f64,
    /// Horizontal gap between swatch and label.
    pub label_dx: f64,
    /// Horizontal gap between entries on a row.
    pub entry_gap: f64,
    /// Vertical gap between rows.
    pub row_gap: f64,
    /// Label font size.
    pub font_size: f64,
    /// Entries in display order.
    pub entries: Vec<LegendEntry>,
}

impl LegendSpec {
    /// Creates a legend specification with defaults.
    pub fn new(entries: Vec<LegendEntry>) -> Self {
        Self {
            swatch_size: 10.0,
            label_dx: 6.0,
            entry_gap: 16.0,
            row_gap: 6.0,
            font_size: 10.0,
            entries,
        }
    }

    /// Sets the label font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the swatch size.
    pub fn with_swatch_size(mut self, swatch_size: f64) -> Self {
        self.swatch_size = swatch_size;
        self
    }

    /// Sets the gap between entries on a row.
    pub fn with_entry_gap(mut self, entry_gap: f64) -> Self {
        self.entry_gap = entry_gap.max(0.0);
        self
    }

    /// Lays the legend out within `container_width`, origin at `(0, 0)`.
    ///
    /// An entry wider than the container still gets a row of its own rather
    /// than being dropped, so every entry is always placed. Label positions
    /// use a start anchor and a middle baseline.
    pub fn layout(&self, container_width: f64, measurer: &impl TextMeasurer) -> LegendLayout {
        let mut widths: SmallVec<[f64; 8]> = SmallVec::with_capacity(self.entries.len());
        for entry in &self.entries {
            let (label_w, _) = measurer.measure(&entry.label, self.font_size);
            widths.push(self.swatch_size + self.label_dx + label_w);
        }

        let row_height = self.swatch_size.max(self.font_size);
        let mut placed = Vec::with_capacity(self.entries.len());
        let mut cursor_x = 0.0;
        let mut cursor_y = 0.0;
        let mut max_width = 0.0_f64;

        for (entry, &width) in self.entries.iter().zip(&widths) {
            if cursor_x > 0.0 && cursor_x + width > container_width {
                cursor_x = 0.0;
                cursor_y += row_height + self.row_gap;
            }
            let swatch_y = cursor_y + (row_height - self.swatch_size) * 0.5;
            placed.push(PlacedLegendEntry {
                label: entry.label.clone(),
                color: entry.color,
                swatch: Rect::new(
                    cursor_x,
                    swatch_y,
                    cursor_x + self.swatch_size,
                    swatch_y + self.swatch_size,
                ),
                label_x: cursor_x + self.swatch_size + self.label_dx,
                label_y: cursor_y + row_height * 0.5,
            });
            cursor_x += width;
            max_width = max_width.max(cursor_x);
            cursor_x += self.entry_gap;
        }

        let height = if placed.is_empty() {
            0.0
        } else {
            cursor_y + row_height
        };
        LegendLayout {
            entries: placed,
            size: Size::new(max_width, height),
        }
    }
}

/// A positioned legend entry.
#[derive(Clone, Debug)]
pub struct PlacedLegendEntry {
    /// The label string.
    pub label: String,
    /// The swatch fill color.
    pub color: Color,
    /// The swatch rectangle.
    pub swatch: Rect,
    /// Label anchor x (start of the text).
    pub label_x: f64,
    /// Label anchor y (middle baseline).
    pub label_y: f64,
}

/// The result of laying out a [`LegendSpec`].
#[derive(Clone, Debug)]
pub struct LegendLayout {
    /// Placed entries in input order.
    pub entries: Vec<PlacedLegendEntry>,
    /// The overall legend size.
    pub size: Size,
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;
    use crate::palette::assign_color;

    fn entries(labels: &[&str]) -> Vec<LegendEntry> {
        labels
            .iter()
            .enumerate()
            .map(|(i, label)| LegendEntry::new(*label, assign_color(None, i)))
            .collect()
    }

    #[test]
    fn wide_container_keeps_one_row() {
        let spec = LegendSpec::new(entries(&["a", "bb", "ccc"]));
        let layout = spec.layout(1000.0, &HeuristicTextMeasurer);
        assert_eq!(layout.entries.len(), 3);
        let y0 = layout.entries[0].swatch.y0;
        assert!(layout.entries.iter().all(|e| e.swatch.y0 == y0));
        assert!((layout.size.height - spec.swatch_size.max(spec.font_size)).abs() < 1e-9);
    }

    #[test]
    fn narrow_container_wraps_rows() {
        let spec = LegendSpec::new(entries(&["alpha", "beta", "gamma", "delta"]));
        let layout = spec.layout(80.0, &HeuristicTextMeasurer);
        assert_eq!(layout.entries.len(), 4);
        let rows: std::collections::BTreeSet<_> = layout
            .entries
            .iter()
            .map(|e| (e.swatch.y0 * 100.0) as i64)
            .collect();
        assert!(rows.len() > 1);
        assert!(layout.size.width <= 80.0 + 1e-9);
    }

    #[test]
    fn oversized_entry_is_still_placed() {
        let spec = LegendSpec::new(entries(&["an extremely long legend label"]));
        let layout = spec.layout(20.0, &HeuristicTextMeasurer);
        assert_eq!(layout.entries.len(), 1);
        assert!(layout.size.width > 20.0);
    }

    #[test]
    fn empty_legend_has_zero_size() {
        let spec = LegendSpec::new(vec![]);
        let layout = spec.layout(100.0, &HeuristicTextMeasurer);
        assert!(layout.entries.is_empty());
        assert_eq!(layout.size, Size::ZERO);
    }

    #[test]
    fn labels_sit_right_of_their_swatch() {
        let spec = LegendSpec::new(entries(&["one", "two"]));
        let layout = spec.layout(1000.0, &HeuristicTextMeasurer);
        for entry in &layout.entries {
            assert!((entry.label_x - (entry.swatch.x1 + spec.label_dx)).abs() < 1e-9);
        }
    }
}
