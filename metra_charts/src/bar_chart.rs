// Copyright 2026 the Metra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bar chart assembly: grouped, stacked, vertical, and horizontal.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Rect;
use peniko::Color;

use crate::axis::{AxisGeometry, Orientation, plot_rect, value_axis};
use crate::legend::{HeuristicTextMeasurer, LegendEntry, LegendLayout, LegendSpec};
use crate::palette::assign_color;
use crate::scale::{ScaleBand, ScaleLinear, value_extent};
use crate::series::{Series, SeriesFrame};
use crate::stack::stack;
use crate::ticks::TickRule;

/// One bar (or stacked bar segment).
#[derive(Clone, Debug)]
pub struct BarGeom {
    /// The bar rectangle, normalized so `x0 <= x1` and `y0 <= y1`.
    pub rect: Rect,
    /// Fill color.
    pub color: Color,
    /// Index of the series this bar belongs to.
    pub series: usize,
    /// Index of the category this bar belongs to.
    pub category: usize,
    /// The data value behind this bar.
    pub value: f64,
}

/// A bar chart specification.
#[derive(Clone, Debug)]
pub struct BarChartSpec {
    /// Series in draw order.
    pub series: Vec<Series>,
    /// Category labels shared by all series.
    pub labels: Vec<String>,
    /// Chart width in pixels.
    pub width: f64,
    /// Chart height in pixels.
    pub height: f64,
    /// Stack series on top of each other instead of grouping side by side.
    pub stacked: bool,
    /// Lay categories out along the y axis, values along x.
    pub horizontal: bool,
    /// Tick rule for the value axis.
    pub tick_rule: TickRule,
}

impl BarChartSpec {
    /// Creates a bar chart specification with defaults.
    pub fn new(series: Vec<Series>, labels: Vec<String>) -> Self {
        Self {
            series,
            labels,
            width: 400.0,
            height: 240.0,
            stacked: false,
            horizontal: false,
            tick_rule: TickRule::Count(5),
        }
    }

    /// Sets the chart size in pixels.
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Stacks series instead of grouping them side by side.
    pub fn stacked(mut self) -> Self {
        self.stacked = true;
        self
    }

    /// Lays categories out along the y axis.
    pub fn horizontal(mut self) -> Self {
        self.horizontal = true;
        self
    }

    /// Sets the tick rule for the value axis.
    pub fn with_tick_rule(mut self, rule: TickRule) -> Self {
        self.tick_rule = rule;
        self
    }

    /// Builds the bar geometry, value axis, and legend.
    pub fn build(&self) -> BarChartGeometry {
        let frame = SeriesFrame::align(self.series.clone(), self.labels.clone());
        let stacked = self.stacked.then(|| stack(&frame));
        let (min, max) = value_extent(&frame, self.stacked);

        let plot = plot_rect(self.width, self.height);
        let (value_scale, band, orientation) = if self.horizontal {
            (
                ScaleLinear::new((min, max), (plot.x0, plot.x1)),
                ScaleBand::new((plot.y0, plot.y1), frame.len()),
                Orientation::Bottom,
            )
        } else {
            (
                ScaleLinear::new((min, max), (plot.y1, plot.y0)),
                ScaleBand::new((plot.x0, plot.x1), frame.len()),
                Orientation::Left,
            )
        };
        let axis = value_axis(&value_scale, self.tick_rule, orientation, plot);

        let n_series = frame.series().len().max(1);
        let zero = value_scale.map(0.0);
        let mut bars = Vec::with_capacity(frame.series().len() * frame.len());
        for (s, series) in frame.series().iter().enumerate() {
            let color = assign_color(series.color, s);
            for i in 0..frame.len() {
                let value = frame.value(s, i);
                let (band_lo, band_hi, value_a, value_b) = if let Some(stacks) = &stacked {
                    let hi = stacks.cumulative[s][i];
                    let lo = if s == 0 { 0.0 } else { stacks.cumulative[s - 1][i] };
                    let pos = band.position(i);
                    (pos, pos + band.band_width(), value_scale.map(lo), value_scale.map(hi))
                } else {
                    let sub = band.band_width() / n_series as f64;
                    let pos = band.position(i) + s as f64 * sub;
                    (pos, pos + sub, zero, value_scale.map(value))
                };
                let rect = if self.horizontal {
                    Rect::new(
                        value_a.min(value_b),
                        band_lo,
                        value_a.max(value_b),
                        band_hi,
                    )
                } else {
                    Rect::new(
                        band_lo,
                        value_a.min(value_b),
                        band_hi,
                        value_a.max(value_b),
                    )
                };
                bars.push(BarGeom {
                    rect,
                    color,
                    series: s,
                    category: i,
                    value,
                });
            }
        }

        let entries = frame
            .series()
            .iter()
            .enumerate()
            .map(|(s, series)| LegendEntry::new(series.label.clone(), assign_color(series.color, s)))
            .collect();
        let legend = LegendSpec::new(entries).layout(plot.width(), &HeuristicTextMeasurer);

        BarChartGeometry {
            plot,
            axis,
            bars,
            legend,
        }
    }
}

/// The built geometry of a bar chart.
#[derive(Clone, Debug)]
pub struct BarChartGeometry {
    /// The plot rectangle the bars live in.
    pub plot: Rect,
    /// The value axis (ticks and grid lines).
    pub axis: AxisGeometry,
    /// All bars, series-major.
    pub bars: Vec<BarGeom>,
    /// Series legend, origin at `(0, 0)`.
    pub legend: LegendLayout,
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::ToString;
    use alloc::vec;

    use super::*;

    fn labels(n: usize) -> Vec<String> {
        (0..n).map(|i| i.to_string()).collect()
    }

    #[test]
    fn grouped_bars_split_the_band() {
        let spec = BarChartSpec::new(
            vec![
                Series::new("a", vec![3.0, 5.0]),
                Series::new("b", vec![4.0, 1.0]),
            ],
            labels(2),
        );
        let geom = spec.build();
        assert_eq!(geom.bars.len(), 4);

        // Both series' bars for category 0 sit inside its band, side by side.
        let a = &geom.bars[0];
        let b = &geom.bars[2];
        assert_eq!(a.category, 0);
        assert_eq!(b.category, 0);
        assert!((a.rect.x1 - b.rect.x0).abs() < 1e-9);
        assert!((a.rect.width() - b.rect.width()).abs() < 1e-9);
    }

    #[test]
    fn stacked_segments_abut() {
        let spec = BarChartSpec::new(
            vec![
                Series::new("a", vec![1.0, 2.0]),
                Series::new("b", vec![3.0, 4.0]),
            ],
            labels(2),
        )
        .stacked();
        let geom = spec.build();
        let lower = &geom.bars[0];
        let upper = &geom.bars[2];
        assert!((upper.rect.y1 - lower.rect.y0).abs() < 1e-9);
        assert!((lower.rect.x0 - upper.rect.x0).abs() < 1e-9);
    }

    #[test]
    fn bars_grow_from_the_zero_line() {
        let spec = BarChartSpec::new(vec![Series::new("a", vec![2.0, -1.0])], labels(2));
        let geom = spec.build();
        let zero = {
            let (min, max) = value_extent(
                &SeriesFrame::align(spec.series.clone(), spec.labels.clone()),
                false,
            );
            ScaleLinear::new((min, max), (geom.plot.y1, geom.plot.y0)).map(0.0)
        };
        let positive = &geom.bars[0];
        let negative = &geom.bars[1];
        assert!((positive.rect.y1 - zero).abs() < 1e-9);
        assert!((negative.rect.y0 - zero).abs() < 1e-9);
        assert!(negative.rect.y1 > zero);
    }

    #[test]
    fn horizontal_bars_grow_along_x() {
        let spec = BarChartSpec::new(vec![Series::new("a", vec![3.0, 6.0])], labels(2)).horizontal();
        let geom = spec.build();
        assert!(geom.bars[1].rect.width() > geom.bars[0].rect.width());
        assert!(geom.bars[0].rect.y1 <= geom.bars[1].rect.y0 + 1e-9);
        assert!((geom.bars[0].rect.x0 - geom.plot.x0).abs() < 1e-9);
    }

    #[test]
    fn empty_input_builds_empty_geometry() {
        let geom = BarChartSpec::new(vec![], vec![]).build();
        assert!(geom.bars.is_empty());
        assert!(geom.legend.entries.is_empty());
        assert!(!geom.axis.ticks.is_empty());
    }

    #[test]
    fn mismatched_series_truncate_to_shortest() {
        let spec = BarChartSpec::new(
            vec![
                Series::new("a", vec![1.0, 2.0, 3.0]),
                Series::new("b", vec![4.0]),
            ],
            labels(3),
        );
        let geom = spec.build();
        assert_eq!(geom.bars.len(), 2);
    }
}
