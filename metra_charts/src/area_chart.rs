// Copyright 2026 the Metra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Area chart assembly, plain and stacked.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{BezPath, Point, Rect};
use peniko::Color;

use crate::axis::{AxisGeometry, Orientation, plot_rect, value_axis};
use crate::legend::{HeuristicTextMeasurer, LegendEntry, LegendLayout, LegendSpec};
use crate::palette::assign_color;
use crate::path::{area_path, band_path, line_path};
use crate::scale::{ScaleLinear, ScalePoint, value_extent};
use crate::series::{Series, SeriesFrame};
use crate::stack::stack;
use crate::ticks::TickRule;

/// One series' filled area plus its top edge.
#[derive(Clone, Debug)]
pub struct SeriesArea {
    /// The closed fill path.
    pub fill: BezPath,
    /// The top-edge stroke path.
    pub line: BezPath,
    /// Fill and stroke color.
    pub color: Color,
    /// Series label.
    pub label: String,
}

/// An area chart specification.
#[derive(Clone, Debug)]
pub struct AreaChartSpec {
    /// Series in draw order (bottom layer first when stacked).
    pub series: Vec<Series>,
    /// Category labels shared by all series.
    pub labels: Vec<String>,
    /// Chart width in pixels.
    pub width: f64,
    /// Chart height in pixels.
    pub height: f64,
    /// Stack series into cumulative bands instead of overlapping them.
    pub stacked: bool,
    /// Interpolate between points with quadratic curves.
    ///
    /// Only applies to plain areas; stacked bands stay polygonal so adjacent
    /// layers share their boundary exactly.
    pub smooth: bool,
    /// Tick rule for the value axis.
    pub tick_rule: TickRule,
}

impl AreaChartSpec {
    /// Creates an area chart specification with defaults.
    pub fn new(series: Vec<Series>, labels: Vec<String>) -> Self {
        Self {
            series,
            labels,
            width: 400.0,
            height: 240.0,
            stacked: false,
            smooth: false,
            tick_rule: TickRule::Count(5),
        }
    }

    /// Sets the chart size in pixels.
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Stacks series into cumulative bands.
    pub fn stacked(mut self) -> Self {
        self.stacked = true;
        self
    }

    /// Interpolates plain areas with quadratic curves.
    pub fn smooth(mut self) -> Self {
        self.smooth = true;
        self
    }

    /// Sets the tick rule for the value axis.
    pub fn with_tick_rule(mut self, rule: TickRule) -> Self {
        self.tick_rule = rule;
        self
    }

    /// Builds the per-series fill paths, value axis, and legend.
    pub fn build(&self) -> AreaChartGeometry {
        let frame = SeriesFrame::align(self.series.clone(), self.labels.clone());
        let stacks = self.stacked.then(|| stack(&frame));
        let (min, max) = value_extent(&frame, self.stacked);

        let plot = plot_rect(self.width, self.height);
        let x = ScalePoint::new((plot.x0, plot.x1), frame.len());
        let y = ScaleLinear::new((min, max), (plot.y1, plot.y0));
        let axis = value_axis(&y, self.tick_rule, Orientation::Left, plot);

        let to_points = |values: &dyn Fn(usize) -> f64| -> Vec<Point> {
            (0..frame.len())
                .map(|i| Point::new(x.position(i), y.map(values(i))))
                .collect()
        };

        let areas = frame
            .series()
            .iter()
            .enumerate()
            .map(|(s, series)| {
                let (fill, line) = if let Some(stacks) = &stacks {
                    let top = to_points(&|i| stacks.cumulative[s][i]);
                    let bottom = if s == 0 {
                        to_points(&|_| 0.0)
                    } else {
                        to_points(&|i| stacks.cumulative[s - 1][i])
                    };
                    (band_path(&top, &bottom), line_path(&top, false))
                } else {
                    let points = to_points(&|i| frame.value(s, i));
                    (
                        area_path(&points, y.map(0.0), self.smooth),
                        line_path(&points, self.smooth),
                    )
                };
                SeriesArea {
                    fill,
                    line,
                    color: assign_color(series.color, s),
                    label: series.label.clone(),
                }
            })
            .collect();

        let entries = frame
            .series()
            .iter()
            .enumerate()
            .map(|(s, series)| LegendEntry::new(series.label.clone(), assign_color(series.color, s)))
            .collect();
        let legend = LegendSpec::new(entries).layout(plot.width(), &HeuristicTextMeasurer);

        AreaChartGeometry {
            plot,
            axis,
            areas,
            legend,
        }
    }
}

/// The built geometry of an area chart.
#[derive(Clone, Debug)]
pub struct AreaChartGeometry {
    /// The plot rectangle the areas live in.
    pub plot: Rect,
    /// The value axis (ticks and grid lines).
    pub axis: AxisGeometry,
    /// One area per series, bottom layer first when stacked.
    pub areas: Vec<SeriesArea>,
    /// Series legend, origin at `(0, 0)`.
    pub legend: LegendLayout,
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::ToString;
    use alloc::vec;

    use kurbo::{PathEl, Shape};

    use super::*;

    fn labels(n: usize) -> Vec<String> {
        (0..n).map(|i| i.to_string()).collect()
    }

    #[test]
    fn plain_area_closes_down_to_the_zero_line() {
        let spec = AreaChartSpec::new(vec![Series::new("a", vec![2.0, 4.0, 3.0])], labels(3));
        let geom = spec.build();
        let fill = &geom.areas[0].fill;
        assert!(matches!(fill.elements().last(), Some(PathEl::ClosePath)));
        let bbox = fill.bounding_box();
        assert!((bbox.y1 - geom.plot.y1).abs() < 1e-9);
    }

    #[test]
    fn stacked_layers_share_their_boundary() {
        let spec = AreaChartSpec::new(
            vec![
                Series::new("a", vec![1.0, 2.0]),
                Series::new("b", vec![3.0, 4.0]),
            ],
            labels(2),
        )
        .stacked();
        let geom = spec.build();
        let lower_top = geom.areas[0].fill.bounding_box().y0;
        let upper = geom.areas[1].fill.bounding_box();
        assert!((upper.y1 - lower_top).abs() < 1e-9);
    }

    #[test]
    fn stacked_extent_covers_the_totals() {
        let spec = AreaChartSpec::new(
            vec![
                Series::new("a", vec![5.0, 5.0]),
                Series::new("b", vec![5.0, 5.0]),
            ],
            labels(2),
        )
        .stacked();
        let geom = spec.build();
        // The top layer's upper edge reaches the top of the plot (total = max).
        let upper = geom.areas[1].fill.bounding_box();
        assert!((upper.y0 - geom.plot.y0).abs() < 1e-9);
    }

    #[test]
    fn empty_input_builds_empty_geometry() {
        let geom = AreaChartSpec::new(vec![], vec![]).build();
        assert!(geom.areas.is_empty());
        assert!(geom.legend.entries.is_empty());
    }
}
