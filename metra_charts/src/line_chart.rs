// Copyright 2026 the Metra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Line chart assembly.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{BezPath, Point, Rect};
use peniko::Color;

use crate::axis::{AxisGeometry, Orientation, plot_rect, value_axis};
use crate::legend::{HeuristicTextMeasurer, LegendEntry, LegendLayout, LegendSpec};
use crate::palette::assign_color;
use crate::path::line_path;
use crate::scale::{ScaleLinear, ScalePoint, value_extent};
use crate::series::{Series, SeriesFrame};
use crate::ticks::TickRule;

/// One series' polyline geometry.
#[derive(Clone, Debug)]
pub struct SeriesLine {
    /// The stroke path.
    pub path: BezPath,
    /// The data points in pixel space, for marker rendering.
    pub points: Vec<Point>,
    /// Stroke color.
    pub color: Color,
    /// Series label.
    pub label: String,
}

/// A line chart specification.
#[derive(Clone, Debug)]
pub struct LineChartSpec {
    /// Series in draw order.
    pub series: Vec<Series>,
    /// Category labels shared by all series.
    pub labels: Vec<String>,
    /// Chart width in pixels.
    pub width: f64,
    /// Chart height in pixels.
    pub height: f64,
    /// Interpolate between points with quadratic curves.
    pub smooth: bool,
    /// Tick rule for the value axis.
    pub tick_rule: TickRule,
}

impl LineChartSpec {
    /// Creates a line chart specification with defaults.
    pub fn new(series: Vec<Series>, labels: Vec<String>) -> Self {
        Self {
            series,
            labels,
            width: 400.0,
            height: 240.0,
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

    /// Interpolates between points with quadratic curves.
    pub fn smooth(mut self) -> Self {
        self.smooth = true;
        self
    }

    /// Sets the tick rule for the value axis.
    pub fn with_tick_rule(mut self, rule: TickRule) -> Self {
        self.tick_rule = rule;
        self
    }

    /// Builds the per-series line paths, value axis, and legend.
    pub fn build(&self) -> LineChartGeometry {
        let frame = SeriesFrame::align(self.series.clone(), self.labels.clone());
        let (min, max) = value_extent(&frame, false);

        let plot = plot_rect(self.width, self.height);
        let x = ScalePoint::new((plot.x0, plot.x1), frame.len());
        let y = ScaleLinear::new((min, max), (plot.y1, plot.y0));
        let axis = value_axis(&y, self.tick_rule, Orientation::Left, plot);

        let lines = frame
            .series()
            .iter()
            .enumerate()
            .map(|(s, series)| {
                let points: Vec<Point> = (0..frame.len())
                    .map(|i| Point::new(x.position(i), y.map(frame.value(s, i))))
                    .collect();
                SeriesLine {
                    path: line_path(&points, self.smooth),
                    points,
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

        LineChartGeometry {
            plot,
            axis,
            lines,
            legend,
        }
    }
}

/// The built geometry of a line chart.
#[derive(Clone, Debug)]
pub struct LineChartGeometry {
    /// The plot rectangle the lines live in.
    pub plot: Rect,
    /// The value axis (ticks and grid lines).
    pub axis: AxisGeometry,
    /// One line per series, in input order.
    pub lines: Vec<SeriesLine>,
    /// Series legend, origin at `(0, 0)`.
    pub legend: LegendLayout,
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::ToString;
    use alloc::vec;

    use kurbo::PathEl;

    use super::*;

    fn labels(n: usize) -> Vec<String> {
        (0..n).map(|i| i.to_string()).collect()
    }

    #[test]
    fn points_span_the_plot_width() {
        let spec = LineChartSpec::new(vec![Series::new("a", vec![1.0, 3.0, 2.0])], labels(3));
        let geom = spec.build();
        let points = &geom.lines[0].points;
        assert_eq!(points.len(), 3);
        assert!((points[0].x - geom.plot.x0).abs() < 1e-9);
        assert!((points[2].x - geom.plot.x1).abs() < 1e-9);
    }

    #[test]
    fn higher_values_map_to_smaller_y() {
        let spec = LineChartSpec::new(vec![Series::new("a", vec![1.0, 3.0])], labels(2));
        let geom = spec.build();
        let points = &geom.lines[0].points;
        assert!(points[1].y < points[0].y);
    }

    #[test]
    fn smooth_paths_use_quadratic_segments() {
        let series = vec![Series::new("a", vec![1.0, 4.0, 2.0, 5.0])];
        let straight = LineChartSpec::new(series.clone(), labels(4)).build();
        let smooth = LineChartSpec::new(series, labels(4)).smooth().build();
        let has_quads = |path: &BezPath| {
            path.elements()
                .iter()
                .any(|el| matches!(el, PathEl::QuadTo(..)))
        };
        assert!(!has_quads(&straight.lines[0].path));
        assert!(has_quads(&smooth.lines[0].path));
    }

    #[test]
    fn series_keep_input_order_and_colors() {
        let red = Color::from_rgb8(200, 0, 0);
        let spec = LineChartSpec::new(
            vec![
                Series::new("first", vec![1.0, 2.0]),
                Series::new("second", vec![2.0, 1.0]).with_color(red),
            ],
            labels(2),
        );
        let geom = spec.build();
        assert_eq!(geom.lines[0].label, "first");
        assert_eq!(geom.lines[1].color, red);
        assert_eq!(geom.legend.entries[1].color, red);
    }

    #[test]
    fn single_point_series_builds_without_panic() {
        let spec = LineChartSpec::new(vec![Series::new("a", vec![5.0])], labels(1));
        let geom = spec.build();
        assert_eq!(geom.lines[0].points.len(), 1);
    }
}
