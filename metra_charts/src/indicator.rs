// Copyright 2026 the Metra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Small metric widgets: trend sparklines and progress bars.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{BezPath, Point, Rect};
use peniko::Color;

use crate::palette::assign_color;
use crate::path::line_path;
use crate::scale::{ScaleLinear, ScalePoint};

/// Which way a trend indicator points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrendDirection {
    /// The last sample is above the first.
    Up,
    /// The last sample is below the first.
    Down,
    /// First and last samples match (or there are fewer than two).
    Flat,
}

/// A trend indicator specification: a sparkline with a first-to-last delta.
#[derive(Clone, Debug)]
pub struct TrendSpec {
    /// Samples in time order.
    pub data: Vec<f64>,
    /// Sparkline width in pixels.
    pub width: f64,
    /// Sparkline height in pixels.
    pub height: f64,
    /// Arrow glyph size in pixels.
    pub arrow_size: f64,
}

impl TrendSpec {
    /// Creates a trend specification with the default sparkline size.
    pub fn new(data: Vec<f64>) -> Self {
        Self {
            data,
            width: 120.0,
            height: 32.0,
            arrow_size: 10.0,
        }
    }

    /// Sets the sparkline size in pixels.
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Builds the sparkline path, delta, percent change, and arrow glyph.
    ///
    /// The vertical domain auto-fits the data rather than being forced
    /// through zero; a constant series therefore draws as a midline. Percent
    /// change is measured against the first sample and is `None` when that
    /// sample is zero or there are fewer than two samples.
    pub fn build(&self) -> TrendGeometry {
        let finite = |v: &&f64| v.is_finite();
        let lo = self.data.iter().filter(finite).copied().fold(f64::INFINITY, f64::min);
        let hi = self
            .data
            .iter()
            .filter(finite)
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);
        let (lo, hi) = if lo <= hi { (lo, hi) } else { (0.0, 0.0) };

        let x = ScalePoint::new((0.0, self.width), self.data.len());
        let y = ScaleLinear::new((lo, hi), (self.height, 0.0));
        let points: Vec<Point> = self
            .data
            .iter()
            .enumerate()
            .filter(|(_, v)| v.is_finite())
            .map(|(i, &v)| Point::new(x.position(i), y.map(v)))
            .collect();
        let path = line_path(&points, false);

        let first = self.data.first().copied().unwrap_or(0.0);
        let last = self.data.last().copied().unwrap_or(0.0);
        let delta = if self.data.len() < 2 { 0.0 } else { last - first };
        let direction = if delta > 0.0 {
            TrendDirection::Up
        } else if delta < 0.0 {
            TrendDirection::Down
        } else {
            TrendDirection::Flat
        };
        let percent =
            (self.data.len() >= 2 && first != 0.0).then(|| 100.0 * delta / first.abs());

        TrendGeometry {
            path,
            points,
            delta,
            percent,
            direction,
            arrow: arrow_glyph(direction, self.arrow_size),
        }
    }
}

fn arrow_glyph(direction: TrendDirection, size: f64) -> BezPath {
    let mut arrow = BezPath::new();
    let half = size * 0.5;
    match direction {
        TrendDirection::Up => {
            arrow.move_to((0.0, half));
            arrow.line_to((size, half));
            arrow.line_to((half, -half));
            arrow.close_path();
        }
        TrendDirection::Down => {
            arrow.move_to((0.0, -half));
            arrow.line_to((size, -half));
            arrow.line_to((half, half));
            arrow.close_path();
        }
        TrendDirection::Flat => {}
    }
    arrow
}

/// The built geometry of a trend indicator.
#[derive(Clone, Debug)]
pub struct TrendGeometry {
    /// The sparkline stroke path, origin at `(0, 0)`.
    pub path: BezPath,
    /// The sparkline points in pixel space (non-finite samples are skipped).
    pub points: Vec<Point>,
    /// `last - first`, or `0` for fewer than two samples.
    pub delta: f64,
    /// Percent change against the first sample; `None` when undefined.
    pub percent: Option<f64>,
    /// Which way the trend points.
    pub direction: TrendDirection,
    /// An arrow glyph centered at the origin; empty when flat.
    pub arrow: BezPath,
}

/// A progress bar specification.
#[derive(Clone, Debug)]
pub struct ProgressSpec {
    /// The current value; clamped into `[min, max]`.
    pub value: f64,
    /// Domain minimum.
    pub min: f64,
    /// Domain maximum.
    pub max: f64,
    /// Bar width in pixels.
    pub width: f64,
    /// Bar height in pixels.
    pub height: f64,
    /// Fill color; falls back to the palette.
    pub color: Option<Color>,
    /// Track (background) color.
    pub track_color: Color,
}

impl ProgressSpec {
    /// Creates a progress bar specification with defaults.
    pub fn new(value: f64, min: f64, max: f64) -> Self {
        Self {
            value,
            min,
            max,
            width: 200.0,
            height: 8.0,
            color: None,
            track_color: Color::from_rgb8(0xe5, 0xe7, 0xeb),
        }
    }

    /// Sets the bar size in pixels.
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the fill color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Builds the track and fill rectangles.
    ///
    /// A collapsed domain (`min == max`) yields an empty fill.
    pub fn build(&self) -> ProgressGeometry {
        let lo = self.min.min(self.max);
        let hi = self.max.max(self.min);
        let span = hi - lo;
        let fraction = if span == 0.0 {
            0.0
        } else {
            (self.value.clamp(lo, hi) - lo) / span
        };
        ProgressGeometry {
            track: Rect::new(0.0, 0.0, self.width, self.height),
            fill: Rect::new(0.0, 0.0, self.width * fraction, self.height),
            fraction,
            corner_radius: self.height * 0.5,
            color: assign_color(self.color, 0),
            track_color: self.track_color,
        }
    }
}

/// The built geometry of a progress bar.
#[derive(Clone, Debug)]
pub struct ProgressGeometry {
    /// The background track rectangle.
    pub track: Rect,
    /// The filled portion, anchored at the left edge.
    pub fill: Rect,
    /// The clamped fill fraction in `[0, 1]`.
    pub fraction: f64,
    /// Corner radius for rendering both rectangles.
    pub corner_radius: f64,
    /// Fill color.
    pub color: Color,
    /// Track color.
    pub track_color: Color,
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    #[test]
    fn rising_series_points_up() {
        let geom = TrendSpec::new(vec![100.0, 110.0, 120.0]).build();
        assert_eq!(geom.direction, TrendDirection::Up);
        assert_eq!(geom.delta, 20.0);
        assert_eq!(geom.percent, Some(20.0));
        assert!(!geom.arrow.is_empty());
    }

    #[test]
    fn falling_series_points_down() {
        let geom = TrendSpec::new(vec![100.0, 90.0, 80.0]).build();
        assert_eq!(geom.direction, TrendDirection::Down);
        assert_eq!(geom.percent, Some(-20.0));
    }

    #[test]
    fn constant_series_draws_a_midline() {
        let spec = TrendSpec::new(vec![5.0, 5.0, 5.0]);
        let geom = spec.build();
        assert_eq!(geom.direction, TrendDirection::Flat);
        assert!(geom.arrow.is_empty());
        let mid = spec.height * 0.5;
        assert!(geom.points.iter().all(|p| (p.y - mid).abs() < 1e-9));
    }

    #[test]
    fn sparkline_spans_the_full_width() {
        let spec = TrendSpec::new(vec![1.0, 3.0, 2.0, 4.0]);
        let geom = spec.build();
        assert!((geom.points[0].x - 0.0).abs() < 1e-9);
        assert!((geom.points[3].x - spec.width).abs() < 1e-9);
        // Highest sample maps to the top edge, lowest to the bottom.
        assert!((geom.points[3].y - 0.0).abs() < 1e-9);
        assert!((geom.points[0].y - spec.height).abs() < 1e-9);
    }

    #[test]
    fn zero_first_sample_has_no_percent() {
        let geom = TrendSpec::new(vec![0.0, 5.0]).build();
        assert_eq!(geom.percent, None);
        assert_eq!(geom.delta, 5.0);
    }

    #[test]
    fn short_or_empty_data_is_flat() {
        assert_eq!(TrendSpec::new(vec![]).build().direction, TrendDirection::Flat);
        let single = TrendSpec::new(vec![7.0]).build();
        assert_eq!(single.direction, TrendDirection::Flat);
        assert_eq!(single.points.len(), 1);
    }

    #[test]
    fn non_finite_samples_are_skipped() {
        let geom = TrendSpec::new(vec![1.0, f64::NAN, 3.0]).build();
        assert_eq!(geom.points.len(), 2);
        assert!(geom.points.iter().all(|p| p.y.is_finite()));
    }

    #[test]
    fn negative_first_sample_uses_its_magnitude() {
        let geom = TrendSpec::new(vec![-100.0, -50.0]).build();
        assert_eq!(geom.direction, TrendDirection::Up);
        assert_eq!(geom.percent, Some(50.0));
    }

    #[test]
    fn progress_fill_is_proportional() {
        let geom = ProgressSpec::new(25.0, 0.0, 100.0).build();
        assert_eq!(geom.fraction, 0.25);
        assert_eq!(geom.fill.width(), 50.0);
        assert_eq!(geom.track.width(), 200.0);
    }

    #[test]
    fn progress_clamps_out_of_range_values() {
        assert_eq!(ProgressSpec::new(150.0, 0.0, 100.0).build().fraction, 1.0);
        assert_eq!(ProgressSpec::new(-10.0, 0.0, 100.0).build().fraction, 0.0);
    }

    #[test]
    fn collapsed_domain_yields_empty_fill() {
        let geom = ProgressSpec::new(5.0, 5.0, 5.0).build();
        assert_eq!(geom.fraction, 0.0);
        assert_eq!(geom.fill.width(), 0.0);
    }
}
