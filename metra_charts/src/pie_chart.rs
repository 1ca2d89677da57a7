// Copyright 2026 the Metra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pie and donut chart assembly.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use core::f64::consts::FRAC_PI_2;

use kurbo::{BezPath, Point};
use peniko::Color;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;
use crate::legend::{HeuristicTextMeasurer, LegendEntry, LegendLayout, LegendSpec};
use crate::sector::{Slice, slice_path, slices};

/// One rendered slice: its fill path plus the source slice data.
#[derive(Clone, Debug)]
pub struct SliceGeom {
    /// The annular (or wedge) fill path.
    pub path: BezPath,
    /// The slice angles, radii, color, label, and value.
    pub slice: Slice,
    /// A label anchor at the slice's angular midpoint.
    pub label_pos: Point,
}

/// A pie or donut chart specification.
///
/// A donut is a pie with a nonzero `inner_ratio`.
#[derive(Clone, Debug)]
pub struct PieChartSpec {
    /// Slice values, one per category.
    pub values: Vec<f64>,
    /// Category labels, one per value.
    pub labels: Vec<String>,
    /// Explicit slice colors; unset entries fall back to the palette.
    pub colors: Option<Vec<Color>>,
    /// Chart width in pixels.
    pub width: f64,
    /// Chart height in pixels.
    pub height: f64,
    /// Donut hole radius as a fraction of the outer radius.
    pub inner_ratio: f64,
    /// Rotation applied to the canonical slice angles, in radians.
    ///
    /// The default puts slice 0's start at 12 o'clock.
    pub rotation: f64,
    /// Curve flattening tolerance for slice paths.
    pub tolerance: f64,
}

impl PieChartSpec {
    /// Creates a pie chart specification with defaults.
    pub fn new(values: Vec<f64>, labels: Vec<String>) -> Self {
        Self {
            values,
            labels,
            colors: None,
            width: 240.0,
            height: 240.0,
            inner_ratio: 0.0,
            rotation: -FRAC_PI_2,
            tolerance: 0.1,
        }
    }

    /// Sets the chart size in pixels.
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Turns the pie into a donut with the default hole size.
    pub fn donut(mut self) -> Self {
        self.inner_ratio = 0.6;
        self
    }

    /// Sets the donut hole radius as a fraction of the outer radius.
    pub fn with_inner_ratio(mut self, inner_ratio: f64) -> Self {
        self.inner_ratio = inner_ratio;
        self
    }

    /// Sets explicit slice colors.
    pub fn with_colors(mut self, colors: Vec<Color>) -> Self {
        self.colors = Some(colors);
        self
    }

    /// Builds the slice paths and legend.
    ///
    /// A zero-sum or empty input yields no slices.
    pub fn build(&self) -> PieChartGeometry {
        let center = Point::new(self.width * 0.5, self.height * 0.5);
        let radius = (self.width.min(self.height) * 0.5 - 8.0).max(0.0);

        let built = slices(
            &self.values,
            &self.labels,
            self.colors.as_deref(),
            self.inner_ratio,
            radius,
        );
        let slices = built
            .into_iter()
            .map(|slice| {
                let mid_angle = (slice.start_angle + slice.end_angle) * 0.5 + self.rotation;
                let mid_radius = (slice.inner_radius + slice.outer_radius) * 0.5;
                SliceGeom {
                    path: slice_path(center, &slice, self.rotation, self.tolerance),
                    label_pos: Point::new(
                        center.x + mid_radius * mid_angle.cos(),
                        center.y + mid_radius * mid_angle.sin(),
                    ),
                    slice,
                }
            })
            .collect::<Vec<_>>();

        let entries = slices
            .iter()
            .map(|geom| LegendEntry::new(geom.slice.label.clone(), geom.slice.color))
            .collect();
        let legend = LegendSpec::new(entries).layout(self.width, &HeuristicTextMeasurer);

        PieChartGeometry {
            center,
            radius,
            slices,
            legend,
        }
    }
}

/// The built geometry of a pie or donut chart.
#[derive(Clone, Debug)]
pub struct PieChartGeometry {
    /// The pie center.
    pub center: Point,
    /// The outer radius in pixels.
    pub radius: f64,
    /// Slices in input order.
    pub slices: Vec<SliceGeom>,
    /// Category legend, origin at `(0, 0)`.
    pub legend: LegendLayout,
}
