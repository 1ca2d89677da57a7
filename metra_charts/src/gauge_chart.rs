// Copyright 2026 the Metra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gauge chart assembly: track, value arc, zones, and tick marks.

extern crate alloc;

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use core::f64::consts::{FRAC_PI_2, PI, TAU};
use core::fmt;

use kurbo::{BezPath, Point, Rect};
use peniko::Color;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;
use crate::format::format_tick;
use crate::palette::assign_color;
use crate::sector::{GaugeZone, gauge_arc, gauge_ticks, gauge_zones, slice_path};
use crate::ticks::{TickRule, tick_step};

/// Tick mark configuration for a gauge.
///
/// Tick values come from an explicit list when `values` is set, from a fixed
/// `step` otherwise, and from a nice-number subdivision of the value domain
/// when neither is given.
#[derive(Clone)]
pub struct GaugeTics {
    /// Whether tick marks are generated at all.
    pub show: bool,
    /// Fixed spacing between ticks in data units.
    pub step: Option<f64>,
    /// Explicit tick values; overrides `step`.
    pub values: Option<Vec<f64>>,
    /// Whether ticks carry text labels.
    pub show_labels: bool,
    /// Custom label formatter; the default formats like axis ticks.
    pub format: Option<Arc<dyn Fn(f64) -> String>>,
}

impl Default for GaugeTics {
    fn default() -> Self {
        Self {
            show: true,
            step: None,
            values: None,
            show_labels: true,
            format: None,
        }
    }
}

impl fmt::Debug for GaugeTics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GaugeTics")
            .field("show", &self.show)
            .field("step", &self.step)
            .field("values", &self.values)
            .field("show_labels", &self.show_labels)
            .field("format", &self.format.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

/// One gauge tick mark.
#[derive(Clone, Debug)]
pub struct GaugeTickGeom {
    /// The tick's data value.
    pub value: f64,
    /// The tick's angle in radians.
    pub angle: f64,
    /// Tick line start (nearest the arc).
    pub p0: Point,
    /// Tick line end (toward the hub).
    pub p1: Point,
    /// Label anchor, further inward from `p1`.
    pub label_pos: Point,
    /// Formatted label, when labels are enabled.
    pub label: Option<String>,
}

/// One gauge zone band.
#[derive(Clone, Debug)]
pub struct GaugeZoneGeom {
    /// The zone's fill path.
    pub path: BezPath,
    /// Zone color.
    pub color: Color,
    /// Zone label (may be empty).
    pub label: String,
}

/// A gauge chart specification.
#[derive(Clone, Debug)]
pub struct GaugeChartSpec {
    /// The displayed value; clamped into `[min, max]`.
    pub value: f64,
    /// Domain minimum.
    pub min: f64,
    /// Domain maximum.
    pub max: f64,
    /// Chart width in pixels.
    pub width: f64,
    /// Chart height in pixels.
    pub height: f64,
    /// Arc start angle in radians.
    pub arc_start: f64,
    /// Arc end angle in radians.
    pub arc_end: f64,
    /// Arc band thickness as a fraction of the radius.
    pub thickness: f64,
    /// Value arc color; falls back to the palette.
    pub color: Option<Color>,
    /// Track (background arc) color.
    pub track_color: Color,
    /// Colored value ranges drawn on the track.
    pub zones: Vec<GaugeZone>,
    /// Tick mark configuration.
    pub tics: GaugeTics,
    /// Curve flattening tolerance for arc paths.
    pub tolerance: f64,
}

impl GaugeChartSpec {
    /// Creates a gauge specification with the default upper-semicircle arc.
    pub fn new(value: f64, min: f64, max: f64) -> Self {
        Self {
            value,
            min,
            max,
            width: 240.0,
            height: 140.0,
            arc_start: PI,
            arc_end: TAU,
            thickness: 0.2,
            color: None,
            track_color: Color::from_rgb8(0xe5, 0xe7, 0xeb),
            zones: Vec::new(),
            tics: GaugeTics::default(),
            tolerance: 0.1,
        }
    }

    /// Sets the chart size in pixels.
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the arc's start and end angles in radians.
    pub fn with_arc(mut self, arc_start: f64, arc_end: f64) -> Self {
        self.arc_start = arc_start;
        self.arc_end = arc_end;
        self
    }

    /// Sets the value arc color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Sets the colored value ranges.
    pub fn with_zones(mut self, zones: Vec<GaugeZone>) -> Self {
        self.zones = zones;
        self
    }

    /// Sets the tick configuration.
    pub fn with_tics(mut self, tics: GaugeTics) -> Self {
        self.tics = tics;
        self
    }

    /// Builds the track, value arc, zones, and tick marks.
    pub fn build(&self) -> GaugeChartGeometry {
        let (center, radius) = fit_arc(self.width, self.height, self.arc_start, self.arc_end);
        let inner = radius * (1.0 - self.thickness.clamp(0.05, 1.0));

        let track_slice = gauge_arc(self.max, self.min, self.max, self.arc_start, self.arc_end)
            .with_radii(inner, radius);
        let track = slice_path(center, &track_slice, 0.0, self.tolerance);

        let value_slice = gauge_arc(self.value, self.min, self.max, self.arc_start, self.arc_end)
            .with_radii(inner, radius);
        let value = value_slice.value;
        let value_path = slice_path(center, &value_slice, 0.0, self.tolerance);

        let zones = gauge_zones(&self.zones, self.min, self.max, self.arc_start, self.arc_end)
            .into_iter()
            .map(|slice| {
                let slice = slice.with_radii(inner, radius);
                GaugeZoneGeom {
                    path: slice_path(center, &slice, 0.0, self.tolerance),
                    color: slice.color,
                    label: slice.label,
                }
            })
            .collect();

        let ticks = if self.tics.show {
            self.build_ticks(center, inner)
        } else {
            Vec::new()
        };

        GaugeChartGeometry {
            center,
            radius,
            value,
            track,
            track_color: self.track_color,
            value_path,
            value_color: assign_color(self.color, 0),
            zones,
            ticks,
        }
    }

    fn build_ticks(&self, center: Point, inner: f64) -> Vec<GaugeTickGeom> {
        let pairs: Vec<(f64, f64)> = if let Some(values) = &self.tics.values {
            let span = self.max - self.min;
            values
                .iter()
                .map(|&v| {
                    let frac = if span == 0.0 {
                        0.0
                    } else {
                        ((v - self.min) / span).clamp(0.0, 1.0)
                    };
                    (v, self.arc_start + frac * (self.arc_end - self.arc_start))
                })
                .collect()
        } else {
            let rule = match self.tics.step {
                Some(step) => TickRule::Step(step),
                None => TickRule::Count(5),
            };
            gauge_ticks(self.min, self.max, rule, self.arc_start, self.arc_end)
        };

        let values: Vec<f64> = pairs.iter().map(|&(v, _)| v).collect();
        let step = tick_step(&values);
        pairs
            .into_iter()
            .map(|(value, angle)| {
                let (sin, cos) = (angle.sin(), angle.cos());
                let at = |r: f64| Point::new(center.x + r * cos, center.y + r * sin);
                let label = self.tics.show_labels.then(|| match &self.tics.format {
                    Some(format) => format(value),
                    None => format_tick(value, step),
                });
                GaugeTickGeom {
                    value,
                    angle,
                    p0: at(inner - 2.0),
                    p1: at(inner - 8.0),
                    label_pos: at(inner - 18.0),
                    label,
                }
            })
            .collect()
    }
}

/// Fits the gauge arc (plus its hub) into the chart box.
///
/// The arc's unit-space bounds are taken from its endpoints, the axis
/// extremes it crosses, and the hub at the origin; the radius and center are
/// chosen to fill the box with a small margin.
fn fit_arc(width: f64, height: f64, arc_start: f64, arc_end: f64) -> (Point, f64) {
    const MARGIN: f64 = 12.0;

    let (lo, hi) = if arc_end >= arc_start {
        (arc_start, arc_end)
    } else {
        (arc_end, arc_start)
    };
    let mut bounds = Rect::new(0.0, 0.0, 0.0, 0.0);
    let mut include = |angle: f64| {
        let (x, y) = (angle.cos(), angle.sin());
        bounds = Rect::new(
            bounds.x0.min(x),
            bounds.y0.min(y),
            bounds.x1.max(x),
            bounds.y1.max(y),
        );
    };
    include(lo);
    include(hi);
    let mut axis = (lo / FRAC_PI_2).ceil() * FRAC_PI_2;
    while axis <= hi {
        include(axis);
        axis += FRAC_PI_2;
    }

    let avail_w = (width - 2.0 * MARGIN).max(1.0);
    let avail_h = (height - 2.0 * MARGIN).max(1.0);
    let radius = (avail_w / bounds.width().max(1e-9)).min(avail_h / bounds.height().max(1e-9));
    let center = Point::new(
        MARGIN - bounds.x0 * radius + (avail_w - bounds.width() * radius) * 0.5,
        MARGIN - bounds.y0 * radius + (avail_h - bounds.height() * radius) * 0.5,
    );
    (center, radius)
}

/// The built geometry of a gauge chart.
#[derive(Clone, Debug)]
pub struct GaugeChartGeometry {
    /// The arc center (hub).
    pub center: Point,
    /// The outer radius in pixels.
    pub radius: f64,
    /// The displayed value after clamping.
    pub value: f64,
    /// The background track path spanning the full arc.
    pub track: BezPath,
    /// Track color.
    pub track_color: Color,
    /// The value arc path.
    pub value_path: BezPath,
    /// Value arc color.
    pub value_color: Color,
    /// Zone bands in input order.
    pub zones: Vec<GaugeZoneGeom>,
    /// Tick marks in value order.
    pub ticks: Vec<GaugeTickGeom>,
}
