// Copyright 2026 the Metra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arc and slice building for pie, donut, and gauge charts.
//!
//! Angles are in radians and grow clockwise in the y-down pixel coordinate
//! system, measured from the positive x axis. Slice angles are canonical
//! (slice 0 starts at angle 0); a chart-level rotation is applied only when
//! the slice is converted to a path.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use core::f64::consts::TAU;

use kurbo::{BezPath, Circle, Point, Shape};
use peniko::Color;

use crate::palette::assign_color;
use crate::ticks::{TickRule, tick_values};

/// One angular slice of a pie/donut chart, or a gauge arc.
#[derive(Clone, Debug)]
pub struct Slice {
    /// Start angle in radians.
    pub start_angle: f64,
    /// End angle in radians; never less than `start_angle`.
    pub end_angle: f64,
    /// Inner radius in pixels (`0` for a pie slice).
    pub inner_radius: f64,
    /// Outer radius in pixels.
    pub outer_radius: f64,
    /// Fill color.
    pub color: Color,
    /// Category label.
    pub label: String,
    /// The source value this slice represents.
    pub value: f64,
}

impl Slice {
    /// The angular span of this slice in radians.
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// Returns the slice with different radii, keeping its angles and style.
    pub fn with_radii(mut self, inner: f64, outer: f64) -> Self {
        self.inner_radius = inner;
        self.outer_radius = outer;
        self
    }
}

/// Builds slices covering a full `2π` sweep, in input order.
///
/// Each span is `2π · value / Σ values`; slice 0 starts at angle 0 and the
/// start angles are monotonically increasing. Negative and non-finite values
/// contribute a zero span. A zero-sum or empty input produces no slices
/// rather than `NaN` angles. `inner_ratio` is the donut hole as a fraction of
/// `outer_radius` (`0` for a pie).
pub fn slices(
    values: &[f64],
    labels: &[String],
    colors: Option<&[Color]>,
    inner_ratio: f64,
    outer_radius: f64,
) -> Vec<Slice> {
    let weight = |v: f64| if v.is_finite() { v.max(0.0) } else { 0.0 };
    let total: f64 = values.iter().copied().map(weight).sum();
    if !(total > 0.0) {
        return Vec::new();
    }

    let inner_radius = outer_radius * inner_ratio.clamp(0.0, 0.99);
    let mut cursor = 0.0;
    values
        .iter()
        .copied()
        .enumerate()
        .map(|(i, v)| {
            let span = TAU * weight(v) / total;
            let start_angle = cursor;
            cursor += span;
            Slice {
                start_angle,
                end_angle: cursor,
                inner_radius,
                outer_radius,
                color: assign_color(colors.and_then(|c| c.get(i)).copied(), i),
                label: labels.get(i).cloned().unwrap_or_default(),
                value: v,
            }
        })
        .collect()
}

/// Converts a slice into an annular (or wedge) fill path around `center`.
///
/// `rotation` offsets the canonical slice angles, e.g. `-π/2` to start at
/// 12 o'clock. A zero-sweep slice yields an empty path.
pub fn slice_path(center: Point, slice: &Slice, rotation: f64, tolerance: f64) -> BezPath {
    let sweep = slice.sweep();
    if sweep <= 0.0 {
        return BezPath::new();
    }
    let circle = Circle::new(center, slice.outer_radius);
    let segment = circle.segment(slice.inner_radius, slice.start_angle + rotation, sweep);
    segment.path_elements(tolerance).collect()
}

/// Builds the value arc for a gauge.
///
/// The fill angle is `arc_start + (v - min) / (max - min) · (arc_end -
/// arc_start)` with `v` clamped into `[min, max]`, so out-of-range values
/// never extrapolate past the configured arc. A collapsed range (`min ==
/// max`) pins the arc to `arc_start`. Radii are normalized (`0..1`); use
/// [`Slice::with_radii`] to size the arc.
pub fn gauge_arc(value: f64, min: f64, max: f64, arc_start: f64, arc_end: f64) -> Slice {
    let clamped = value.clamp(min.min(max), max.max(min));
    let frac = value_fraction(clamped, min, max);
    Slice {
        start_angle: arc_start,
        end_angle: arc_start + frac * (arc_end - arc_start),
        inner_radius: 0.0,
        outer_radius: 1.0,
        color: assign_color(None, 0),
        label: String::new(),
        value: clamped,
    }
}

/// A colored value range rendered beneath a gauge's value arc.
#[derive(Clone, Debug)]
pub struct GaugeZone {
    /// Zone start in data units.
    pub start: f64,
    /// Zone end in data units.
    pub end: f64,
    /// Zone color.
    pub color: Color,
    /// Optional zone label.
    pub label: Option<String>,
}

/// Builds clamped zone slices for a gauge, in input order.
///
/// Each zone's bounds are clamped into `[min, max]`; zones that collapse to
/// nothing after clamping are dropped. Radii are normalized as in
/// [`gauge_arc`].
pub fn gauge_zones(
    zones: &[GaugeZone],
    min: f64,
    max: f64,
    arc_start: f64,
    arc_end: f64,
) -> Vec<Slice> {
    let lo = min.min(max);
    let hi = max.max(min);
    zones
        .iter()
        .filter_map(|zone| {
            let z0 = zone.start.clamp(lo, hi);
            let z1 = zone.end.clamp(lo, hi);
            if !(z1 > z0) {
                return None;
            }
            Some(Slice {
                start_angle: arc_start + value_fraction(z0, min, max) * (arc_end - arc_start),
                end_angle: arc_start + value_fraction(z1, min, max) * (arc_end - arc_start),
                inner_radius: 0.0,
                outer_radius: 1.0,
                color: zone.color,
                label: zone.label.clone().unwrap_or_default(),
                value: z1,
            })
        })
        .collect()
}

/// Returns `(value, angle)` pairs for gauge tick marks.
///
/// Tick values come from the shared tick generator over the gauge's value
/// domain; each value maps to an angle rather than a linear pixel position.
pub fn gauge_ticks(
    min: f64,
    max: f64,
    rule: TickRule,
    arc_start: f64,
    arc_end: f64,
) -> Vec<(f64, f64)> {
    tick_values(min, max, rule)
        .into_iter()
        .map(|v| {
            let frac = value_fraction(v, min, max).clamp(0.0, 1.0);
            (v, arc_start + frac * (arc_end - arc_start))
        })
        .collect()
}

fn value_fraction(value: f64, min: f64, max: f64) -> f64 {
    let span = max - min;
    if span == 0.0 {
        return 0.0;
    }
    (value - min) / span
}
