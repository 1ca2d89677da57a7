// Copyright 2026 the Metra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scales mapping data domains into pixel ranges.
//!
//! The engine is linear-only: a continuous [`ScaleLinear`] for values, plus
//! discrete [`ScaleBand`]/[`ScalePoint`] scales for category positions along
//! the other axis.

extern crate alloc;

use crate::series::SeriesFrame;
use crate::stack::stack;

/// A linear mapping from a continuous domain to a continuous pixel range.
#[derive(Clone, Copy, Debug)]
pub struct ScaleLinear {
    domain: (f64, f64),
    range: (f64, f64),
}

impl ScaleLinear {
    /// Creates a new scale mapping `domain` values to `range` positions.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Maps a value from domain space into range space.
    ///
    /// A degenerate domain (`min == max`, e.g. a single-point or constant
    /// series) maps every input to the midpoint of the range instead of
    /// dividing by zero.
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = d1 - d0;
        if denom == 0.0 {
            return 0.5 * (r0 + r1);
        }
        let t = (x - d0) / denom;
        r0 + t * (r1 - r0)
    }

    /// Returns the minimum of the configured domain (as authored).
    pub fn domain_min(&self) -> f64 {
        self.domain.0
    }

    /// Returns the maximum of the configured domain (as authored).
    pub fn domain_max(&self) -> f64 {
        self.domain.1
    }
}

/// Infers the default value domain for a frame.
///
/// The domain is `[min(0, data minimum), max(0, data maximum)]`, where the
/// maximum also considers stacked per-category totals when `stacked` is set.
/// Negative minima extend the domain rather than being clamped away, so
/// mixed-sign series render correctly. Non-finite samples are ignored; an
/// empty frame yields `(0.0, 0.0)`.
pub fn value_extent(frame: &SeriesFrame, stacked: bool) -> (f64, f64) {
    let mut min = 0.0_f64;
    let mut max = 0.0_f64;

    for series in frame.series() {
        for &v in &series.data {
            if !v.is_finite() {
                continue;
            }
            min = min.min(v);
            max = max.max(v);
        }
    }

    if stacked {
        for &t in &stack(frame).totals {
            if !t.is_finite() {
                continue;
            }
            min = min.min(t);
            max = max.max(t);
        }
    }

    (min, max)
}

/// A discrete band scale for categorical charts.
///
/// Each category occupies a band of equal width, with configurable padding
/// between bands (inner) and at the range edges (outer), both in band units.
#[derive(Clone, Copy, Debug)]
pub struct ScaleBand {
    range: (f64, f64),
    count: usize,
    padding_inner: f64,
    padding_outer: f64,
}

impl ScaleBand {
    /// Creates a new band scale covering `count` bands over `range`.
    pub fn new(range: (f64, f64), count: usize) -> Self {
        Self {
            range,
            count,
            padding_inner: 0.1,
            padding_outer: 0.1,
        }
    }

    /// Sets inner and outer padding in band units.
    pub fn with_padding(mut self, inner: f64, outer: f64) -> Self {
        self.padding_inner = inner.max(0.0);
        self.padding_outer = outer.max(0.0);
        self
    }

    /// Returns the computed band width.
    pub fn band_width(&self) -> f64 {
        let (r0, r1) = self.range;
        let n = self.count as f64;
        if n <= 0.0 {
            return 0.0;
        }
        let span = (r1 - r0).abs();
        let denom = n + self.padding_inner * (n - 1.0) + 2.0 * self.padding_outer;
        if denom == 0.0 { 0.0 } else { span / denom }
    }

    /// Returns the number of bands.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the position of the leading edge of the band at `index`.
    pub fn position(&self, index: usize) -> f64 {
        let (r0, r1) = self.range;
        let bw = self.band_width();
        let step = bw * (1.0 + self.padding_inner);
        let start = if r1 >= r0 { r0 } else { r1 };
        start + bw * self.padding_outer + step * index as f64
    }

    /// Returns the center of the band at `index`.
    pub fn center(&self, index: usize) -> f64 {
        self.position(index) + 0.5 * self.band_width()
    }
}

/// A discrete point scale (like band without width), used to place line/area
/// vertices at evenly spaced category positions.
#[derive(Clone, Copy, Debug)]
pub struct ScalePoint {
    range: (f64, f64),
    count: usize,
    padding: f64,
}

impl ScalePoint {
    /// Creates a new point scale with no outer padding, so the first and last
    /// categories sit on the range endpoints.
    pub fn new(range: (f64, f64), count: usize) -> Self {
        Self {
            range,
            count,
            padding: 0.0,
        }
    }

    /// Sets the outer padding in point steps.
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding.max(0.0);
        self
    }

    fn step(&self) -> f64 {
        let (r0, r1) = self.range;
        let n = self.count as f64;
        if n <= 1.0 {
            return 0.0;
        }
        let span = (r1 - r0).abs();
        let denom = (n - 1.0) + 2.0 * self.padding;
        if denom == 0.0 { 0.0 } else { span / denom }
    }

    /// Returns the position for the point at `index`.
    ///
    /// A single-point scale places its only point at the range midpoint.
    pub fn position(&self, index: usize) -> f64 {
        let (r0, r1) = self.range;
        if self.count <= 1 {
            return 0.5 * (r0 + r1);
        }
        let step = self.step();
        let start = if r1 >= r0 { r0 } else { r1 };
        start + self.padding * step + step * index as f64
    }
}
