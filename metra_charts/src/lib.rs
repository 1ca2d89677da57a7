// Copyright 2026 the Metra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart geometry and scale engine for the Metra component library.
//!
//! This crate turns raw numeric series into pixel-space geometry:
//! - **Scales** map data values into pixel coordinates (linear, band, point).
//! - **Ticks** produce evenly spaced axis/gridline values from a step or a
//!   target count.
//! - **Stacking** computes per-category running totals for stacked bars/areas.
//! - **Path builders** convert point sequences into line/area Bézier paths.
//! - **Sector builders** convert categorical values into pie/donut slices and
//!   bounded gauge arcs.
//! - **Palette and legend** assign deterministic fallback colors and lay out
//!   wrapped legend rows.
//!
//! Every function is a pure mapping from an immutable chart specification to
//! geometry values; nothing here holds state across calls, performs I/O, or
//! depends on render order. The view layer that re-invokes the engine on data
//! change is out of scope, as are text shaping, animation, and theming.

#![no_std]

extern crate alloc;

mod area_chart;
mod axis;
mod bar_chart;
#[cfg(test)]
mod chart_tests;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod gauge_chart;
mod indicator;
mod legend;
mod line_chart;
mod palette;
mod path;
mod pie_chart;
mod scale;
mod sector;
mod series;
mod stack;
mod ticks;

pub use area_chart::{AreaChartGeometry, AreaChartSpec, SeriesArea};
pub use axis::{AxisGeometry, Orientation, value_axis};
pub use bar_chart::{BarChartGeometry, BarChartSpec, BarGeom};
pub use format::format_tick;
pub use gauge_chart::{
    GaugeChartGeometry, GaugeChartSpec, GaugeTickGeom, GaugeTics, GaugeZoneGeom,
};
pub use indicator::{
    ProgressGeometry, ProgressSpec, TrendDirection, TrendGeometry, TrendSpec,
};
pub use legend::{
    HeuristicTextMeasurer, LegendEntry, LegendLayout, LegendSpec, PlacedLegendEntry, TextMeasurer,
};
pub use line_chart::{LineChartGeometry, LineChartSpec, SeriesLine};
pub use palette::{DEFAULT_PALETTE, assign_color};
pub use path::{area_path, band_path, line_path};
pub use pie_chart::{PieChartGeometry, PieChartSpec, SliceGeom};
pub use scale::{ScaleBand, ScaleLinear, ScalePoint, value_extent};
pub use sector::{GaugeZone, Slice, gauge_arc, gauge_ticks, gauge_zones, slice_path, slices};
pub use series::{Series, SeriesFrame};
pub use stack::{StackFrame, stack};
pub use ticks::{Tick, TickRule, tick_step, tick_values, ticks};
