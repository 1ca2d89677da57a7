// Copyright 2026 the Metra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Value-axis geometry: ticks plus grid lines spanning the plot area.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{Line, Rect};

use crate::scale::ScaleLinear;
use crate::ticks::{Tick, TickRule, ticks};

/// The plot rectangle for a chart of the given outer size.
///
/// Margins leave room for tick labels on the left and bottom edges.
pub(crate) fn plot_rect(width: f64, height: f64) -> Rect {
    Rect::new(40.0, 12.0, (width - 12.0).max(40.0), (height - 28.0).max(12.0))
}

/// Which side of the plot a value axis runs along.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// Ticks along the left edge; grid lines run horizontally.
    Left,
    /// Ticks along the bottom edge; grid lines run vertically.
    Bottom,
}

/// Ticks and grid lines for one value axis.
#[derive(Clone, Debug)]
pub struct AxisGeometry {
    /// Axis ticks with pixel positions and formatted labels.
    pub ticks: Vec<Tick>,
    /// One grid line per tick, spanning the plot rectangle.
    pub grid: Vec<Line>,
}

/// Builds a value axis for `scale` inside the plot rectangle.
///
/// The scale is expected to map into the plot's vertical extent for
/// [`Orientation::Left`] and its horizontal extent for
/// [`Orientation::Bottom`]; each tick's position is reused as the grid line
/// coordinate on that axis.
pub fn value_axis(
    scale: &ScaleLinear,
    rule: TickRule,
    orientation: Orientation,
    plot: Rect,
) -> AxisGeometry {
    let ticks = ticks(scale, rule);
    let grid = ticks
        .iter()
        .map(|tick| match orientation {
            Orientation::Left => Line::new((plot.x0, tick.position), (plot.x1, tick.position)),
            Orientation::Bottom => Line::new((tick.position, plot.y0), (tick.position, plot.y1)),
        })
        .collect();
    AxisGeometry { ticks, grid }
}
