// Copyright 2026 the Metra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cross-module assembly tests.

extern crate std;

use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;

use kurbo::Shape;

use crate::{
    AreaChartSpec, BarChartSpec, DEFAULT_PALETTE, GaugeChartSpec, LineChartSpec, PieChartSpec,
    Series, TickRule,
};

fn labels(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

fn quarter_series() -> Vec<Series> {
    vec![
        Series::new("Revenue", vec![120.0, 200.0, 150.0, 80.0]),
        Series::new("Cost", vec![90.0, 130.0, 70.0, 60.0]),
    ]
}

#[test]
fn building_twice_yields_identical_geometry() {
    let spec = BarChartSpec::new(quarter_series(), labels(&["Q1", "Q2", "Q3", "Q4"]));
    let a = spec.build();
    let b = spec.build();
    assert_eq!(a.bars.len(), b.bars.len());
    for (x, y) in a.bars.iter().zip(&b.bars) {
        assert_eq!(x.rect, y.rect);
        assert_eq!(x.color, y.color);
    }
    for (x, y) in a.axis.ticks.iter().zip(&b.axis.ticks) {
        assert_eq!(x.label, y.label);
        assert_eq!(x.position, y.position);
    }
}

#[test]
fn bars_stay_inside_the_plot() {
    let geom = BarChartSpec::new(quarter_series(), labels(&["Q1", "Q2", "Q3", "Q4"])).build();
    for bar in &geom.bars {
        assert!(bar.rect.x0 >= geom.plot.x0 - 1e-9);
        assert!(bar.rect.x1 <= geom.plot.x1 + 1e-9);
        assert!(bar.rect.y0 >= geom.plot.y0 - 1e-9);
        assert!(bar.rect.y1 <= geom.plot.y1 + 1e-9);
    }
}

#[test]
fn unstyled_series_take_palette_colors_in_order() {
    let geom = LineChartSpec::new(quarter_series(), labels(&["Q1", "Q2", "Q3", "Q4"])).build();
    assert_eq!(geom.lines[0].color, DEFAULT_PALETTE[0]);
    assert_eq!(geom.lines[1].color, DEFAULT_PALETTE[1]);
    assert_eq!(geom.legend.entries[0].color, DEFAULT_PALETTE[0]);
}

#[test]
fn stacked_bar_and_area_agree_on_the_total_extent() {
    let series = quarter_series();
    let cats = labels(&["Q1", "Q2", "Q3", "Q4"]);
    let bars = BarChartSpec::new(series.clone(), cats.clone()).stacked().build();
    let areas = AreaChartSpec::new(series, cats).stacked().build();

    // Q2 has the largest total (330); both charts put it at the same
    // fraction of their identical plot heights.
    let bar_top = bars
        .bars
        .iter()
        .map(|b| b.rect.y0)
        .fold(f64::INFINITY, f64::min);
    let area_top = areas.areas[1].fill.bounding_box().y0;
    assert!((bar_top - area_top).abs() < 1e-6);
}

#[test]
fn pie_legend_mirrors_slice_labels() {
    let geom = PieChartSpec::new(
        vec![40.0, 35.0, 25.0],
        labels(&["Desktop", "Mobile", "Tablet"]),
    )
    .build();
    assert_eq!(geom.slices.len(), geom.legend.entries.len());
    for (slice, entry) in geom.slices.iter().zip(&geom.legend.entries) {
        assert_eq!(slice.slice.label, entry.label);
        assert_eq!(slice.slice.color, entry.color);
    }
}

#[test]
fn gauge_tick_labels_match_axis_formatting() {
    let gauge = GaugeChartSpec::new(60.0, 0.0, 100.0).build();
    let chart = BarChartSpec::new(
        vec![Series::new("a", vec![100.0])],
        labels(&["x"]),
    )
    .with_tick_rule(TickRule::Count(5))
    .build();
    let gauge_labels: Vec<_> = gauge
        .ticks
        .iter()
        .filter_map(|t| t.label.clone())
        .collect();
    let axis_labels: Vec<_> = chart.axis.ticks.iter().map(|t| t.label.clone()).collect();
    assert_eq!(gauge_labels, axis_labels);
}

#[test]
fn nan_values_do_not_poison_the_scale() {
    let series = vec![Series::new("a", vec![1.0, f64::NAN, 3.0])];
    let geom = LineChartSpec::new(series, labels(&["a", "b", "c"])).build();
    let max_tick = geom
        .axis
        .ticks
        .iter()
        .map(|t| t.value)
        .fold(f64::NEG_INFINITY, f64::max);
    assert!(max_tick.is_finite());
    assert!(max_tick <= 3.0 + 1e-9);
}

#[test]
fn single_category_charts_build_without_panic() {
    let cats = labels(&["only"]);
    let series = vec![Series::new("a", vec![7.0])];
    let bars = BarChartSpec::new(series.clone(), cats.clone()).build();
    let lines = LineChartSpec::new(series.clone(), cats.clone()).build();
    let areas = AreaChartSpec::new(series, cats).build();
    assert_eq!(bars.bars.len(), 1);
    assert_eq!(lines.lines[0].points.len(), 1);
    assert_eq!(areas.areas.len(), 1);
}
