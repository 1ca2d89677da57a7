// Copyright 2026 the Metra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart catalog demos for `metra_charts`.
mod html;
mod svg;

use kurbo::{Line, Point, Rect};
use peniko::Color;

use metra_charts::{
    AreaChartSpec, AxisGeometry, BarChartSpec, GaugeChartSpec, GaugeTics, GaugeZone,
    LegendLayout, LineChartSpec, PieChartSpec, ProgressSpec, Series, TrendDirection, TrendSpec,
    format_tick,
};

use svg::SvgWriter;

const GRID: Color = Color::from_rgb8(0xe5, 0xe7, 0xeb);
const TEXT: Color = Color::from_rgb8(0x37, 0x41, 0x51);
const UP: Color = Color::from_rgb8(0x10, 0xb9, 0x81);
const DOWN: Color = Color::from_rgb8(0xef, 0x44, 0x44);

fn main() {
    let sections = vec![
        grouped_bar_demo(),
        stacked_bar_demo(),
        horizontal_bar_demo(),
        line_demo(),
        smooth_line_demo(),
        area_demo(),
        stacked_area_demo(),
        pie_demo(),
        donut_demo(),
        gauge_demo(),
        trend_demo(),
        progress_demo(),
    ];

    let html = html::render_report("Metra charts catalog", &sections);
    std::fs::write("metra_charts_demo.html", html).expect("write metra_charts_demo.html");
    println!("wrote metra_charts_demo.html");
}

fn labels(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| (*n).to_string()).collect()
}

fn quarter_series() -> Vec<Series> {
    vec![
        Series::new("Revenue", vec![120.0, 200.0, 150.0, 80.0]),
        Series::new("Cost", vec![90.0, 130.0, 70.0, 60.0]),
    ]
}

fn quarters() -> Vec<String> {
    labels(&["Q1", "Q2", "Q3", "Q4"])
}

/// Draws grid lines and tick labels for a value axis.
///
/// Left axes (horizontal grid lines) get labels along the left edge; bottom
/// axes get them under the plot.
fn draw_axis(w: &mut SvgWriter, plot: Rect, axis: &AxisGeometry) {
    for line in &axis.grid {
        w.line(*line, GRID, 1.0);
    }
    let horizontal_grid = axis.grid.first().is_some_and(|l| l.p0.y == l.p1.y);
    for tick in &axis.ticks {
        if horizontal_grid {
            w.text(Point::new(plot.x0 - 6.0, tick.position), "end", 10.0, &tick.label);
        } else {
            w.text(
                Point::new(tick.position, plot.y1 + 12.0),
                "middle",
                10.0,
                &tick.label,
            );
        }
    }
}

fn draw_legend(w: &mut SvgWriter, legend: &LegendLayout, dx: f64, dy: f64) {
    if legend.entries.is_empty() {
        return;
    }
    w.open_group(dx, dy);
    for entry in &legend.entries {
        w.rect(entry.swatch, 2.0, entry.color);
        w.text(
            Point::new(entry.label_x, entry.label_y),
            "start",
            10.0,
            &entry.label,
        );
    }
    w.close_group();
}

fn bar_section(title: &str, spec: &BarChartSpec) -> html::HtmlSection {
    let geom = spec.build();
    let mut w = SvgWriter::new(spec.width, spec.height + 14.0 + geom.legend.size.height);
    draw_axis(&mut w, geom.plot, &geom.axis);
    for bar in &geom.bars {
        w.rect(bar.rect, 0.0, bar.color);
    }
    draw_legend(&mut w, &geom.legend, geom.plot.x0, spec.height + 6.0);
    html::HtmlSection {
        title: title.to_string(),
        svg: w.finish(),
    }
}

fn grouped_bar_demo() -> html::HtmlSection {
    bar_section(
        "Grouped bar chart",
        &BarChartSpec::new(quarter_series(), quarters()),
    )
}

fn stacked_bar_demo() -> html::HtmlSection {
    bar_section(
        "Stacked bar chart",
        &BarChartSpec::new(quarter_series(), quarters()).stacked(),
    )
}

fn horizontal_bar_demo() -> html::HtmlSection {
    bar_section(
        "Horizontal bar chart",
        &BarChartSpec::new(
            vec![Series::new("Headcount", vec![24.0, 31.0, 18.0, 12.0])],
            labels(&["Eng", "Sales", "Support", "Ops"]),
        )
        .horizontal(),
    )
}

fn line_section(title: &str, spec: &LineChartSpec, markers: bool) -> html::HtmlSection {
    let geom = spec.build();
    let mut w = SvgWriter::new(spec.width, spec.height + 14.0 + geom.legend.size.height);
    draw_axis(&mut w, geom.plot, &geom.axis);
    for line in &geom.lines {
        w.path_stroke(&line.path, line.color, 2.0);
        if markers {
            for point in &line.points {
                w.circle(*point, 2.5, line.color);
            }
        }
    }
    draw_legend(&mut w, &geom.legend, geom.plot.x0, spec.height + 6.0);
    html::HtmlSection {
        title: title.to_string(),
        svg: w.finish(),
    }
}

fn line_demo() -> html::HtmlSection {
    line_section(
        "Line chart",
        &LineChartSpec::new(quarter_series(), quarters()),
        true,
    )
}

fn smooth_line_demo() -> html::HtmlSection {
    line_section(
        "Smoothed line chart",
        &LineChartSpec::new(
            vec![Series::new("Latency p95 (ms)", vec![42.0, 38.0, 55.0, 47.0, 61.0, 44.0])],
            labels(&["Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]),
        )
        .smooth(),
        false,
    )
}

fn area_section(title: &str, spec: &AreaChartSpec) -> html::HtmlSection {
    let geom = spec.build();
    let mut w = SvgWriter::new(spec.width, spec.height + 14.0 + geom.legend.size.height);
    draw_axis(&mut w, geom.plot, &geom.axis);
    for area in &geom.areas {
        w.path_fill(&area.fill, area.color.with_alpha(0.4));
        w.path_stroke(&area.line, area.color, 2.0);
    }
    draw_legend(&mut w, &geom.legend, geom.plot.x0, spec.height + 6.0);
    html::HtmlSection {
        title: title.to_string(),
        svg: w.finish(),
    }
}

fn area_demo() -> html::HtmlSection {
    area_section(
        "Area chart",
        &AreaChartSpec::new(
            vec![Series::new("Sessions", vec![320.0, 410.0, 380.0, 520.0, 450.0])],
            labels(&["Jan", "Feb", "Mar", "Apr", "May"]),
        ),
    )
}

fn stacked_area_demo() -> html::HtmlSection {
    area_section(
        "Stacked area chart",
        &AreaChartSpec::new(
            vec![
                Series::new("Organic", vec![120.0, 140.0, 160.0, 180.0]),
                Series::new("Paid", vec![80.0, 90.0, 70.0, 110.0]),
                Series::new("Referral", vec![40.0, 30.0, 50.0, 45.0]),
            ],
            quarters(),
        )
        .stacked(),
    )
}

fn pie_section(title: &str, spec: &PieChartSpec) -> html::HtmlSection {
    let geom = spec.build();
    let mut w = SvgWriter::new(spec.width, spec.height + 14.0 + geom.legend.size.height);
    for slice in &geom.slices {
        w.path_fill(&slice.path, slice.slice.color);
    }
    draw_legend(&mut w, &geom.legend, 8.0, spec.height + 6.0);
    html::HtmlSection {
        title: title.to_string(),
        svg: w.finish(),
    }
}

fn pie_demo() -> html::HtmlSection {
    pie_section(
        "Pie chart",
        &PieChartSpec::new(
            vec![30.0, 25.0, 20.0, 15.0, 10.0],
            labels(&["Chrome", "Safari", "Edge", "Firefox", "Other"]),
        ),
    )
}

fn donut_demo() -> html::HtmlSection {
    pie_section(
        "Donut chart",
        &PieChartSpec::new(
            vec![40.0, 35.0, 25.0],
            labels(&["Desktop", "Mobile", "Tablet"]),
        )
        .donut(),
    )
}

fn gauge_demo() -> html::HtmlSection {
    let spec = GaugeChartSpec::new(72.0, 0.0, 100.0)
        .with_zones(vec![
            GaugeZone {
                start: 0.0,
                end: 60.0,
                color: Color::from_rgb8(0xd1, 0xfa, 0xe5),
                label: Some("ok".to_string()),
            },
            GaugeZone {
                start: 60.0,
                end: 85.0,
                color: Color::from_rgb8(0xfe, 0xf3, 0xc7),
                label: Some("warn".to_string()),
            },
            GaugeZone {
                start: 85.0,
                end: 100.0,
                color: Color::from_rgb8(0xfe, 0xe2, 0xe2),
                label: Some("high".to_string()),
            },
        ])
        .with_tics(GaugeTics {
            step: Some(20.0),
            ..GaugeTics::default()
        });
    let geom = spec.build();

    let mut w = SvgWriter::new(spec.width, spec.height);
    w.path_fill(&geom.track, geom.track_color);
    for zone in &geom.zones {
        w.path_fill(&zone.path, zone.color);
    }
    w.path_fill(&geom.value_path, geom.value_color);
    for tick in &geom.ticks {
        w.line(Line::new(tick.p0, tick.p1), TEXT, 1.0);
        if let Some(label) = &tick.label {
            w.text(tick.label_pos, "middle", 9.0, label);
        }
    }
    w.text(
        Point::new(geom.center.x, geom.center.y - 14.0),
        "middle",
        18.0,
        &format_tick(geom.value, 1.0),
    );
    html::HtmlSection {
        title: "Gauge chart".to_string(),
        svg: w.finish(),
    }
}

fn trend_demo() -> html::HtmlSection {
    let spec = TrendSpec::new(vec![
        1100.0, 1180.0, 1140.0, 1225.0, 1198.0, 1260.0, 1284.0,
    ]);
    let geom = spec.build();
    let color = match geom.direction {
        TrendDirection::Up => UP,
        TrendDirection::Down => DOWN,
        TrendDirection::Flat => TEXT,
    };

    let mut w = SvgWriter::new(260.0, 48.0);
    w.open_group(12.0, 8.0);
    w.path_stroke(&geom.path, color, 1.5);
    w.close_group();
    w.open_group(150.0, 24.0);
    w.path_fill(&geom.arrow, color);
    w.close_group();
    if let Some(percent) = geom.percent {
        w.text(
            Point::new(166.0, 24.0),
            "start",
            12.0,
            &format!("{percent:+.1}%"),
        );
    }
    html::HtmlSection {
        title: "Trend indicator".to_string(),
        svg: w.finish(),
    }
}

fn progress_demo() -> html::HtmlSection {
    let geom = ProgressSpec::new(64.0, 0.0, 100.0).with_size(220.0, 10.0).build();
    let mut w = SvgWriter::new(280.0, 24.0);
    w.open_group(4.0, 7.0);
    w.rect(geom.track, geom.corner_radius, geom.track_color);
    w.rect(geom.fill, geom.corner_radius, geom.color);
    w.close_group();
    w.text(
        Point::new(232.0, 12.0),
        "start",
        11.0,
        &format!("{:.0}%", geom.fraction * 100.0),
    );
    html::HtmlSection {
        title: "Progress bar".to_string(),
        svg: w.finish(),
    }
}
