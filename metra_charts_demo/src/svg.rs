// Copyright 2026 the Metra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG dump utilities for `metra_charts_demo`.

use kurbo::{BezPath, Line, Point, Rect};
use peniko::Color;

/// Incrementally builds one SVG document of fixed size.
#[derive(Debug)]
pub(crate) struct SvgWriter {
    body: String,
    width: f64,
    height: f64,
    open_groups: usize,
}

impl SvgWriter {
    pub(crate) fn new(width: f64, height: f64) -> Self {
        Self {
            body: String::new(),
            width,
            height,
            open_groups: 0,
        }
    }

    pub(crate) fn rect(&mut self, rect: Rect, rx: f64, fill: Color) {
        self.body.push_str(&format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}""#,
            rect.x0,
            rect.y0,
            rect.width(),
            rect.height(),
        ));
        if rx > 0.0 {
            self.body.push_str(&format!(r#" rx="{rx}""#));
        }
        write_color_attr(&mut self.body, "fill", fill);
        self.body.push_str("/>\n");
    }

    pub(crate) fn line(&mut self, line: Line, stroke: Color, stroke_width: f64) {
        self.body.push_str(&format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}""#,
            line.p0.x, line.p0.y, line.p1.x, line.p1.y
        ));
        write_color_attr(&mut self.body, "stroke", stroke);
        self.body.push_str(&format!(r#" stroke-width="{stroke_width}"/>"#));
        self.body.push('\n');
    }

    pub(crate) fn path_fill(&mut self, path: &BezPath, fill: Color) {
        if path.is_empty() {
            return;
        }
        self.body.push_str(&format!(r#"<path d="{}""#, path.to_svg()));
        write_color_attr(&mut self.body, "fill", fill);
        self.body.push_str("/>\n");
    }

    pub(crate) fn path_stroke(&mut self, path: &BezPath, stroke: Color, stroke_width: f64) {
        if path.is_empty() {
            return;
        }
        self.body.push_str(&format!(
            r#"<path d="{}" fill="none" stroke-linejoin="round""#,
            path.to_svg()
        ));
        write_color_attr(&mut self.body, "stroke", stroke);
        self.body.push_str(&format!(r#" stroke-width="{stroke_width}"/>"#));
        self.body.push('\n');
    }

    pub(crate) fn circle(&mut self, center: Point, radius: f64, fill: Color) {
        self.body.push_str(&format!(
            r#"<circle cx="{}" cy="{}" r="{radius}""#,
            center.x, center.y
        ));
        write_color_attr(&mut self.body, "fill", fill);
        self.body.push_str("/>\n");
    }

    /// Writes a label with a middle dominant-baseline.
    pub(crate) fn text(&mut self, pos: Point, anchor: &str, font_size: f64, text: &str) {
        self.body.push_str(&format!(
            r##"<text x="{}" y="{}" font-size="{font_size}" font-family="sans-serif" dominant-baseline="middle" text-anchor="{anchor}" fill="#374151">"##,
            pos.x, pos.y
        ));
        self.body.push_str(&escape_xml(text));
        self.body.push_str("</text>\n");
    }

    /// Opens a translated group; pair with [`SvgWriter::close_group`].
    pub(crate) fn open_group(&mut self, dx: f64, dy: f64) {
        self.body
            .push_str(&format!(r#"<g transform="translate({dx} {dy})">"#));
        self.body.push('\n');
        self.open_groups += 1;
    }

    pub(crate) fn close_group(&mut self) {
        debug_assert!(self.open_groups > 0);
        self.body.push_str("</g>\n");
        self.open_groups = self.open_groups.saturating_sub(1);
    }

    pub(crate) fn finish(mut self) -> String {
        while self.open_groups > 0 {
            self.close_group();
        }
        let mut out = String::new();
        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
        out.push_str(&format!(
            r#"viewBox="0 0 {w} {h}" width="{w}" height="{h}" preserveAspectRatio="xMinYMin meet">"#,
            w = self.width,
            h = self.height
        ));
        out.push('\n');
        out.push_str(&self.body);
        out.push_str("</svg>\n");
        out
    }
}

fn write_color_attr(out: &mut String, name: &str, color: Color) {
    let rgba = color.to_rgba8();
    out.push_str(&format!(
        r##" {name}="#{:02x}{:02x}{:02x}""##,
        rgba.r, rgba.g, rgba.b
    ));
    if rgba.a != 255 {
        out.push_str(&format!(
            r#" {name}-opacity="{}""#,
            f64::from(rgba.a) / 255.0
        ));
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
