// Copyright 2026 the Metra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Line, area, and band path building.
//!
//! Paths are built in pixel space from already-scaled points and returned as
//! [`kurbo::BezPath`]; callers serialize them into path-command strings.

extern crate alloc;

use kurbo::{BezPath, Point};

/// Builds a polyline (or smoothed curve) through `points` in category order.
///
/// With `smooth`, interior points become quadratic control points whose
/// segments join at midpoints, ending exactly on the last point. A single
/// point produces a degenerate move-only path; empty input produces an empty
/// path.
pub fn line_path(points: &[Point], smooth: bool) -> BezPath {
    let mut p = BezPath::new();
    let Some(&first) = points.first() else {
        return p;
    };
    p.move_to(first);

    if smooth && points.len() > 2 {
        let last = points.len() - 1;
        for i in 1..last {
            if i + 1 == last {
                p.quad_to(points[i], points[last]);
            } else {
                p.quad_to(points[i], points[i].midpoint(points[i + 1]));
            }
        }
    } else {
        for &pt in &points[1..] {
            p.line_to(pt);
        }
    }
    p
}

/// Builds a closed area path: the line through `points`, then down to the
/// baseline under the last point, back under the first point, and close.
///
/// The baseline is the zero line for plain areas, or the previous stack's top
/// when stacked (see [`band_path`] for the stacked case with a non-flat
/// baseline). A single point yields a zero-width area without panicking.
pub fn area_path(points: &[Point], baseline_y: f64, smooth: bool) -> BezPath {
    let Some(&first) = points.first() else {
        return BezPath::new();
    };
    let &last = points.last().unwrap_or(&first);

    let mut p = line_path(points, smooth);
    p.line_to(Point::new(last.x, baseline_y));
    p.line_to(Point::new(first.x, baseline_y));
    p.close_path();
    p
}

/// Builds the closed region between two aligned polylines: forward along
/// `top`, backward along `bottom`, then close.
///
/// Mismatched lengths truncate to the shorter polyline. Used for stacked
/// areas, where the previous series' cumulative top is the baseline.
pub fn band_path(top: &[Point], bottom: &[Point]) -> BezPath {
    let n = top.len().min(bottom.len());
    let mut p = BezPath::new();
    if n == 0 {
        return p;
    }

    p.move_to(bottom[0]);
    for &pt in &top[..n] {
        p.line_to(pt);
    }
    for &pt in bottom[..n].iter().rev() {
        p.line_to(pt);
    }
    p.close_path();
    p
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;
    use alloc::vec::Vec;

    use kurbo::{PathEl, Shape};

    use super::*;

    #[test]
    fn line_path_moves_then_lines_in_order() {
        let pts = vec![
            Point::new(0.0, 10.0),
            Point::new(5.0, 2.0),
            Point::new(10.0, 6.0),
        ];
        let path = line_path(&pts, false);
        let els: Vec<PathEl> = path.into_iter().collect();
        assert_eq!(els.len(), 3);
        assert!(matches!(els[0], PathEl::MoveTo(p) if p == pts[0]));
        assert!(matches!(els[1], PathEl::LineTo(p) if p == pts[1]));
        assert!(matches!(els[2], PathEl::LineTo(p) if p == pts[2]));
    }

    #[test]
    fn smoothed_path_ends_on_the_last_point() {
        let pts = vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 8.0),
            Point::new(20.0, 4.0),
            Point::new(30.0, 9.0),
        ];
        let path = line_path(&pts, true);
        let els: Vec<PathEl> = path.into_iter().collect();
        let PathEl::QuadTo(_, end) = els[els.len() - 1] else {
            panic!("expected a quad segment");
        };
        assert_eq!(end, pts[3]);
    }

    #[test]
    fn single_point_does_not_panic() {
        let pts = vec![Point::new(3.0, 4.0)];
        let line = line_path(&pts, true);
        assert_eq!(line.elements().len(), 1);
        let area = area_path(&pts, 10.0, false);
        assert!(area.elements().len() >= 3);
    }

    #[test]
    fn empty_input_yields_empty_paths() {
        assert!(line_path(&[], false).is_empty());
        assert!(area_path(&[], 0.0, false).is_empty());
        assert!(band_path(&[], &[]).is_empty());
    }

    #[test]
    fn area_path_closes_onto_the_baseline() {
        let pts = vec![Point::new(0.0, 4.0), Point::new(10.0, 2.0)];
        let path = area_path(&pts, 20.0, false);
        let bbox = path.bounding_box();
        assert_eq!(bbox.y1, 20.0);
        assert_eq!(bbox.x0, 0.0);
        assert_eq!(bbox.x1, 10.0);
        assert!(matches!(
            path.elements().last(),
            Some(PathEl::ClosePath)
        ));
    }

    #[test]
    fn band_path_walks_top_forward_and_bottom_backward() {
        let top = vec![Point::new(0.0, 2.0), Point::new(10.0, 3.0)];
        let bottom = vec![Point::new(0.0, 8.0), Point::new(10.0, 7.0)];
        let path = band_path(&top, &bottom);
        let els: Vec<PathEl> = path.into_iter().collect();
        assert!(matches!(els[0], PathEl::MoveTo(p) if p == bottom[0]));
        assert!(matches!(els[els.len() - 2], PathEl::LineTo(p) if p == bottom[0]));
        assert!(matches!(els[els.len() - 1], PathEl::ClosePath));
    }
}
