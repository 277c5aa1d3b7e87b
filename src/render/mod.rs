// SPDX-FileCopyrightText: 2026 The Liana Authors
// SPDX-License-Identifier: MIT

//! Drawable output: SVG path data and arrowhead geometry.
//!
//! Coordinates are written in container-local space with at most two decimal
//! places and no trailing zeros, so unchanged geometry always serializes to
//! the same string.

use crate::model::{Point, Side};
use crate::route::{PathCommand, PathData};

/// Serializes a path into SVG `d` attribute data
/// (`M`/`L`/`Q` commands, absolute coordinates).
pub fn svg_path_data(path: &PathData) -> String {
    let mut out = String::new();
    for command in path.commands() {
        if !out.is_empty() {
            out.push(' ');
        }
        match command {
            PathCommand::MoveTo(p) => {
                out.push('M');
                push_point(&mut out, *p);
            }
            PathCommand::LineTo(p) => {
                out.push('L');
                push_point(&mut out, *p);
            }
            PathCommand::QuadTo { control, to } => {
                out.push('Q');
                push_point(&mut out, *control);
                push_point(&mut out, *to);
            }
        }
    }
    out
}

fn push_point(out: &mut String, p: Point) {
    out.push(' ');
    push_coord(out, p.x);
    out.push(' ');
    push_coord(out, p.y);
}

/// Writes `value` rounded to two decimal places, trimming trailing zeros and
/// a dangling decimal point. `-0` collapses to `0`.
fn push_coord(out: &mut String, value: f64) {
    let mut text = format!("{value:.2}");
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }
    if text == "-0" {
        text = "0".to_owned();
    }
    out.push_str(&text);
}

/// Terminal arrowhead for a connector: an isosceles triangle whose tip sits
/// on the path's end point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowHead {
    tip: Point,
    base_left: Point,
    base_right: Point,
}

impl ArrowHead {
    pub fn tip(&self) -> Point {
        self.tip
    }

    pub fn base_left(&self) -> Point {
        self.base_left
    }

    pub fn base_right(&self) -> Point {
        self.base_right
    }

    /// Points for an SVG `<polygon points="...">` attribute.
    pub fn svg_points(&self) -> String {
        let mut out = String::new();
        for (idx, p) in [self.tip, self.base_left, self.base_right].into_iter().enumerate() {
            if idx > 0 {
                out.push(' ');
            }
            push_coord(&mut out, p.x);
            out.push(',');
            push_coord(&mut out, p.y);
        }
        out
    }
}

/// Arrowhead at `tip`, oriented along the travel direction into an anchor on
/// `entry_side` (opposite that side's outward direction).
pub fn arrowhead_at(tip: Point, entry_side: Side, size: f64) -> ArrowHead {
    let (ox, oy) = entry_side.outward();
    let (dx, dy) = (-ox, -oy);
    let base = Point::new(tip.x - dx * size, tip.y - dy * size);
    let half = size / 2.0;
    let (px, py) = (-dy, dx);
    ArrowHead {
        tip,
        base_left: Point::new(base.x + px * half, base.y + py * half),
        base_right: Point::new(base.x - px * half, base.y - py * half),
    }
}

/// Arrowhead at the end of `path`, or `None` for an empty path.
pub fn path_arrowhead(path: &PathData, entry_side: Side, size: f64) -> Option<ArrowHead> {
    path.end().map(|tip| arrowhead_at(tip, entry_side, size))
}

#[cfg(test)]
mod tests {
    use crate::config::RouterConfig;
    use crate::model::fixtures;
    use crate::model::{Point, Side};
    use crate::route::route_connector;

    use super::{arrowhead_at, push_coord, svg_path_data};

    fn coord(value: f64) -> String {
        let mut out = String::new();
        push_coord(&mut out, value);
        out
    }

    #[test]
    fn coords_are_trimmed_to_minimal_decimals() {
        assert_eq!(coord(100.0), "100");
        assert_eq!(coord(12.5), "12.5");
        assert_eq!(coord(12.346), "12.35");
        assert_eq!(coord(-0.001), "0");
        assert_eq!(coord(-3.10), "-3.1");
    }

    #[test]
    fn l_route_serializes_to_move_line_quad_line() {
        let config = RouterConfig::default();
        let (source, destination) = fixtures::offset_pair();
        let path = route_connector(&source, &destination, &[], &config).expect("route");

        assert_eq!(
            svg_path_data(&path),
            "M 100 25 L 288 25 Q 300 25 300 37 L 300 225"
        );
    }

    #[test]
    fn serialization_is_stable_across_recomputations() {
        let config = RouterConfig::default();
        let (source, destination) = fixtures::offset_pair();
        let obstacles = [fixtures::blocking_obstacle()];

        let first = route_connector(&source, &destination, &obstacles, &config).expect("route");
        let second = route_connector(&source, &destination, &obstacles, &config).expect("route");
        assert_eq!(svg_path_data(&first), svg_path_data(&second));
    }

    #[test]
    fn arrowhead_points_into_a_left_side_entry() {
        let head = arrowhead_at(Point::new(300.0, 225.0), Side::Left, 12.0);
        assert_eq!(head.tip(), Point::new(300.0, 225.0));
        assert_eq!(head.base_left(), Point::new(288.0, 231.0));
        assert_eq!(head.base_right(), Point::new(288.0, 219.0));
        assert_eq!(head.svg_points(), "300,225 288,231 288,219");
    }

    #[test]
    fn arrowhead_points_into_a_top_side_entry() {
        let head = arrowhead_at(Point::new(350.0, 200.0), Side::Top, 10.0);
        // Travel direction is downward; the base sits above the tip.
        assert_eq!(head.base_left().y, 190.0);
        assert_eq!(head.base_right().y, 190.0);
        assert_eq!(head.base_left().x + head.base_right().x, 700.0);
    }
}
