// SPDX-FileCopyrightText: 2026 The Liana Authors
// SPDX-License-Identifier: MIT

use smallvec::SmallVec;

use crate::model::Point;

/// One drawable path segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    /// Quarter-round corner: a quadratic curve whose control point is the
    /// corner of the underlying polyline.
    QuadTo { control: Point, to: Point },
}

impl PathCommand {
    pub fn endpoint(&self) -> Point {
        match self {
            Self::MoveTo(p) | Self::LineTo(p) => *p,
            Self::QuadTo { to, .. } => *to,
        }
    }
}

/// Drawable connector geometry.
///
/// A path has no identity beyond the boxes it connects: it is recomputed from
/// scratch on every layout change, never diffed against its predecessor.
#[derive(Debug, Clone, PartialEq)]
pub struct PathData {
    commands: SmallVec<[PathCommand; 8]>,
}

impl PathData {
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// First point of the path (the source anchor).
    pub fn start(&self) -> Option<Point> {
        self.commands.first().map(PathCommand::endpoint)
    }

    /// Last point of the path (the destination anchor).
    pub fn end(&self) -> Option<Point> {
        self.commands.last().map(PathCommand::endpoint)
    }

    /// Number of rounded corners (turns) in the path.
    pub fn corner_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|command| matches!(command, PathCommand::QuadTo { .. }))
            .count()
    }
}

/// Connects `waypoints` in order, rounding every interior corner with a
/// quadratic curve of radius `radius`.
///
/// The radius is clamped to half of each adjacent leg so a corner never
/// consumes more straight length than is available. Interior points that do
/// not actually turn (zero-length legs, collinear continuation) degrade to
/// plain line segments.
pub(crate) fn polyline_with_corners(waypoints: &[Point], radius: f64) -> PathData {
    let mut commands = SmallVec::new();

    let Some(first) = waypoints.first() else {
        return PathData { commands };
    };
    commands.push(PathCommand::MoveTo(*first));

    for idx in 1..waypoints.len() {
        let current = waypoints[idx];
        if idx + 1 == waypoints.len() {
            commands.push(PathCommand::LineTo(current));
            continue;
        }

        let prev = waypoints[idx - 1];
        let next = waypoints[idx + 1];
        let len_in = (current.x - prev.x).abs() + (current.y - prev.y).abs();
        let len_out = (next.x - current.x).abs() + (next.y - current.y).abs();
        let r = radius.min(len_in / 2.0).min(len_out / 2.0);

        let dir_in = axis_direction(prev, current);
        let dir_out = axis_direction(current, next);
        if r <= 0.0 || dir_in == dir_out || dir_in == (0.0, 0.0) || dir_out == (0.0, 0.0) {
            commands.push(PathCommand::LineTo(current));
            continue;
        }

        let entry = Point::new(current.x - dir_in.0 * r, current.y - dir_in.1 * r);
        let exit = Point::new(current.x + dir_out.0 * r, current.y + dir_out.1 * r);
        commands.push(PathCommand::LineTo(entry));
        commands.push(PathCommand::QuadTo { control: current, to: exit });
    }

    PathData { commands }
}

/// Dominant-axis unit direction of the leg `from..to`.
fn axis_direction(from: Point, to: Point) -> (f64, f64) {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    if dx == 0.0 && dy == 0.0 {
        (0.0, 0.0)
    } else if dx.abs() >= dy.abs() {
        (dx.signum(), 0.0)
    } else {
        (0.0, dy.signum())
    }
}

#[cfg(test)]
mod tests {
    use super::{polyline_with_corners, PathCommand};
    use crate::model::Point;

    #[test]
    fn two_waypoints_produce_a_straight_segment() {
        let path =
            polyline_with_corners(&[Point::new(0.0, 0.0), Point::new(100.0, 10.0)], 12.0);
        assert_eq!(
            path.commands(),
            &[
                PathCommand::MoveTo(Point::new(0.0, 0.0)),
                PathCommand::LineTo(Point::new(100.0, 10.0)),
            ]
        );
        assert_eq!(path.corner_count(), 0);
    }

    #[test]
    fn interior_waypoint_becomes_a_rounded_corner() {
        let path = polyline_with_corners(
            &[Point::new(0.0, 0.0), Point::new(100.0, 0.0), Point::new(100.0, 80.0)],
            12.0,
        );
        assert_eq!(
            path.commands(),
            &[
                PathCommand::MoveTo(Point::new(0.0, 0.0)),
                PathCommand::LineTo(Point::new(88.0, 0.0)),
                PathCommand::QuadTo {
                    control: Point::new(100.0, 0.0),
                    to: Point::new(100.0, 12.0),
                },
                PathCommand::LineTo(Point::new(100.0, 80.0)),
            ]
        );
        assert_eq!(path.corner_count(), 1);
    }

    #[test]
    fn corner_radius_is_clamped_to_half_the_shorter_leg() {
        let path = polyline_with_corners(
            &[Point::new(0.0, 0.0), Point::new(100.0, 0.0), Point::new(100.0, 10.0)],
            12.0,
        );
        // Outgoing leg is 10 units, so the corner may use at most 5.
        assert_eq!(
            path.commands()[2],
            PathCommand::QuadTo { control: Point::new(100.0, 0.0), to: Point::new(100.0, 5.0) }
        );
    }

    #[test]
    fn zero_length_leg_degrades_to_a_line() {
        let path = polyline_with_corners(
            &[Point::new(0.0, 0.0), Point::new(100.0, 0.0), Point::new(100.0, 0.0)],
            12.0,
        );
        assert_eq!(path.corner_count(), 0);
        assert_eq!(path.end(), Some(Point::new(100.0, 0.0)));
    }

    #[test]
    fn endpoints_always_equal_first_and_last_waypoints() {
        let waypoints = [
            Point::new(5.0, 5.0),
            Point::new(200.0, 5.0),
            Point::new(200.0, 150.0),
            Point::new(320.0, 150.0),
        ];
        let path = polyline_with_corners(&waypoints, 12.0);
        assert_eq!(path.start(), Some(waypoints[0]));
        assert_eq!(path.end(), Some(waypoints[3]));
    }
}
