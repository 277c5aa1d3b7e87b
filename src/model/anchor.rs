// SPDX-FileCopyrightText: 2026 The Liana Authors
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};

use super::geometry::{Point, Rect};

/// One side of a box, doubling as the outward direction of its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    /// Candidate enumeration order. Scoring ties are broken by the first
    /// minimal-score combination in this order, so it must stay stable.
    pub const ALL: [Side; 4] = [Side::Top, Side::Bottom, Side::Left, Side::Right];

    /// Whether an exit through `self` naturally continues into an entry
    /// through `entry` on the destination box: rightward exits flow into
    /// left-side entries, downward exits into top-side entries.
    pub fn continues_into(self, entry: Side) -> bool {
        matches!((self, entry), (Side::Right, Side::Left) | (Side::Bottom, Side::Top))
    }

    /// Unit vector pointing away from the box through this side.
    pub fn outward(self) -> (f64, f64) {
        match self {
            Side::Top => (0.0, -1.0),
            Side::Bottom => (0.0, 1.0),
            Side::Left => (-1.0, 0.0),
            Side::Right => (1.0, 0.0),
        }
    }
}

/// A point on a box's perimeter together with its outward direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    side: Side,
    point: Point,
}

impl Anchor {
    pub fn new(side: Side, point: Point) -> Self {
        Self { side, point }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn point(&self) -> Point {
        self.point
    }
}

/// The four perimeter-midpoint anchors of one box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchors {
    top: Anchor,
    bottom: Anchor,
    left: Anchor,
    right: Anchor,
}

impl Anchors {
    pub fn get(&self, side: Side) -> Anchor {
        match side {
            Side::Top => self.top,
            Side::Bottom => self.bottom,
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// A chosen (source anchor, destination anchor) combination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorPair {
    source: Anchor,
    destination: Anchor,
}

impl AnchorPair {
    pub fn new(source: Anchor, destination: Anchor) -> Self {
        Self { source, destination }
    }

    pub fn source(&self) -> Anchor {
        self.source
    }

    pub fn destination(&self) -> Anchor {
        self.destination
    }
}

/// Returns the four side-midpoint anchors of `rect`. Pure function of the box.
pub fn anchors_of(rect: &Rect) -> Anchors {
    Anchors {
        top: Anchor::new(Side::Top, Point::new(rect.center_x(), rect.top())),
        bottom: Anchor::new(Side::Bottom, Point::new(rect.center_x(), rect.bottom())),
        left: Anchor::new(Side::Left, Point::new(rect.left(), rect.center_y())),
        right: Anchor::new(Side::Right, Point::new(rect.right(), rect.center_y())),
    }
}

#[cfg(test)]
mod tests {
    use super::{anchors_of, Side};
    use crate::model::geometry::{Point, Rect};

    #[test]
    fn anchors_sit_on_side_midpoints() {
        let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
        let anchors = anchors_of(&rect);

        assert_eq!(anchors.get(Side::Top).point(), Point::new(50.0, 0.0));
        assert_eq!(anchors.get(Side::Bottom).point(), Point::new(50.0, 50.0));
        assert_eq!(anchors.get(Side::Left).point(), Point::new(0.0, 25.0));
        assert_eq!(anchors.get(Side::Right).point(), Point::new(100.0, 25.0));
    }

    #[test]
    fn anchors_carry_their_side_tag() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        let anchors = anchors_of(&rect);
        for side in Side::ALL {
            assert_eq!(anchors.get(side).side(), side);
        }
    }

    #[test]
    fn continuation_only_holds_for_facing_directions() {
        assert!(Side::Right.continues_into(Side::Left));
        assert!(Side::Bottom.continues_into(Side::Top));
        assert!(!Side::Left.continues_into(Side::Right));
        assert!(!Side::Top.continues_into(Side::Bottom));
        assert!(!Side::Right.continues_into(Side::Right));
    }

    #[test]
    fn degenerate_rect_collapses_all_anchors_to_one_point() {
        let rect = Rect::new(40.0, 40.0, 40.0, 40.0);
        let anchors = anchors_of(&rect);
        for side in Side::ALL {
            assert_eq!(anchors.get(side).point(), Point::new(40.0, 40.0));
        }
    }
}
