// SPDX-FileCopyrightText: 2026 The Liana Authors
// SPDX-License-Identifier: MIT

//! Anchor selection and orthogonal route construction.
//!
//! A route is chosen in two steps: score all 16 (source anchor × destination
//! anchor) combinations and keep the cheapest, then build an orthogonal
//! rounded-corner path for the winning pair. Both steps are pure functions of
//! the box snapshots, so recomputing with unchanged geometry yields a
//! bit-identical path.

use std::fmt;

use crate::config::RouterConfig;
use crate::model::{anchors_of, Anchor, AnchorPair, Point, Rect, Side};

mod path;

pub use path::{PathCommand, PathData};


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteError {
    /// No anchor combination could be scored. Cannot occur with the 16 fixed
    /// candidates, but callers must keep their previous path when it does.
    NoRoute,
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoRoute => f.write_str("no viable anchor pair between the boxes"),
        }
    }
}

impl std::error::Error for RouteError {}

/// Score of one anchor combination; lower is better.
///
/// Manhattan distance between the anchor points, plus a flat penalty for each
/// expanded obstacle the straight anchor line crosses, minus a bonus when the
/// exit direction flows into the entry direction.
fn pair_score(
    source: Anchor,
    destination: Anchor,
    obstacles: &[Rect],
    config: &RouterConfig,
) -> f64 {
    let mut score = source.point().manhattan_distance(destination.point());

    for obstacle in obstacles {
        let expanded = obstacle.expand(config.obstacle_margin);
        if expanded.intersects_segment(source.point(), destination.point()) {
            score += config.obstacle_penalty;
        }
    }

    if source.side().continues_into(destination.side()) {
        score -= config.continuation_bonus;
    }

    score
}

/// Picks the cheapest of the 16 anchor combinations between two boxes.
///
/// Ties are broken by enumeration order ([`Side::ALL`] for the source, then
/// for the destination): the first minimal-score combination wins. The
/// scoring is tuned to produce a unique minimum in practice, so the tie-break
/// order carries no meaning beyond determinism.
pub fn select_anchor_pair(
    source: &Rect,
    destination: &Rect,
    obstacles: &[Rect],
    config: &RouterConfig,
) -> Result<AnchorPair, RouteError> {
    let source_anchors = anchors_of(source);
    let destination_anchors = anchors_of(destination);

    let mut best: Option<(f64, AnchorPair)> = None;
    for exit in Side::ALL {
        let from = source_anchors.get(exit);
        for entry in Side::ALL {
            let to = destination_anchors.get(entry);
            let score = pair_score(from, to, obstacles, config);
            if best.as_ref().map_or(true, |(best_score, _)| score < *best_score) {
                best = Some((score, AnchorPair::new(from, to)));
            }
        }
    }

    best.map(|(_, pair)| pair).ok_or(RouteError::NoRoute)
}

/// Builds the drawable path for a chosen anchor pair.
///
/// Near-collinear anchors produce a single straight segment. Otherwise the
/// route runs along the dominant axis first and turns once (an "L"); when an
/// obstacle blocks that direct detour, the route crosses at a computed
/// midline instead and turns twice (a "Z").
pub fn build_path(pair: &AnchorPair, obstacles: &[Rect], config: &RouterConfig) -> PathData {
    let a = pair.source().point();
    let b = pair.destination().point();
    let dx = b.x - a.x;
    let dy = b.y - a.y;

    if dx.abs() < config.straight_threshold || dy.abs() < config.straight_threshold {
        return path::polyline_with_corners(&[a, b], config.corner_radius);
    }

    let horizontal_first = dx.abs() >= dy.abs();
    let elbow =
        if horizontal_first { Point::new(b.x, a.y) } else { Point::new(a.x, b.y) };
    if !detour_blocked(a, elbow, b, obstacles, config.obstacle_margin) {
        return path::polyline_with_corners(&[a, elbow, b], config.corner_radius);
    }

    let mid = crossing_coordinate(a, b, horizontal_first, obstacles, config.obstacle_margin);
    let (first, second) = if horizontal_first {
        (Point::new(mid, a.y), Point::new(mid, b.y))
    } else {
        (Point::new(a.x, mid), Point::new(b.x, mid))
    };
    path::polyline_with_corners(&[a, first, second, b], config.corner_radius)
}

/// Fixed S-shaped path for the one topology where an endpoint must route
/// around rather than toward its neighbor: exit the source's right side, run
/// a vertical detour leg outside both boxes, and enter the destination's
/// right side. Emitted regardless of score.
pub fn build_loop_path(source: &Rect, destination: &Rect, config: &RouterConfig) -> PathData {
    let start = anchors_of(source).get(Side::Right).point();
    let end = anchors_of(destination).get(Side::Right).point();
    let detour_x = source.right().max(destination.right()) + config.loop_clearance;

    path::polyline_with_corners(
        &[start, Point::new(detour_x, start.y), Point::new(detour_x, end.y), end],
        config.corner_radius,
    )
}

/// Selection and construction in one step.
pub fn route_connector(
    source: &Rect,
    destination: &Rect,
    obstacles: &[Rect],
    config: &RouterConfig,
) -> Result<PathData, RouteError> {
    let pair = select_anchor_pair(source, destination, obstacles, config)?;
    Ok(build_path(&pair, obstacles, config))
}

fn detour_blocked(
    a: Point,
    elbow: Point,
    b: Point,
    obstacles: &[Rect],
    margin: f64,
) -> bool {
    obstacles.iter().any(|obstacle| {
        let expanded = obstacle.expand(margin);
        expanded.intersects_segment(a, elbow) || expanded.intersects_segment(elbow, b)
    })
}

/// Dominant-axis coordinate of the Z route's crossing leg: the midpoint
/// between the anchors, nudged to an expanded obstacle's near edge when the
/// leg would slice through it.
fn crossing_coordinate(
    a: Point,
    b: Point,
    horizontal_first: bool,
    obstacles: &[Rect],
    margin: f64,
) -> f64 {
    let mut mid =
        if horizontal_first { (a.x + b.x) / 2.0 } else { (a.y + b.y) / 2.0 };

    for obstacle in obstacles {
        let expanded = obstacle.expand(margin);
        let (lo, hi) = if horizontal_first {
            (expanded.left(), expanded.right())
        } else {
            (expanded.top(), expanded.bottom())
        };
        if mid > lo && mid < hi {
            mid = if mid - lo <= hi - mid { lo } else { hi };
        }
    }

    mid
}
