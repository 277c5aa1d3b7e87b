// SPDX-FileCopyrightText: 2026 The Liana Authors
// SPDX-License-Identifier: MIT

//! Shared geometry fixtures for unit tests.

use super::geometry::Rect;

/// Source/destination pair with the destination offset down-right, far enough
/// apart that no anchor deltas fall under the straight-line threshold.
pub(crate) fn offset_pair() -> (Rect, Rect) {
    (Rect::new(0.0, 0.0, 100.0, 50.0), Rect::new(300.0, 200.0, 400.0, 250.0))
}

/// An obstacle sitting squarely inside the rectangular span between
/// `offset_pair`'s right/left anchors.
pub(crate) fn blocking_obstacle() -> Rect {
    Rect::new(150.0, 0.0, 250.0, 60.0)
}

/// Three workflow nodes laid out like the hero illustration: source top-left,
/// a middle node, destination bottom-right.
pub(crate) fn hero_nodes() -> (Rect, Rect, Rect) {
    (
        Rect::new(40.0, 40.0, 200.0, 120.0),
        Rect::new(320.0, 200.0, 480.0, 280.0),
        Rect::new(600.0, 360.0, 760.0, 440.0),
    )
}
