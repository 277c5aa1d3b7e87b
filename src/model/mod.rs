// SPDX-FileCopyrightText: 2026 The Liana Authors
// SPDX-License-Identifier: MIT

//! Geometry model shared across routing, rendering, and scene orchestration.
//!
//! Boxes are immutable snapshots of node geometry taken at computation time;
//! anchors and paths are derived from them and carry no state of their own.

pub mod anchor;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod geometry;
pub mod ids;

pub use anchor::{anchors_of, Anchor, AnchorPair, Anchors, Side};
pub use geometry::{Point, Rect};
pub use ids::{ConnectionId, Id, IdError, NodeId};
