// SPDX-FileCopyrightText: 2026 The Liana Authors
// SPDX-License-Identifier: MIT

//! Liana — deterministic orthogonal connector routing for node illustrations.
//!
//! Given the bounding boxes of a source node and a destination node (plus
//! optional obstacle boxes), Liana picks an anchor pair on each box's
//! perimeter and produces an orthogonal, rounded-corner path connecting
//! them, ready to be written into an SVG `d` attribute. Paths are pure
//! functions of the input geometry: recomputing with unchanged boxes yields
//! a bit-identical path.

pub mod config;
pub mod model;
pub mod render;
pub mod route;
pub mod scene;
pub mod schedule;
