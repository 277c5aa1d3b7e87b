// SPDX-FileCopyrightText: 2026 The Liana Authors
// SPDX-License-Identifier: MIT

//! Scene orchestration: connections, node geometry lookup, and retained
//! path state.
//!
//! A [`ConnectorRouter`] owns the connections of one illustration and the
//! last successfully computed path per connection. Recomputation reads fresh
//! box snapshots from a [`NodeLayout`] provider; connections whose nodes are
//! absent from the layout are silently skipped and keep their previous path.

use std::collections::BTreeMap;

use crate::config::RouterConfig;
use crate::model::{ConnectionId, NodeId, Rect};
use crate::render;
use crate::route::{self, PathData, RouteError};

/// Source of current node geometry, in container-local coordinates.
///
/// Returning `None` means the node is absent from the rendered layout; the
/// router treats that as a no-op, not an error.
pub trait NodeLayout {
    fn node_rect(&self, id: &NodeId) -> Option<Rect>;
}

impl NodeLayout for BTreeMap<NodeId, Rect> {
    fn node_rect(&self, id: &NodeId) -> Option<Rect> {
        self.get(id).copied()
    }
}

/// How one connection picks its route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionStyle {
    /// Score all 16 anchor combinations and build the winning route.
    Auto,
    /// Fixed S-shape that routes around rather than toward the neighbor.
    LoopAround,
}

/// One connector: which nodes it joins and how it picks its route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    id: ConnectionId,
    from: NodeId,
    to: NodeId,
    obstacles: Vec<NodeId>,
    style: ConnectionStyle,
}

impl Connection {
    pub fn auto(id: ConnectionId, from: NodeId, to: NodeId) -> Self {
        Self { id, from, to, obstacles: Vec::new(), style: ConnectionStyle::Auto }
    }

    pub fn loop_around(id: ConnectionId, from: NodeId, to: NodeId) -> Self {
        Self { id, from, to, obstacles: Vec::new(), style: ConnectionStyle::LoopAround }
    }

    /// Adds a node whose box the route should avoid crossing.
    pub fn with_obstacle(mut self, node: NodeId) -> Self {
        self.obstacles.push(node);
        self
    }

    pub fn id(&self) -> &ConnectionId {
        &self.id
    }

    pub fn from(&self) -> &NodeId {
        &self.from
    }

    pub fn to(&self) -> &NodeId {
        &self.to
    }

    pub fn obstacles(&self) -> &[NodeId] {
        &self.obstacles
    }

    pub fn style(&self) -> ConnectionStyle {
        self.style
    }
}

/// Computes and retains connector paths for one illustration.
#[derive(Debug)]
pub struct ConnectorRouter {
    config: RouterConfig,
    connections: Vec<Connection>,
    paths: BTreeMap<ConnectionId, PathData>,
}

impl ConnectorRouter {
    pub fn new(config: RouterConfig) -> Self {
        Self { config, connections: Vec::new(), paths: BTreeMap::new() }
    }

    pub fn add_connection(&mut self, connection: Connection) {
        self.connections.push(connection);
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Recomputes every connection from the current layout and returns how
    /// many paths were updated.
    ///
    /// Connections with an absent endpoint are skipped and keep their
    /// previously computed path; absent obstacle nodes are ignored. This
    /// never fails: the worst case is a stale or visually imperfect path.
    pub fn recompute(&mut self, layout: &impl NodeLayout) -> usize {
        let mut updated = 0;

        for connection in &self.connections {
            let (Some(source), Some(destination)) =
                (layout.node_rect(connection.from()), layout.node_rect(connection.to()))
            else {
                log::debug!(
                    "connection {}: endpoint missing from layout, keeping previous path",
                    connection.id()
                );
                continue;
            };

            let obstacles = connection
                .obstacles()
                .iter()
                .filter_map(|id| layout.node_rect(id))
                .collect::<Vec<_>>();

            let path = match connection.style() {
                ConnectionStyle::LoopAround => {
                    route::build_loop_path(&source, &destination, &self.config)
                }
                ConnectionStyle::Auto => {
                    match route::route_connector(&source, &destination, &obstacles, &self.config)
                    {
                        Ok(path) => path,
                        Err(RouteError::NoRoute) => {
                            log::debug!(
                                "connection {}: no route, keeping previous path",
                                connection.id()
                            );
                            continue;
                        }
                    }
                }
            };

            log::trace!("connection {}: {} commands", connection.id(), path.commands().len());
            self.paths.insert(connection.id().clone(), path);
            updated += 1;
        }

        updated
    }

    /// Last successfully computed path for a connection, if any.
    pub fn path(&self, id: &ConnectionId) -> Option<&PathData> {
        self.paths.get(id)
    }

    /// SVG `d` attribute data for a connection's current path.
    pub fn svg_path_data(&self, id: &ConnectionId) -> Option<String> {
        self.paths.get(id).map(render::svg_path_data)
    }

    pub fn paths(&self) -> &BTreeMap<ConnectionId, PathData> {
        &self.paths
    }
}
