// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Methods for creating [`NetworkGraph`] instances from the segments of a
//! network.

use petgraph::graph::{DiGraph, NodeIndex};

use crate::{Error, NetworkConfig, NodeId, Segment};

use super::{NetworkGraph, NodeIndexMap, Point};

/// `NetworkGraph` instantiation.
impl<S> NetworkGraph<S>
where
    S: Segment,
{
    /// Creates a new [`NetworkGraph`] from the given segments.
    ///
    /// Returns an error if the segments don't describe a single tree rooted
    /// at `config.root_id`.
    pub fn try_new(
        segments: impl IntoIterator<Item = S>,
        config: &NetworkConfig,
    ) -> Result<Self, Error> {
        let (graph, indices) = Self::create_graph(segments)?;
        let root = Self::find_root(&indices, &config.root_id)?;

        let mut ng = Self {
            graph,
            node_indices: indices,
            root,
            order: Vec::new(),
        };
        ng.add_connections()?;
        ng.order = ng.sequence()?;

        tracing::debug!(
            "Validated network with {} points rooted at {}.",
            ng.order.len(),
            config.root_id
        );

        Ok(ng)
    }

    fn create_graph(
        segments: impl IntoIterator<Item = S>,
    ) -> Result<(DiGraph<Point<S>, ()>, NodeIndexMap), Error> {
        let mut graph = DiGraph::new();
        let mut indices = NodeIndexMap::new();

        for (position, segment) in segments.into_iter().enumerate() {
            let id = NodeId::new(segment.point_id());

            if id.is_empty() {
                return Err(Error::invalid_segment(format!(
                    "Segment at position {position} has no point id."
                )));
            }
            if indices.contains_key(&id) {
                return Err(
                    Error::duplicate_point(format!("Duplicate point id found: {id}"))
                        .with_points([id]),
                );
            }
            for (name, value) in [
                ("length", segment.length_m()),
                ("point load", segment.point_load_kva()),
            ] {
                if !value.is_finite() || value < 0.0 {
                    return Err(Error::invalid_segment(format!(
                        "Point {id} has an invalid {name}: {value}"
                    ))
                    .with_points([id.clone()]));
                }
            }

            let upstream_id = NodeId::new(segment.upstream_id());
            let idx = graph.add_node(Point {
                id: id.clone(),
                upstream_id,
                segment,
            });
            indices.insert(id, idx);
        }

        if graph.node_count() == 0 {
            return Err(Error::empty_input("No segments provided."));
        }

        Ok((graph, indices))
    }

    fn find_root(indices: &NodeIndexMap, root_id: &NodeId) -> Result<NodeIndex, Error> {
        indices.get(root_id).copied().ok_or_else(|| {
            Error::missing_root(format!("No segment found for the root point {root_id}."))
        })
    }

    /// Adds an edge from every point's upstream point to the point itself.
    ///
    /// Upstream ids that don't match any point add no edge.  Such points are
    /// left unreachable and are reported by [`sequence`][Self::sequence].
    fn add_connections(&mut self) -> Result<(), Error> {
        let mut connections = Vec::with_capacity(self.graph.node_count());

        for idx in self.graph.node_indices() {
            let point = &self.graph[idx];
            if idx == self.root {
                if !point.upstream_id.is_empty() {
                    tracing::warn!(
                        "Ignoring upstream point {} of the root point {}.",
                        point.upstream_id,
                        point.id
                    );
                }
                continue;
            }

            if point.upstream_id.is_empty() {
                return Err(Error::missing_parent(format!(
                    "Point {} has no upstream point.",
                    point.id
                ))
                .with_points([point.id.clone()]));
            }

            match self.node_indices.get(&point.upstream_id) {
                Some(&parent) => connections.push((parent, idx)),
                None => tracing::debug!(
                    "Point {} references unknown upstream point {}.",
                    point.id,
                    point.upstream_id
                ),
            }
        }

        for (parent, child) in connections {
            self.graph.add_edge(parent, child, ());
        }

        Ok(())
    }
}
