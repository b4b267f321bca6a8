// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! A graph representation of a radial distribution network: the segments of
//! the network and the upstream/downstream relations between them.

mod calculation;
mod creation;
mod retrieval;
mod sequencing;

pub mod iterators;
mod traversal;

#[cfg(test)]
pub(crate) mod test_utils;

use crate::{NodeId, Segment};
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;

/// `Point`s stored in a `DiGraph` instance can be addressed with `NodeIndex`es.
///
/// `NodeIndexMap` stores the corresponding `NodeIndex` for any normalized
/// point id, so that points in the `DiGraph` can be retrieved from their ids.
pub(crate) type NodeIndexMap = HashMap<NodeId, NodeIndex>;

/// A segment together with its normalized identifiers.
#[derive(Debug)]
pub(crate) struct Point<S> {
    pub(crate) id: NodeId,
    pub(crate) upstream_id: NodeId,
    pub(crate) segment: S,
}

/// A validated radial network.
///
/// Edges point downstream, from a point to the points it feeds.  A
/// `NetworkGraph` can only be created through
/// [`try_new`][NetworkGraph::try_new], so every instance is a single tree
/// rooted at the source transformer, and carries the order in which its
/// points can be processed with parents before children.
#[derive(Debug)]
pub struct NetworkGraph<S>
where
    S: Segment,
{
    graph: DiGraph<Point<S>, ()>,
    node_indices: NodeIndexMap,
    root: NodeIndex,
    order: Vec<NodeIndex>,
}
