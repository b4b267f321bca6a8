// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Methods for retrieving segments from a [`NetworkGraph`].

use petgraph::graph::NodeIndex;

use crate::iterators::{Children, Ordered, Segments};
use crate::{Error, NetworkGraph, NodeId, Segment};

/// Segment retrieval.
impl<S> NetworkGraph<S>
where
    S: Segment,
{
    pub(crate) fn index_of(&self, point_id: &str) -> Result<NodeIndex, Error> {
        let id = NodeId::new(point_id);
        self.node_indices.get(&id).copied().ok_or_else(|| {
            Error::point_not_found(format!("Point with id {id} not found.")).with_points([id])
        })
    }

    /// Returns the segment ending at the point with the given id.
    ///
    /// The id is matched case-insensitively.
    pub fn segment(&self, point_id: &str) -> Result<&S, Error> {
        self.index_of(point_id).map(|i| &self.graph[i].segment)
    }

    /// Returns an iterator over the segments in the graph, in input order.
    pub fn segments(&self) -> Segments<'_, S> {
        Segments {
            iter: self.graph.raw_nodes().iter(),
        }
    }

    /// Returns an iterator over the segments fed directly from the point with
    /// the given id.
    ///
    /// Returns an error if the given id does not exist.
    pub fn children(&self, point_id: &str) -> Result<Children<'_, S>, Error> {
        self.index_of(point_id).map(|index| Children {
            graph: &self.graph,
            iter: self
                .graph
                .neighbors_directed(index, petgraph::Direction::Outgoing),
        })
    }

    /// Returns the segment feeding the point with the given id, or `None` for
    /// the root.
    ///
    /// Returns an error if the given id does not exist.
    pub fn parent(&self, point_id: &str) -> Result<Option<&S>, Error> {
        let index = self.index_of(point_id)?;
        Ok(self.parent_index(index).map(|i| &self.graph[i].segment))
    }

    /// Returns the normalized id of the root point.
    pub fn root_id(&self) -> &NodeId {
        &self.graph[self.root].id
    }

    /// Returns the normalized point ids in processing order: every point comes
    /// after the point feeding it.
    pub fn order(&self) -> Ordered<'_, S> {
        Ordered {
            graph: &self.graph,
            iter: self.order.iter(),
        }
    }

    /// Returns the number of points in the graph.
    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    /// A validated graph always contains at least the root.
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }
}
