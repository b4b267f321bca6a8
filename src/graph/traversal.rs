// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module contains methods that help with graph traversal.

use petgraph::graph::NodeIndex;

use crate::{Error, NetworkGraph, NodeId, Segment};

/// Traversal methods.
impl<S> NetworkGraph<S>
where
    S: Segment,
{
    /// Returns the index of the point feeding the given point.
    pub(crate) fn parent_index(&self, index: NodeIndex) -> Option<NodeIndex> {
        self.graph
            .neighbors_directed(index, petgraph::Direction::Incoming)
            .next()
    }

    /// Returns the ids of the points on the path from the root to the given
    /// point, both included.
    pub fn upstream_path(&self, point_id: &str) -> Result<Vec<&NodeId>, Error> {
        let mut index = self.index_of(point_id)?;
        let mut path = vec![&self.graph[index].id];

        while let Some(parent) = self.parent_index(index) {
            path.push(&self.graph[parent].id);
            index = parent;
        }

        path.reverse();
        Ok(path)
    }

    /// Find all the segments that satisfy the given predicate, starting from
    /// the given point and traversing away from the root.
    ///
    /// The starting point itself is included in the search.
    pub fn find_downstream(
        &self,
        from: &str,
        mut pred: impl FnMut(&S) -> bool,
    ) -> Result<Vec<&S>, Error> {
        let mut stack = vec![self.index_of(from)?];
        let mut found = vec![];

        while let Some(index) = stack.pop() {
            let segment = &self.graph[index].segment;
            if pred(segment) {
                found.push(segment);
            }

            let neighbors = self
                .graph
                .neighbors_directed(index, petgraph::Direction::Outgoing);
            stack.extend(neighbors);
        }

        Ok(found)
    }

    /// Returns the number of customers connected anywhere in the network.
    pub fn total_customers(&self) -> u64 {
        self.segments().map(|s| s.customers().total()).sum()
    }
}
