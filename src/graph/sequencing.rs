// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Ordering of the points of a [`NetworkGraph`], parents before children.

use std::collections::VecDeque;

use petgraph::graph::NodeIndex;
use petgraph::Direction;

use crate::{Error, NetworkGraph, Segment};

impl<S> NetworkGraph<S>
where
    S: Segment,
{
    /// Orders the points with Kahn's algorithm, starting from the root.
    ///
    /// Children of the same point are visited in ascending id order, so the
    /// order doesn't depend on the order of the input segments.
    ///
    /// Returns an error listing the points that couldn't be ordered, which
    /// are either part of a cycle or fed from a point that is not connected
    /// to the root.
    pub(super) fn sequence(&self) -> Result<Vec<NodeIndex>, Error> {
        let node_count = self.graph.node_count();

        // Every point except the root references exactly one upstream point,
        // whether or not that point exists.
        let mut in_degree: Vec<usize> = self
            .graph
            .node_indices()
            .map(|idx| usize::from(idx != self.root))
            .collect();

        let mut order = Vec::with_capacity(node_count);
        let mut queue = VecDeque::from([self.root]);

        while let Some(idx) = queue.pop_front() {
            order.push(idx);

            let mut children: Vec<NodeIndex> = self
                .graph
                .neighbors_directed(idx, Direction::Outgoing)
                .collect();
            children.sort_by(|a, b| self.graph[*a].id.cmp(&self.graph[*b].id));

            for child in children {
                in_degree[child.index()] -= 1;
                if in_degree[child.index()] == 0 {
                    queue.push_back(child);
                }
            }
        }

        if order.len() < node_count {
            let mut unordered: Vec<_> = self
                .graph
                .node_indices()
                .filter(|idx| in_degree[idx.index()] > 0)
                .map(|idx| self.graph[idx].id.clone())
                .collect();
            unordered.sort();

            return Err(Error::cycle_or_orphan(format!(
                "Points [{}] are not reachable from the root {}.",
                unordered
                    .iter()
                    .map(|id| id.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
                self.graph[self.root].id
            ))
            .with_points(unordered));
        }

        Ok(order)
    }
}
