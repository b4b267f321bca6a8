// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Iterators over the segments of a `NetworkGraph`.

use petgraph::graph::{DiGraph, NodeIndex};

use crate::{NodeId, Segment};

use super::Point;

/// An iterator over the segments of a `NetworkGraph`, in input order.
pub struct Segments<'a, S>
where
    S: Segment,
{
    pub(crate) iter: std::slice::Iter<'a, petgraph::graph::Node<Point<S>>>,
}

impl<'a, S> Iterator for Segments<'a, S>
where
    S: Segment,
{
    type Item = &'a S;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|n| &n.weight.segment)
    }
}

/// An iterator over the points fed directly by a point of a `NetworkGraph`.
pub struct Children<'a, S>
where
    S: Segment,
{
    pub(crate) graph: &'a DiGraph<Point<S>, ()>,
    pub(crate) iter: petgraph::graph::Neighbors<'a, ()>,
}

impl<'a, S> Iterator for Children<'a, S>
where
    S: Segment,
{
    type Item = &'a S;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|i| &self.graph[i].segment)
    }
}

/// An iterator over the normalized point ids of a `NetworkGraph`, parents
/// before children.
pub struct Ordered<'a, S>
where
    S: Segment,
{
    pub(crate) graph: &'a DiGraph<Point<S>, ()>,
    pub(crate) iter: std::slice::Iter<'a, NodeIndex>,
}

impl<'a, S> Iterator for Ordered<'a, S>
where
    S: Segment,
{
    type Item = &'a NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|i| &self.graph[*i].id)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<S> DoubleEndedIterator for Ordered<'_, S>
where
    S: Segment,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        self.iter.next_back().map(|i| &self.graph[*i].id)
    }
}

impl<S> ExactSizeIterator for Ordered<'_, S> where S: Segment {}
