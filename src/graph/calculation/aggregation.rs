// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module contains the bottom-up aggregation of loads.

use crate::{NetworkGraph, NodeResult, Segment};

/// Computes the local load of every segment and accumulates the loads from
/// the leaves towards the root.
pub(super) struct LoadAggregator<'a, S>
where
    S: Segment,
{
    graph: &'a NetworkGraph<S>,
    demand_factor: f64,
}

impl<'a, S> LoadAggregator<'a, S>
where
    S: Segment,
{
    pub(super) fn new(graph: &'a NetworkGraph<S>, demand_factor: f64) -> Self {
        Self {
            graph,
            demand_factor,
        }
    }

    /// Returns the partial results, indexed by `NodeIndex`, with the local
    /// and accumulated loads filled in and the costs left at zero.
    pub(super) fn aggregate(self) -> Vec<NodeResult> {
        let mut results = vec![NodeResult::default(); self.graph.graph.node_count()];

        for idx in &self.graph.order {
            let segment = &self.graph.graph[*idx].segment;
            let result = &mut results[idx.index()];

            // The demand factor applies to customers only, not to point loads.
            result.local_distributed_kva = segment.customers().total() as f64 * self.demand_factor;
            result.local_point_kva = segment.point_load_kva();
            result.local_total_kva = result.local_distributed_kva + result.local_point_kva;
        }

        for idx in self.graph.order.iter().rev() {
            let result = &mut results[idx.index()];
            result.accumulated_kva += result.local_total_kva;
            let accumulated = result.accumulated_kva;

            if let Some(parent) = self.graph.parent_index(*idx) {
                results[parent.index()].accumulated_kva += accumulated;
            }
        }

        results
    }
}
