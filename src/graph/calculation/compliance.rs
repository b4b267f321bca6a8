// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module contains the check of the cumulative costs against the design
//! limit.

use crate::{NetworkGraph, NodeId, NodeResult, Segment};

/// The outcome of a compliance check.
pub(super) struct Compliance {
    pub(super) max_cumulative_cost: f64,
    pub(super) within_limit: bool,
    pub(super) over_limit_ids: Vec<NodeId>,
}

pub(super) struct ComplianceEvaluator {
    limit: f64,
}

impl ComplianceEvaluator {
    pub(super) fn new(limit: f64) -> Self {
        Self { limit }
    }

    /// Compares the cumulative cost of every point against the limit.
    ///
    /// Points over the limit are listed parents first.
    pub(super) fn evaluate<S: Segment>(
        &self,
        graph: &NetworkGraph<S>,
        results: &[NodeResult],
    ) -> Compliance {
        let mut max_cumulative_cost = 0.0_f64;
        let mut over_limit_ids = Vec::new();

        for idx in &graph.order {
            let cost = results[idx.index()].cumulative_cost;
            max_cumulative_cost = max_cumulative_cost.max(cost);
            if cost > self.limit {
                over_limit_ids.push(graph.graph[*idx].id.clone());
            }
        }

        Compliance {
            max_cumulative_cost,
            within_limit: max_cumulative_cost <= self.limit,
            over_limit_ids,
        }
    }
}
