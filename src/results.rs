// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! The values produced by a calculation.

use std::collections::BTreeMap;

use crate::{NodeId, SocialClass};

/// Loads and costs computed for one segment.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeResult {
    /// Customer load at the segment after the demand factor, in kVA.
    pub local_distributed_kva: f64,
    /// Fixed load at the segment, in kVA.
    pub local_point_kva: f64,
    pub local_total_kva: f64,
    /// Load of the segment and of everything fed through it, in kVA.
    pub accumulated_kva: f64,
    /// The cost ("CQT") of the segment alone.
    pub segment_cost: f64,
    /// The cost ("CQT") of the path from the root to the end of the segment.
    pub cumulative_cost: f64,
}

/// Network-wide values of a calculation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Summary {
    pub demand_factor: f64,
    pub social_class: SocialClass,
    pub total_customers: u64,
    pub max_cumulative_cost: f64,
    /// The root's accumulated load, in kVA.
    pub total_accumulated_kva: f64,
    /// The capacity of the source transformer, as given in the request.
    pub transformer_kva: f64,
    /// `total_accumulated_kva / transformer_kva`, when the capacity is known.
    pub transformer_loading: Option<f64>,
    pub cqt_limit: f64,
    pub within_limit: bool,
    /// Points whose cumulative cost is above the limit, parents first.
    pub over_limit_ids: Vec<NodeId>,
    /// Points whose cable type has no coefficient, and so add no cost.
    pub unknown_cable_ids: Vec<NodeId>,
}

/// The complete result of a calculation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NetworkResult {
    pub nodes: BTreeMap<NodeId, NodeResult>,
    /// The order in which the points were processed, parents first.
    pub order: Vec<NodeId>,
    pub summary: Summary,
}

impl NetworkResult {
    /// Returns the result for the given point, matching the id
    /// case-insensitively.
    pub fn node(&self, point_id: &str) -> Option<&NodeResult> {
        self.nodes.get(&NodeId::new(point_id))
    }

    /// Returns the results in processing order.
    pub fn ordered(&self) -> impl Iterator<Item = (&NodeId, &NodeResult)> {
        self.order
            .iter()
            .filter_map(|id| self.nodes.get(id).map(|r| (id, r)))
    }
}
