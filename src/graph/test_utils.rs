// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module is only compiled when running unit tests and contains features
//! that are shared by the tests of the crate.
//!
//! - `test_config` and `test_tables`, the configuration and reference data the
//!   tests calculate with.
//! - the `NetworkBuilder`, which can declaratively build networks for use in
//!   tests.

use crate::{
    CableCoefficients, CustomerCounts, DemandTable, Error, NetworkConfig, NetworkGraph, NodeId,
    SegmentInput, StaticTables,
};

/// The cable type of the points added with [`NetworkBuilder::point`].
pub(crate) const TEST_CABLE: &str = "CA-50";

pub(crate) fn test_config() -> NetworkConfig {
    NetworkConfig::default()
}

/// Coefficients are powers of two, so that the expected costs in the tests
/// are exact.
pub(crate) fn test_tables() -> StaticTables {
    StaticTables::new(
        CableCoefficients::try_new([(TEST_CABLE, 0.5), ("CA-25", 1.0), ("CA-120", 0.125)])
            .expect("test coefficients are valid"),
        DemandTable::default(),
    )
}

/// A builder for creating networks easily, for use in tests.
pub(crate) struct NetworkBuilder {
    segments: Vec<SegmentInput>,
    next_id: u64,
}

impl NetworkBuilder {
    /// Creates a new `NetworkBuilder`.
    pub(crate) fn new() -> Self {
        NetworkBuilder {
            segments: Vec::new(),
            next_id: 1,
        }
    }

    /// Adds the root segment and returns its id.
    pub(crate) fn root(&mut self) -> NodeId {
        self.add(SegmentInput::root(test_config().root_id.as_str()))
    }

    /// Adds a 100m segment of the test cable with one mono customer, fed
    /// from `parent`, and returns its id.
    pub(crate) fn point(&mut self, parent: &NodeId) -> NodeId {
        let id = format!("P{}", self.next_id);
        self.next_id += 1;
        self.add(
            SegmentInput::new(id, parent.as_str())
                .with_length(100.0)
                .with_cable(TEST_CABLE)
                .with_customers(CustomerCounts::new(1, 0, 0, 0)),
        )
    }

    /// Adds the given segment as is and returns its id.
    pub(crate) fn add(&mut self, segment: SegmentInput) -> NodeId {
        let id = NodeId::new(&segment.point_id);
        self.segments.push(segment);
        id
    }

    /// Returns the segments added so far.
    pub(crate) fn segments(&self) -> Vec<SegmentInput> {
        self.segments.clone()
    }

    /// Builds and returns the network graph from the segments added to the
    /// builder.
    pub(crate) fn build(&self) -> Result<NetworkGraph<SegmentInput>, Error> {
        NetworkGraph::try_new(self.segments.clone(), &test_config())
    }
}
