// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! The entry point of the library: a calculation engine holding the reference
//! tables and the configuration.

use crate::{
    Error, NetworkConfig, NetworkGraph, NetworkResult, NodeId, Segment, SocialClass,
    TableProvider,
};

/// The per-request parameters of a calculation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalculationRequest {
    /// The capacity of the source transformer, in kVA.  Only reported back in
    /// the summary; zero when unknown.
    pub transformer_kva: f64,
    /// Selects the column of the demand-factor table.
    pub social_class: SocialClass,
}

/// Validates networks and calculates their loads and costs.
///
/// The engine holds no state besides its reference tables and configuration,
/// so a single instance can serve calculations from many threads at once.
pub struct CqtEngine<P>
where
    P: TableProvider,
{
    tables: P,
    config: NetworkConfig,
}

impl<P> CqtEngine<P>
where
    P: TableProvider,
{
    /// Creates a new engine from the given reference tables and
    /// configuration.
    pub fn new(tables: P, config: NetworkConfig) -> Self {
        Self { tables, config }
    }

    /// Validates the given segments, and returns the normalized point ids in
    /// processing order.
    pub fn validate<S: Segment>(
        &self,
        segments: impl IntoIterator<Item = S>,
    ) -> Result<Vec<NodeId>, Error> {
        let graph = NetworkGraph::try_new(segments, &self.config)?;
        Ok(graph.order().cloned().collect())
    }

    /// Validates the given segments and calculates the load and cost of every
    /// segment.
    ///
    /// Returns the first validation error, if any, and no partial results.
    pub fn calculate<S: Segment>(
        &self,
        segments: impl IntoIterator<Item = S>,
        request: &CalculationRequest,
    ) -> Result<NetworkResult, Error> {
        let graph = NetworkGraph::try_new(segments, &self.config)?;
        graph.calculate(&self.tables, request, self.config.cqt_limit)
    }

    /// Returns the engine's reference tables.
    pub fn tables(&self) -> &P {
        &self.tables
    }

    /// Returns the engine's configuration.
    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }
}
