// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module contains the configuration options for the network
//! calculation.

use crate::NodeId;

/// The identifier of the source transformer, when not configured otherwise.
pub const DEFAULT_ROOT_ID: &str = "ROOT";

/// The design limit for the cumulative cost, when not configured otherwise.
pub const DEFAULT_CQT_LIMIT: f64 = 5.0;

/// Configuration options for validating and calculating a network.
#[derive(Clone, Debug)]
pub struct NetworkConfig {
    /// The point id that identifies the source transformer.  Exactly one
    /// segment must carry it.
    pub root_id: NodeId,

    /// Segments whose cumulative cost is above this value are reported as
    /// non-compliant.  Must be finite and not negative.
    pub cqt_limit: f64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            root_id: NodeId::new(DEFAULT_ROOT_ID),
            cqt_limit: DEFAULT_CQT_LIMIT,
        }
    }
}
