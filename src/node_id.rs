// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! The normalized identifier of a point in the network.

use std::fmt::Display;

/// The identifier of a point (and of the segment that ends at it).
///
/// Point ids are case-insensitive in the input.  A `NodeId` holds the
/// canonical form, trimmed and upper-cased, so that it can be compared and
/// hashed directly.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "String", into = "String")
)]
pub struct NodeId(String);

impl NodeId {
    /// Creates a `NodeId` from a raw identifier, normalizing it.
    pub fn new(raw: &str) -> Self {
        NodeId(raw.trim().to_uppercase())
    }

    /// Returns the normalized identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the identifier is empty after normalization.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for NodeId {
    fn from(raw: &str) -> Self {
        NodeId::new(raw)
    }
}

impl From<String> for NodeId {
    fn from(raw: String) -> Self {
        NodeId::new(&raw)
    }
}

impl From<NodeId> for String {
    fn from(id: NodeId) -> Self {
        id.0
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
