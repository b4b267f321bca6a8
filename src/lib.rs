// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

/*!
# Radial Network CQT

This is a library for calculating the loads and the cumulative cost metric
("CQT") of the segments of a radial electrical distribution network: a tree of
line segments that feeds customer loads from a single source transformer.

## Segments

A network is described by an iterator of segments, one per point of the
network.  Each segment names its point, the upstream point it is fed from, its
length and cable type, and the loads connected at its end.

The library provides [`SegmentInput`] for this, but callers can also use their
own row types by implementing the [`Segment`] trait.  Point ids are matched
case-insensitively, and are normalized into [`NodeId`]s.

## Validation

[`NetworkGraph::try_new`] checks that:

- There is at least one segment.
- Point ids are unique.
- Lengths and point loads are finite and not negative.
- There is a segment for the root point.
- Every other segment has an upstream point.
- Every point can be reached from the root, which rules out cycles and
  segments fed from unknown points.

If any of the checks fail, an [`Error`] is returned, and a [`NetworkGraph`]
otherwise.

## Calculation

[`CqtEngine::calculate`] validates the segments and then:

- looks up a single demand factor for the number of customers in the whole
  network, from the injected [`TableProvider`],
- aggregates the loads from the leaves towards the root,
- propagates the segment costs from the root towards the leaves,
- compares the cumulative cost of every point against the configured limit.

Cable types without a coefficient add no cost, and are listed in the
[`Summary`] instead of failing the calculation.
*/

mod config;
pub use config::{NetworkConfig, DEFAULT_CQT_LIMIT, DEFAULT_ROOT_ID};

mod engine;
pub use engine::{CalculationRequest, CqtEngine};

mod graph;
pub use graph::{iterators, NetworkGraph};

mod graph_traits;
pub use graph_traits::{CustomerCounts, Segment, SegmentInput};

mod node_id;
pub use node_id::NodeId;

mod results;
pub use results::{NetworkResult, NodeResult, Summary};

mod social_class;
pub use social_class::SocialClass;

mod tables;
pub use tables::{CableCoefficients, DemandBand, DemandTable, StaticTables, TableProvider};

mod error;
pub use error::{Error, ErrorKind};
