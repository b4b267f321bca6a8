// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module contains the top-down propagation of segment costs.

use crate::tables::is_valid_coefficient;
use crate::{Error, NetworkGraph, NodeId, NodeResult, Segment, TableProvider};

/// Segment lengths are given in meters, cable coefficients per hectometer.
const METERS_PER_HECTOMETER: f64 = 100.0;

/// Computes the cost of every segment and accumulates the costs from the
/// root towards the leaves.
pub(super) struct CostPropagator<'a, S, P>
where
    S: Segment,
    P: TableProvider,
{
    graph: &'a NetworkGraph<S>,
    tables: &'a P,
}

impl<'a, S, P> CostPropagator<'a, S, P>
where
    S: Segment,
    P: TableProvider,
{
    pub(super) fn new(graph: &'a NetworkGraph<S>, tables: &'a P) -> Self {
        Self { graph, tables }
    }

    /// Fills in the costs of the given aggregated results.
    ///
    /// Segments with a cable type missing from the tables add no cost.  Their
    /// ids are returned, parents first.
    ///
    /// Returns an error if the tables return a negative or non-finite
    /// coefficient.
    pub(super) fn propagate(self, results: &mut [NodeResult]) -> Result<Vec<NodeId>, Error> {
        let mut unknown_cable_ids = Vec::new();

        for idx in &self.graph.order {
            if *idx == self.graph.root {
                results[idx.index()].segment_cost = 0.0;
                results[idx.index()].cumulative_cost = 0.0;
                continue;
            }

            let point = &self.graph.graph[*idx];
            let parent = self.graph.parent_index(*idx).ok_or_else(|| {
                Error::internal(format!("Ordered point {} has no upstream point.", point.id))
                    .with_points([point.id.clone()])
            })?;

            let coefficient = match self.tables.cable_coefficient(point.segment.cable_type()) {
                Some(coefficient) if is_valid_coefficient(coefficient) => coefficient,
                Some(coefficient) => {
                    return Err(Error::invalid_table(format!(
                        "Cable type {:?} of point {} has invalid coefficient {coefficient}.",
                        point.segment.cable_type(),
                        point.id
                    ))
                    .with_points([point.id.clone()]));
                }
                None => {
                    tracing::warn!(
                        "Unknown cable type {:?} for point {}, its cost is set to zero.",
                        point.segment.cable_type(),
                        point.id
                    );
                    unknown_cable_ids.push(point.id.clone());
                    0.0
                }
            };

            let parent_cost = results[parent.index()].cumulative_cost;
            let result = &mut results[idx.index()];

            // Half of the own distributed load, all of the downstream load.
            let downstream_kva = result.accumulated_kva - result.local_total_kva;
            let moment =
                result.local_distributed_kva / 2.0 + result.local_point_kva + downstream_kva;

            result.segment_cost =
                moment * (point.segment.length_m() / METERS_PER_HECTOMETER) * coefficient;
            result.cumulative_cost = parent_cost + result.segment_cost;
        }

        Ok(unknown_cable_ids)
    }
}

#[cfg(test)]
mod tests {
    use super::super::aggregation::LoadAggregator;
    use super::*;
    use crate::graph::test_utils::{test_tables, NetworkBuilder};
    use crate::{CustomerCounts, SegmentInput};

    fn calculate(
        builder: &NetworkBuilder,
        demand_factor: f64,
    ) -> Result<Vec<(String, NodeResult)>, Error> {
        let graph = builder.build()?;
        let mut results = LoadAggregator::new(&graph, demand_factor).aggregate();
        CostPropagator::new(&graph, &test_tables()).propagate(&mut results)?;

        graph
            .order()
            .map(|id| -> Result<_, Error> {
                Ok((id.to_string(), results[graph.index_of(id.as_str())?.index()]))
            })
            .collect()
    }

    #[test]
    fn test_segment_cost() -> Result<(), Error> {
        let mut builder = NetworkBuilder::new();
        builder.root();
        builder.add(
            SegmentInput::new("P1", "ROOT")
                .with_length(200.0)
                .with_cable("CA-25")
                .with_customers(CustomerCounts::new(4, 0, 0, 0))
                .with_point_load(3.0),
        );

        let results = calculate(&builder, 2.5)?;
        assert_eq!(results[0].1.segment_cost, 0.0);
        assert_eq!(results[0].1.cumulative_cost, 0.0);

        // moment = 10 / 2 + 3 = 8; cost = 8 * 2hm * 1.0
        assert_eq!(results[1].0, "P1");
        assert_eq!(results[1].1.segment_cost, 16.0);
        assert_eq!(results[1].1.cumulative_cost, 16.0);

        Ok(())
    }

    #[test]
    fn test_cumulative_cost() -> Result<(), Error> {
        let mut builder = NetworkBuilder::new();
        let root = builder.root();
        let p1 = builder.point(&root);
        let p2 = builder.point(&p1);
        builder.point(&p2);

        // Each point: 2 kVA local, 100m of cable at 0.5 per hectometer.
        let results = calculate(&builder, 2.0)?;
        let costs: Vec<_> = results
            .iter()
            .map(|(id, r)| (id.as_str(), r.segment_cost, r.cumulative_cost))
            .collect();

        // P3: moment 1; P2: moment 1 + 2; P1: moment 1 + 4.
        assert_eq!(
            costs,
            [
                ("ROOT", 0.0, 0.0),
                ("P1", 2.5, 2.5),
                ("P2", 1.5, 4.0),
                ("P3", 0.5, 4.5),
            ]
        );

        Ok(())
    }

    #[test]
    fn test_unknown_cable() -> Result<(), Error> {
        let mut builder = NetworkBuilder::new();
        let root = builder.root();
        builder.add(
            SegmentInput::new("X1", "ROOT")
                .with_length(100.0)
                .with_cable("XLPE-999")
                .with_customers(CustomerCounts::new(1, 0, 0, 0)),
        );
        builder.add(
            SegmentInput::new("X2", "X1")
                .with_length(100.0)
                .with_cable("CA-50")
                .with_customers(CustomerCounts::new(1, 0, 0, 0)),
        );
        builder.point(&root);

        let graph = builder.build()?;
        let mut results = LoadAggregator::new(&graph, 2.0).aggregate();
        let unknown = CostPropagator::new(&graph, &test_tables()).propagate(&mut results)?;
        assert_eq!(unknown, [NodeId::new("X1")]);

        let x1 = results[graph.index_of("X1")?.index()];
        let x2 = results[graph.index_of("X2")?.index()];
        assert_eq!(x1.segment_cost, 0.0);
        assert_eq!(x1.cumulative_cost, 0.0);
        // X2 still adds its own cost on top of the zero-cost X1.
        assert_eq!(x2.segment_cost, 0.5);
        assert_eq!(x2.cumulative_cost, 0.5);

        Ok(())
    }

    /// Returns the given coefficient for every cable type.
    struct FixedCoefficient(f64);

    impl TableProvider for FixedCoefficient {
        fn cable_coefficient(&self, _cable_type: &str) -> Option<f64> {
            Some(self.0)
        }

        fn demand_factor(&self, _total_customers: u64, _social_class: crate::SocialClass) -> f64 {
            1.0
        }
    }

    #[test]
    fn test_invalid_coefficient() -> Result<(), Error> {
        let mut builder = NetworkBuilder::new();
        let root = builder.root();
        let p1 = builder.point(&root);
        builder.point(&p1);
        let graph = builder.build()?;

        for coefficient in [-1.0, f64::NAN, f64::INFINITY] {
            let mut results = LoadAggregator::new(&graph, 2.0).aggregate();
            assert!(CostPropagator::new(&graph, &FixedCoefficient(coefficient))
                .propagate(&mut results)
                .is_err_and(|e| e.kind() == crate::ErrorKind::InvalidTable
                    && e.point_ids() == [NodeId::new("P1")]));
        }

        // A zero coefficient is valid and adds no cost.
        let mut results = LoadAggregator::new(&graph, 2.0).aggregate();
        let unknown =
            CostPropagator::new(&graph, &FixedCoefficient(0.0)).propagate(&mut results)?;
        assert!(unknown.is_empty());
        assert!(results.iter().all(|r| r.cumulative_cost == 0.0));

        Ok(())
    }
}
