// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Load and cost calculation over a validated [`NetworkGraph`].

mod aggregation;
mod compliance;
mod propagation;

use std::collections::BTreeMap;

use crate::{
    CalculationRequest, Error, NetworkGraph, NetworkResult, Segment, Summary, TableProvider,
};

use crate::tables::is_valid_demand_factor;

use aggregation::LoadAggregator;
use compliance::ComplianceEvaluator;
use propagation::CostPropagator;

impl<S> NetworkGraph<S>
where
    S: Segment,
{
    /// Calculates the loads and costs of every segment, and checks them
    /// against `cqt_limit`.
    ///
    /// A single demand factor, looked up from the number of customers in
    /// the whole network, applies to every segment.
    ///
    /// Returns an error if `cqt_limit` is negative or not finite, or if the
    /// tables return a demand factor that is not positive and finite.
    pub fn calculate<P: TableProvider>(
        &self,
        tables: &P,
        request: &CalculationRequest,
        cqt_limit: f64,
    ) -> Result<NetworkResult, Error> {
        if !cqt_limit.is_finite() || cqt_limit < 0.0 {
            return Err(Error::invalid_config(format!("Invalid cost limit: {cqt_limit}")));
        }

        let total_customers = self.total_customers();
        let demand_factor = tables.demand_factor(total_customers, request.social_class);
        if !is_valid_demand_factor(demand_factor) {
            return Err(Error::invalid_table(format!(
                "Invalid demand factor {} for {} customers of class {}.",
                demand_factor, total_customers, request.social_class
            )));
        }
        tracing::debug!(
            "Using demand factor {} for {} customers of class {}.",
            demand_factor,
            total_customers,
            request.social_class
        );

        let mut results = LoadAggregator::new(self, demand_factor).aggregate();
        let unknown_cable_ids = CostPropagator::new(self, tables).propagate(&mut results)?;
        let compliance = ComplianceEvaluator::new(cqt_limit).evaluate(self, &results);

        let total_accumulated_kva = results[self.root.index()].accumulated_kva;
        let transformer_loading = (request.transformer_kva > 0.0)
            .then(|| total_accumulated_kva / request.transformer_kva);

        tracing::debug!(
            "Maximum cumulative cost {} against limit {}, {} points over the limit.",
            compliance.max_cumulative_cost,
            cqt_limit,
            compliance.over_limit_ids.len()
        );

        let order = self.order().cloned().collect();
        let nodes = self
            .order
            .iter()
            .map(|idx| (self.graph[*idx].id.clone(), results[idx.index()]))
            .collect::<BTreeMap<_, _>>();

        Ok(NetworkResult {
            nodes,
            order,
            summary: Summary {
                demand_factor,
                social_class: request.social_class,
                total_customers,
                max_cumulative_cost: compliance.max_cumulative_cost,
                total_accumulated_kva,
                transformer_kva: request.transformer_kva,
                transformer_loading,
                cqt_limit,
                within_limit: compliance.within_limit,
                over_limit_ids: compliance.over_limit_ids,
                unknown_cable_ids,
            },
        })
    }
}
