// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Reference tables used by the calculation: the cost coefficient of each
//! cable type and the demand-factor bands.
//!
//! The calculation only sees these through the [`TableProvider`] trait.  The
//! tables are built once, by whoever owns the reference data, and shared
//! read-only between calculations.

use std::collections::HashMap;
use std::sync::Arc;

use crate::{Error, SocialClass};

/// Lookup interface for the reference data of a calculation.
pub trait TableProvider {
    /// Returns the cost coefficient, per hectometer, for the given cable
    /// type, or `None` if the cable type is unknown.
    fn cable_coefficient(&self, cable_type: &str) -> Option<f64>;

    /// Returns the demand factor for a network with `total_customers`
    /// customers in the given social class.
    fn demand_factor(&self, total_customers: u64, social_class: SocialClass) -> f64;
}

impl<P: TableProvider + ?Sized> TableProvider for &P {
    fn cable_coefficient(&self, cable_type: &str) -> Option<f64> {
        (**self).cable_coefficient(cable_type)
    }

    fn demand_factor(&self, total_customers: u64, social_class: SocialClass) -> f64 {
        (**self).demand_factor(total_customers, social_class)
    }
}

impl<P: TableProvider + ?Sized> TableProvider for Arc<P> {
    fn cable_coefficient(&self, cable_type: &str) -> Option<f64> {
        (**self).cable_coefficient(cable_type)
    }

    fn demand_factor(&self, total_customers: u64, social_class: SocialClass) -> f64 {
        (**self).demand_factor(total_customers, social_class)
    }
}

/// Cost coefficients per cable type.
///
/// Cable types are matched exactly, after trimming surrounding whitespace.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CableCoefficients {
    coefficients: HashMap<String, f64>,
}

impl CableCoefficients {
    /// Creates an empty coefficient table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a coefficient table from `(cable type, coefficient)` pairs.
    ///
    /// Returns an error if any coefficient is negative or not finite.
    pub fn try_new<K: AsRef<str>>(
        coefficients: impl IntoIterator<Item = (K, f64)>,
    ) -> Result<Self, Error> {
        let mut table = CableCoefficients::new();
        for (cable_type, coefficient) in coefficients {
            table.insert(cable_type.as_ref(), coefficient)?;
        }
        Ok(table)
    }

    /// Adds or replaces the coefficient for a cable type.
    ///
    /// Returns an error, and leaves the table unchanged, if the coefficient
    /// is negative or not finite.
    pub fn insert(&mut self, cable_type: &str, coefficient: f64) -> Result<&mut Self, Error> {
        if !is_valid_coefficient(coefficient) {
            return Err(Error::invalid_table(format!(
                "Cable type {:?} has invalid coefficient {coefficient}.",
                cable_type.trim()
            )));
        }
        self.coefficients
            .insert(cable_type.trim().to_string(), coefficient);
        Ok(self)
    }

    /// Returns the coefficient for a cable type, if known.
    pub fn get(&self, cable_type: &str) -> Option<f64> {
        self.coefficients.get(cable_type.trim()).copied()
    }

    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }
}

/// Cable coefficients must be finite and not negative.
pub(crate) fn is_valid_coefficient(coefficient: f64) -> bool {
    coefficient.is_finite() && coefficient >= 0.0
}

/// Demand factors must be finite and positive.
pub(crate) fn is_valid_demand_factor(factor: f64) -> bool {
    factor.is_finite() && factor > 0.0
}

/// A row of the demand-factor table: the factors that apply to networks
/// with `min..=max` customers, one per social class.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DemandBand {
    pub min: u64,
    pub max: u64,
    pub factors: [f64; 4],
}

impl DemandBand {
    pub const fn new(min: u64, max: u64, factors: [f64; 4]) -> Self {
        Self { min, max, factors }
    }

    fn contains(&self, total_customers: u64) -> bool {
        (self.min..=self.max).contains(&total_customers)
    }

    /// Returns the factor for the given social class.
    pub fn factor(&self, social_class: SocialClass) -> f64 {
        self.factors[social_class.column()]
    }
}

/// The standard demand-factor bands, in kVA per customer, for classes A to D.
const STANDARD_BANDS: [DemandBand; 7] = [
    DemandBand::new(1, 5, [3.00, 2.50, 2.00, 1.50]),
    DemandBand::new(6, 10, [2.60, 2.20, 1.80, 1.30]),
    DemandBand::new(11, 20, [2.30, 1.90, 1.55, 1.15]),
    DemandBand::new(21, 30, [2.00, 1.70, 1.40, 1.05]),
    DemandBand::new(31, 50, [1.80, 1.50, 1.25, 0.95]),
    DemandBand::new(51, 100, [1.60, 1.35, 1.10, 0.85]),
    DemandBand::new(101, 200, [1.40, 1.20, 1.00, 0.80]),
];

/// The demand-factor table, an ordered list of [`DemandBand`]s.
#[derive(Clone, Debug, PartialEq)]
pub struct DemandTable {
    bands: Vec<DemandBand>,
}

impl DemandTable {
    /// Creates a demand table from the given bands.
    ///
    /// Returns an error if there are no bands, if a band's `min` is above
    /// its `max`, if the bands are not sorted by `min`, or if any factor
    /// is not a positive number.
    pub fn try_new(bands: impl IntoIterator<Item = DemandBand>) -> Result<Self, Error> {
        let bands: Vec<DemandBand> = bands.into_iter().collect();
        if bands.is_empty() {
            return Err(Error::invalid_table("Demand table has no bands."));
        }

        for (i, band) in bands.iter().enumerate() {
            if band.min > band.max {
                return Err(Error::invalid_table(format!(
                    "Band {i} has min {} above max {}.",
                    band.min, band.max
                )));
            }
            if i > 0 && bands[i - 1].min > band.min {
                return Err(Error::invalid_table(format!(
                    "Band {i} starts at {} before band {} at {}.",
                    band.min,
                    i - 1,
                    bands[i - 1].min
                )));
            }
            if let Some(factor) = band.factors.iter().find(|f| !is_valid_demand_factor(**f)) {
                return Err(Error::invalid_table(format!(
                    "Band {i} has invalid factor {factor}."
                )));
            }
        }

        Ok(Self { bands })
    }

    /// Returns the band that applies to a network with `total_customers`
    /// customers.
    ///
    /// The first band containing the count is used.  Counts above every
    /// band use the last band, and counts below every band (and counts in
    /// a gap between bands) use the nearest band below, or the first band.
    pub fn band(&self, total_customers: u64) -> &DemandBand {
        if let Some(band) = self.bands.iter().find(|b| b.contains(total_customers)) {
            return band;
        }
        self.bands
            .iter()
            .rev()
            .find(|b| b.max < total_customers)
            .unwrap_or(&self.bands[0])
    }

    /// Returns the demand factor for the given customer count and class.
    pub fn factor(&self, total_customers: u64, social_class: SocialClass) -> f64 {
        self.band(total_customers).factor(social_class)
    }

    /// Returns the bands of the table.
    pub fn bands(&self) -> &[DemandBand] {
        &self.bands
    }
}

impl Default for DemandTable {
    fn default() -> Self {
        Self {
            bands: STANDARD_BANDS.to_vec(),
        }
    }
}

/// In-memory [`TableProvider`].
#[derive(Clone, Debug, Default)]
pub struct StaticTables {
    pub cables: CableCoefficients,
    pub demand: DemandTable,
}

impl StaticTables {
    pub fn new(cables: CableCoefficients, demand: DemandTable) -> Self {
        Self { cables, demand }
    }
}

impl TableProvider for StaticTables {
    fn cable_coefficient(&self, cable_type: &str) -> Option<f64> {
        self.cables.get(cable_type)
    }

    fn demand_factor(&self, total_customers: u64, social_class: SocialClass) -> f64 {
        self.demand.factor(total_customers, social_class)
    }
}
