// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module contains the `Segment` trait, which needs to be implemented by
//! the types that describe a row of the network, and `SegmentInput`, the
//! library's own implementation of it.

/// The number of customers connected to a segment, per connection class.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CustomerCounts {
    pub mono: u32,
    pub bi: u32,
    pub tri: u32,
    pub tri_special: u32,
}

impl CustomerCounts {
    /// Creates a new `CustomerCounts` from the per-class counts.
    pub fn new(mono: u32, bi: u32, tri: u32, tri_special: u32) -> Self {
        Self {
            mono,
            bi,
            tri,
            tri_special,
        }
    }

    /// Returns the number of customers across all connection classes.
    pub fn total(&self) -> u64 {
        [self.mono, self.bi, self.tri, self.tri_special]
            .into_iter()
            .map(u64::from)
            .sum()
    }
}

/**
This trait needs to be implemented by the type that represents a segment of
the network.

A segment is the stretch of line that ends at a point, so a segment and its
end point share the same id.  The segment's start is the `upstream_id`
point, which is empty only for the root.

Callers that already have a row type, for example one loaded from a
database or deserialized from a request, can implement this trait for it
instead of converting to [`SegmentInput`].

<details>
<summary>Example implementation:</summary>

```ignore
impl radial_network_cqt::Segment for db::PostRow {
    fn point_id(&self) -> &str {
        &self.code
    }

    fn upstream_id(&self) -> &str {
        self.parent_code.as_deref().unwrap_or("")
    }

    fn length_m(&self) -> f64 {
        self.span_m
    }

    fn cable_type(&self) -> &str {
        &self.conductor
    }

    fn customers(&self) -> radial_network_cqt::CustomerCounts {
        radial_network_cqt::CustomerCounts::new(self.mono, self.bi, self.tri, self.tri_esp)
    }

    fn point_load_kva(&self) -> f64 {
        self.special_load_kva.unwrap_or(0.0)
    }
}
```

</details>
*/
pub trait Segment {
    /// Returns the id of the point at the end of the segment.
    fn point_id(&self) -> &str;
    /// Returns the id of the point the segment is fed from.
    fn upstream_id(&self) -> &str;
    /// Returns the length of the segment in meters.
    fn length_m(&self) -> f64;
    /// Returns the cable type, used to look up the cost coefficient.
    fn cable_type(&self) -> &str;
    /// Returns the customers connected at the segment.
    fn customers(&self) -> CustomerCounts;
    /// Returns a fixed load, in kVA, to which no demand factor applies.
    fn point_load_kva(&self) -> f64;
}

/// One row of a network description.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SegmentInput {
    pub point_id: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub upstream_id: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub length_m: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub cable_type: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub customers: CustomerCounts,
    #[cfg_attr(feature = "serde", serde(default))]
    pub point_load_kva: f64,
}

impl SegmentInput {
    /// Creates the row of the source transformer.
    pub fn root(point_id: impl Into<String>) -> Self {
        Self {
            point_id: point_id.into(),
            ..Default::default()
        }
    }

    /// Creates a row fed from `upstream_id`, without length, cable or load.
    pub fn new(point_id: impl Into<String>, upstream_id: impl Into<String>) -> Self {
        Self {
            point_id: point_id.into(),
            upstream_id: upstream_id.into(),
            ..Default::default()
        }
    }

    pub fn with_length(mut self, length_m: f64) -> Self {
        self.length_m = length_m;
        self
    }

    pub fn with_cable(mut self, cable_type: impl Into<String>) -> Self {
        self.cable_type = cable_type.into();
        self
    }

    pub fn with_customers(mut self, customers: CustomerCounts) -> Self {
        self.customers = customers;
        self
    }

    pub fn with_point_load(mut self, point_load_kva: f64) -> Self {
        self.point_load_kva = point_load_kva;
        self
    }
}

impl Segment for SegmentInput {
    fn point_id(&self) -> &str {
        &self.point_id
    }

    fn upstream_id(&self) -> &str {
        &self.upstream_id
    }

    fn length_m(&self) -> f64 {
        self.length_m
    }

    fn cable_type(&self) -> &str {
        &self.cable_type
    }

    fn customers(&self) -> CustomerCounts {
        self.customers
    }

    fn point_load_kva(&self) -> f64 {
        self.point_load_kva
    }
}

impl<S: Segment> Segment for &S {
    fn point_id(&self) -> &str {
        (*self).point_id()
    }

    fn upstream_id(&self) -> &str {
        (*self).upstream_id()
    }

    fn length_m(&self) -> f64 {
        (*self).length_m()
    }

    fn cable_type(&self) -> &str {
        (*self).cable_type()
    }

    fn customers(&self) -> CustomerCounts {
        (*self).customers()
    }

    fn point_load_kva(&self) -> f64 {
        (*self).point_load_kva()
    }
}
