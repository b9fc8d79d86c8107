//! transform::dispatch — name a transform and its parameters as a value.
//!
//! [`Transform`] lets callers build a pipeline of transforms from
//! configuration (e.g. a list read from the Python side) and apply them
//! uniformly. The generic-function transform is not representable here;
//! call [`transform`](crate::transform::transform) directly for it.

use crate::{
    graph::PetgraphBackend,
    rdm::container::RdmBatch,
    transform::{
        elementwise::{
            geotopological_transform_with, minmax_transform_with, positive_transform,
            rank_transform, sqrt_transform,
        },
        errors::TransformResult,
        geodesic::geodesic_transform_with,
        options::{QuantileBand, RangePolicy, RankMethod},
    },
};

/// One configured RDM transform.
///
/// Variants
/// --------
/// - `Rank(method)`, `Sqrt`, `Positive`
/// - `MinMax(policy)`
/// - `GeoTopological(band, policy)`
/// - `Geodesic(policy)`: uses [`PetgraphBackend`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    Rank(RankMethod),
    Sqrt,
    Positive,
    MinMax(RangePolicy),
    GeoTopological(QuantileBand, RangePolicy),
    Geodesic(RangePolicy),
}

impl Transform {
    /// Apply the transform to `rdms`, returning a new batch.
    pub fn apply<R: RdmBatch>(&self, rdms: &R) -> TransformResult<R> {
        match *self {
            Transform::Rank(method) => rank_transform(rdms, method),
            Transform::Sqrt => sqrt_transform(rdms),
            Transform::Positive => positive_transform(rdms),
            Transform::MinMax(policy) => minmax_transform_with(rdms, policy),
            Transform::GeoTopological(band, policy) => {
                geotopological_transform_with(rdms, band, policy)
            }
            Transform::Geodesic(policy) => geodesic_transform_with(rdms, &PetgraphBackend, policy),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Transform::Rank(_) => "rank",
            Transform::Sqrt => "sqrt",
            Transform::Positive => "positive",
            Transform::MinMax(_) => "minmax",
            Transform::GeoTopological(..) => "geo-topological",
            Transform::Geodesic(_) => "geodesic",
        }
    }
}
