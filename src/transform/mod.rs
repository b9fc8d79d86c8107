//! transform — the RDM transform engine.
//!
//! Purpose
//! -------
//! Remap batches of RDMs into new batches: monotonic remappings (rank,
//! sqrt, positive), rescalings with one batch-wide scale (min-max,
//! geo-topological), a caller-supplied block function, and the graph
//! geodesic transform. Every transform returns a new container with an
//! updated measure label and copied descriptors.
//!
//! Key behaviors
//! -------------
//! - All transforms are generic over [`RdmBatch`](crate::rdm::RdmBatch) and
//!   follow extract → compute → re-wrap through [`provenance::rewrap`].
//! - Parameters are validated value types ([`RankMethod`],
//!   [`QuantileBand`], [`RangePolicy`]); invalid input is rejected before
//!   any computation.
//! - [`Transform`] names a configured transform so pipelines can be built
//!   from data.
//!
//! Invariants & assumptions
//! ------------------------
//! - The input batch is never mutated and output shape equals input shape.
//! - Batch-wide statistics are computed once per call, never per row.
//! - Degenerate ranges are an error under [`RangePolicy::Strict`] (the
//!   default) and propagate NaN/±∞ under [`RangePolicy::Propagate`].
//! - Disconnected patterns in the geodesic transform yield `f64::INFINITY`,
//!   which is valid output.
//!
//! Conventions
//! -----------
//! - Every transform emits a `tracing` debug event on entry; the crate
//!   never installs a subscriber.
//! - Errors are reported through [`TransformError`] / [`TransformResult`].
//!
//! Downstream usage
//! ----------------
//! ```rust
//! use ndarray::array;
//! use rdm_transforms::rdm::{Rdms, RdmBatch};
//! use rdm_transforms::transform::prelude::*;
//!
//! let rdms = Rdms::from_vectors(array![[0.0, 5.0, 15.0]], Some("euclidean"))?;
//! let ranked = rank_transform(&rdms, RankMethod::Average)?;
//! assert_eq!(ranked.dissimilarity_measure(), Some("euclidean (ranks)"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Testing notes
//! -------------
//! - Unit tests live beside each submodule; batch-level properties are
//!   checked with `proptest` in `tests/transform_properties.rs`.

pub mod dispatch;
pub mod elementwise;
pub mod errors;
pub mod geodesic;
pub mod numerics;
pub mod options;
pub mod provenance;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::dispatch::Transform;
pub use self::elementwise::{
    geotopological_transform, geotopological_transform_with, minmax_transform,
    minmax_transform_with, positive_transform, rank_transform, sqrt_transform, transform,
};
pub use self::errors::{TransformError, TransformResult};
pub use self::geodesic::{geodesic_transform, geodesic_transform_with};
pub use self::options::{QuantileBand, RangePolicy, RankMethod};
pub use self::provenance::MeasureLabel;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use rdm_transforms::transform::prelude::*;
//
// to import every transform and its option types in a single line.

pub mod prelude {
    pub use super::dispatch::Transform;
    pub use super::elementwise::{
        geotopological_transform, geotopological_transform_with, minmax_transform,
        minmax_transform_with, positive_transform, rank_transform, sqrt_transform, transform,
    };
    pub use super::errors::{TransformError, TransformResult};
    pub use super::geodesic::{geodesic_transform, geodesic_transform_with};
    pub use super::options::{QuantileBand, RangePolicy, RankMethod};
}
