//! rdm — RDM batches, descriptors, and condensed-form utilities.
//!
//! Purpose
//! -------
//! Provide the container side of the transform engine: the [`RdmBatch`]
//! capability trait, a concrete in-memory [`Rdms`] batch, copy-on-write
//! [`Descriptors`], and the condensed ↔ square conversions in
//! [`condensed`].
//!
//! Key behaviors
//! -------------
//! - Validate batch shape (`n_pairs` must be triangular) and descriptor
//!   lengths at construction time.
//! - Hand out owned working copies of the dissimilarity block so
//!   transforms never mutate the caller's batch.
//! - Keep descriptor copies independent without deep-cloning on every
//!   transform.
//!
//! Conventions
//! -----------
//! - A batch is an `Array2<f64>` with one condensed RDM per row.
//! - Errors are reported through [`RdmsError`] / [`RdmsResult`].
//!
//! Testing notes
//! -------------
//! - Each submodule carries unit tests for its validation branches;
//!   descriptor isolation across transforms is covered in
//!   `tests/integration_transform_pipeline.rs`.

pub mod condensed;
pub mod container;
pub mod descriptors;
pub mod errors;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::container::{RdmBatch, Rdms};
pub use self::descriptors::{DescriptorValue, Descriptors};
pub use self::errors::{RdmsError, RdmsResult};
