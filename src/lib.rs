//! rdm_transforms — transforms for batches of representational dissimilarity
//! matrices, with optional Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that
//! exposes the RDM transform engine to Python via the `_rdm_transforms`
//! extension module.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust modules: [`rdm`] (container, descriptors,
//!   condensed form), [`transform`] (the transform engine), and [`graph`]
//!   (shortest-path backends used by the geodesic transform).
//! - Define `#[pyfunction]` wrappers and the `#[pymodule]` initializer for
//!   the `_rdm_transforms` Python extension.
//! - Register the `transforms` submodule under `rdm_transforms` so that
//!   dot-notation imports work as expected.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work is implemented in the inner Rust modules; this file
//!   performs only FFI glue, option parsing, and error mapping.
//! - Python callers pass a `(n_rdm × n_pairs)` block (or a single condensed
//!   vector) plus an optional measure label and receive the transformed
//!   block and its new label.
//!
//! Conventions
//! -----------
//! - Errors from core Rust code are propagated as rich error types
//!   internally and converted to `ValueError` at the PyO3 boundary.
//! - Python-side option names mirror the Rust option types: `method` maps
//!   to [`RankMethod`](transform::RankMethod), `l`/`u` to
//!   [`QuantileBand`](transform::QuantileBand), and `propagate=True` to
//!   [`RangePolicy::Propagate`](transform::RangePolicy::Propagate).
//!
//! Downstream usage
//! ----------------
//! - Native Rust code depends directly on [`rdm`] and [`transform`] and can
//!   ignore the items guarded by the `python-bindings` feature.
//! - The Python packaging layer imports `_rdm_transforms` and wraps the
//!   functions of its `transforms` submodule.

pub mod graph;
pub mod rdm;
pub mod transform;
pub mod utils;

#[cfg(feature = "python-bindings")]
use std::str::FromStr;

#[cfg(feature = "python-bindings")]
use numpy::PyArray2;

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    transform::{QuantileBand, RangePolicy, RankMethod, Transform},
    utils::{build_rdms, into_py_output},
};

#[cfg(feature = "python-bindings")]
type PyTransformOutput<'py> = (Bound<'py, PyArray2<f64>>, Option<String>);

#[cfg(feature = "python-bindings")]
fn range_policy(propagate: bool) -> RangePolicy {
    if propagate { RangePolicy::Propagate } else { RangePolicy::Strict }
}

/// Run one configured transform on a Python array-like.
#[cfg(feature = "python-bindings")]
fn run_transform<'py>(
    py: Python<'py>, dissimilarities: &Bound<'py, PyAny>, measure: Option<&str>,
    step: Transform,
) -> PyResult<PyTransformOutput<'py>> {
    let rdms = build_rdms(py, dissimilarities, measure)?;
    let transformed = step.apply(&rdms)?;
    Ok(into_py_output(py, transformed))
}

/// Rank-transform each RDM; ties follow `method`
/// (`"average"`, `"min"`, `"max"`, `"dense"`, `"ordinal"`).
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(
    name = "rank_transform",
    signature = (dissimilarities, measure = None, method = "average"),
    text_signature = "(dissimilarities, /, measure=None, method='average')"
)]
fn py_rank_transform<'py>(
    py: Python<'py>, dissimilarities: &Bound<'py, PyAny>, measure: Option<&str>, method: &str,
) -> PyResult<PyTransformOutput<'py>> {
    let method = RankMethod::from_str(method)?;
    run_transform(py, dissimilarities, measure, Transform::Rank(method))
}

/// Clamp negatives to zero and take square roots.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(
    name = "sqrt_transform",
    signature = (dissimilarities, measure = None),
    text_signature = "(dissimilarities, /, measure=None)"
)]
fn py_sqrt_transform<'py>(
    py: Python<'py>, dissimilarities: &Bound<'py, PyAny>, measure: Option<&str>,
) -> PyResult<PyTransformOutput<'py>> {
    run_transform(py, dissimilarities, measure, Transform::Sqrt)
}

/// Clamp negatives to zero.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(
    name = "positive_transform",
    signature = (dissimilarities, measure = None),
    text_signature = "(dissimilarities, /, measure=None)"
)]
fn py_positive_transform<'py>(
    py: Python<'py>, dissimilarities: &Bound<'py, PyAny>, measure: Option<&str>,
) -> PyResult<PyTransformOutput<'py>> {
    run_transform(py, dissimilarities, measure, Transform::Positive)
}

/// Rescale the batch to `[0, 1]` with one global min and max.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(
    name = "minmax_transform",
    signature = (dissimilarities, measure = None, propagate = false),
    text_signature = "(dissimilarities, /, measure=None, propagate=False)"
)]
fn py_minmax_transform<'py>(
    py: Python<'py>, dissimilarities: &Bound<'py, PyAny>, measure: Option<&str>, propagate: bool,
) -> PyResult<PyTransformOutput<'py>> {
    run_transform(py, dissimilarities, measure, Transform::MinMax(range_policy(propagate)))
}

/// Geo-topological transform between the `l` and `u` batch quantiles.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(
    name = "geotopological_transform",
    signature = (dissimilarities, l, u, measure = None, propagate = false),
    text_signature = "(dissimilarities, l, u, /, measure=None, propagate=False)"
)]
fn py_geotopological_transform<'py>(
    py: Python<'py>, dissimilarities: &Bound<'py, PyAny>, l: f64, u: f64, measure: Option<&str>,
    propagate: bool,
) -> PyResult<PyTransformOutput<'py>> {
    let band = QuantileBand::new(l, u)?;
    run_transform(
        py,
        dissimilarities,
        measure,
        Transform::GeoTopological(band, range_policy(propagate)),
    )
}

/// Geodesic transform; disconnected patterns come back as `inf`.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(
    name = "geodesic_transform",
    signature = (dissimilarities, measure = None, propagate = false),
    text_signature = "(dissimilarities, /, measure=None, propagate=False)"
)]
fn py_geodesic_transform<'py>(
    py: Python<'py>, dissimilarities: &Bound<'py, PyAny>, measure: Option<&str>, propagate: bool,
) -> PyResult<PyTransformOutput<'py>> {
    run_transform(py, dissimilarities, measure, Transform::Geodesic(range_policy(propagate)))
}

/// _rdm_transforms — PyO3 module initializer for the Python extension.
///
/// Purpose
/// -------
/// Define the `_rdm_transforms` Python module and register its
/// `transforms` submodule used by the public `rdm_transforms` package.
///
/// Errors
/// ------
/// - `PyErr`
///   If creating the submodule or manipulating `sys.modules` fails.
///
/// Notes
/// -----
/// - Invoked by Python when importing the compiled extension; not called
///   directly by user code.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _rdm_transforms<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let transforms_mod = PyModule::new(_py, "transforms")?;
    transforms(_py, m, &transforms_mod)?;

    // Manually add the submodule into sys.modules to allow for dot notation.
    _py.import("sys")?
        .getattr("modules")?
        .set_item("rdm_transforms.transforms", transforms_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn transforms<'py>(
    _py: Python, rdm_transforms: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_rank_transform, m)?)?;
    m.add_function(wrap_pyfunction!(py_sqrt_transform, m)?)?;
    m.add_function(wrap_pyfunction!(py_positive_transform, m)?)?;
    m.add_function(wrap_pyfunction!(py_minmax_transform, m)?)?;
    m.add_function(wrap_pyfunction!(py_geotopological_transform, m)?)?;
    m.add_function(wrap_pyfunction!(py_geodesic_transform, m)?)?;
    rdm_transforms.add_submodule(m)?;
    Ok(())
}
