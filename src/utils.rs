//! utils — Python-boundary helpers for the PyO3 bindings.
//!
//! Converts array-likes handed over from Python into `(n_rdm × n_pairs)`
//! blocks and wraps them into [`Rdms`], and turns transformed batches back
//! into `(ndarray, measure)` tuples. Everything here is compiled only with
//! the `python-bindings` feature.

#[cfg(feature = "python-bindings")]
use ndarray::{Array2, Axis};

#[cfg(feature = "python-bindings")]
use numpy::{
    IntoPyArray, PyArray2, PyArrayMethods, PyReadonlyArray1, PyReadonlyArray2,
};

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyTypeError, prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::rdm::{RdmBatch, Rdms};

/// Extract a 2-D `float64` block from a NumPy array, a pandas DataFrame,
/// or a nested sequence.
///
/// A 1-D input is read as a single condensed RDM, i.e. a `1 × n_pairs`
/// block.
///
/// Errors
/// ------
/// - `TypeError` if the object is none of the accepted forms or a nested
///   sequence is ragged.
#[cfg(feature = "python-bindings")]
pub fn extract_f64_matrix<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<PyReadonlyArray2<'py, f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray2<f64>>() {
        return Ok(arr_ro);
    }

    if let Ok(vector_ro) = raw_data.extract::<PyReadonlyArray1<f64>>() {
        let block = vector_ro.as_array().to_owned().insert_axis(Axis(0));
        return Ok(block.into_pyarray(py).readonly());
    }

    if let Ok(obj) = raw_data.call_method("to_numpy", (false,), None) {
        if let Ok(frame_ro) = obj.extract::<PyReadonlyArray2<f64>>() {
            return Ok(frame_ro);
        }
    }

    let rows: Vec<Vec<f64>> = raw_data.extract().map_err(|_| {
        PyTypeError::new_err(
            "expected a 2-D numpy.ndarray, pandas.DataFrame, or nested sequence of float64",
        )
    })?;
    let n_rdm = rows.len();
    let n_pairs = rows.first().map_or(0, Vec::len);
    if rows.iter().any(|row| row.len() != n_pairs) {
        return Err(PyTypeError::new_err("all rows must have the same number of dissimilarities"));
    }
    let flat: Vec<f64> = rows.into_iter().flatten().collect();
    let block = Array2::from_shape_vec((n_rdm, n_pairs), flat)
        .map_err(|err| PyTypeError::new_err(err.to_string()))?;
    Ok(block.into_pyarray(py).readonly())
}

/// Build a descriptor-free [`Rdms`] from a Python array-like and label.
///
/// Errors
/// ------
/// - `TypeError` from [`extract_f64_matrix`].
/// - `ValueError` if the condensed length is not a triangular number.
#[cfg(feature = "python-bindings")]
pub fn build_rdms<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>, measure: Option<&str>,
) -> PyResult<Rdms> {
    let block = extract_f64_matrix(py, raw_data)?;
    let rdms = Rdms::from_vectors(block.as_array().to_owned(), measure)?;
    Ok(rdms)
}

/// Hand a transformed batch back to Python as `(ndarray, measure)`.
#[cfg(feature = "python-bindings")]
pub fn into_py_output<'py>(
    py: Python<'py>, rdms: Rdms,
) -> (Bound<'py, PyArray2<f64>>, Option<String>) {
    let measure = rdms.dissimilarity_measure().map(str::to_string);
    (rdms.get_vectors().into_pyarray(py), measure)
}
