//! Python bindings, built with the `python` feature (e.g. `maturin develop --features python`).

use crate::complex::ComplexNumber;
use crate::error::LambdataError;
use crate::split::{DatasetSplitter, SplitConfig, TRAIN_LABEL, VALIDATE_LABEL};
use crate::states::{self, STATES};
use pyo3::exceptions::{PyKeyError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyLong;
use std::collections::HashMap;

// Lookup misses behave like a dict miss; everything else is a bad argument.
impl From<LambdataError> for PyErr {
    fn from(err: LambdataError) -> Self {
        let message = err.to_string();
        match err {
            LambdataError::LookupMiss(_) => PyKeyError::new_err(message),
            _ => PyValueError::new_err(message),
        }
    }
}

/// Python-facing complex number. Operations return a new `Complex`.
#[pyclass(name = "Complex")]
#[derive(Clone)]
struct PyComplex {
    inner: ComplexNumber<f64>,
}

#[pymethods]
impl PyComplex {
    #[new]
    #[pyo3(signature = (realpart, imagpart))]
    fn new(realpart: f64, imagpart: f64) -> Self {
        PyComplex { inner: ComplexNumber::new(realpart, imagpart) }
    }

    #[getter]
    fn real(&self) -> f64 {
        self.inner.real
    }

    #[getter]
    fn imaginary(&self) -> f64 {
        self.inner.imaginary
    }

    #[pyo3(signature = (realpart = 0.0, imagpart = 0.0))]
    fn add(&self, realpart: f64, imagpart: f64) -> Self {
        PyComplex { inner: self.inner.add(realpart, imagpart) }
    }

    #[pyo3(signature = (realpart = 0.0, imagpart = 0.0))]
    fn subtract(&self, realpart: f64, imagpart: f64) -> Self {
        PyComplex { inner: self.inner.subtract(realpart, imagpart) }
    }

    #[pyo3(signature = (realpart = 0.0, imagpart = 0.0))]
    fn multiply(&self, realpart: f64, imagpart: f64) -> Self {
        PyComplex { inner: self.inner.multiply(realpart, imagpart) }
    }

    // Defaults of 0.0 always trip the zero guard
    #[pyo3(signature = (realpart = 0.0, imagpart = 0.0))]
    fn divide(&self, realpart: f64, imagpart: f64) -> PyResult<Self> {
        Ok(PyComplex { inner: self.inner.divide(realpart, imagpart)? })
    }

    fn __repr__(&self) -> String {
        format!("Complex({}, {})", self.inner.real, self.inner.imaginary)
    }

    fn __str__(&self) -> String {
        self.inner.to_string()
    }
}

/// A percentage argument as passed from Python.
///
/// `Omitted` is only produced by the signature default, so an explicit `None`
/// arrives as `Given` and is rejected like any other non-number.
enum NumberArg {
    Omitted,
    Given(PyObject),
}

impl<'py> FromPyObject<'py> for NumberArg {
    fn extract_bound(ob: &Bound<'py, PyAny>) -> PyResult<Self> {
        Ok(NumberArg::Given(ob.clone().unbind()))
    }
}

/// Reads a percentage argument; anything that is not an int or float is rejected.
fn percent_arg(py: Python<'_>, value: &NumberArg, label: &str, default: f64) -> Result<f64, LambdataError> {
    match value {
        NumberArg::Omitted => Ok(default),
        NumberArg::Given(obj) => {
            let obj = obj.bind(py);
            obj.extract::<f64>().map_err(|_| {
                LambdataError::InvalidArgumentType(format!("Non-numeric {label} Percentage passed = {obj}"))
            })
        }
    }
}

fn seed_arg(value: Option<&Bound<'_, PyAny>>) -> Result<Option<u64>, LambdataError> {
    let obj = match value {
        Some(obj) if !obj.is_none() => obj,
        _ => return Ok(None),
    };
    if !obj.is_instance_of::<PyLong>() {
        return Err(LambdataError::InvalidArgumentType(format!("Non-integer seed passed = {obj}")));
    }
    obj.extract::<u64>().map(Some).map_err(|_| match obj.extract::<i64>() {
        Ok(n) if n < 0 => LambdataError::InvalidArgumentType(format!("Negative seed passed = {obj}")),
        _ => LambdataError::InvalidArgumentType(format!("Seed out of range passed = {obj}")),
    })
}

type SplitLists = (
    Vec<PyObject>,
    Vec<PyObject>,
    Vec<PyObject>,
    Vec<PyObject>,
    Vec<PyObject>,
    Vec<PyObject>,
);

/// Splits `X` and `y` into train, test and validation lists.
///
/// Returns `(X_train, X_test, X_val, y_train, y_test, y_val)`.
#[pyfunction]
#[pyo3(
    name = "train_validate_test_split",
    signature = (x, y, train_percent = NumberArg::Omitted, validate_percent = NumberArg::Omitted, seed = None)
)]
fn train_validate_test_split_py(
    py: Python<'_>,
    x: Vec<PyObject>,
    y: Vec<PyObject>,
    train_percent: NumberArg,
    validate_percent: NumberArg,
    seed: Option<&Bound<'_, PyAny>>,
) -> PyResult<SplitLists> {
    let defaults = SplitConfig::default();
    let train_percent = percent_arg(py, &train_percent, TRAIN_LABEL, defaults.train_percent)?;
    let validate_percent = percent_arg(py, &validate_percent, VALIDATE_LABEL, defaults.validate_percent)?;

    // Range and overflow, then the seed, then the zero sum
    let mut config = SplitConfig::new(train_percent, validate_percent);
    config.check_range()?;
    config.seed = seed_arg(seed)?;
    config.check_nonzero()?;

    let split = DatasetSplitter::new(config)?.split(x, y)?;
    Ok(split.into_parts())
}

#[pyfunction]
#[pyo3(name = "get_state_abbrev")]
fn get_state_abbrev_py(state: &str) -> PyResult<&'static str> {
    Ok(states::state_abbrev(state)?)
}

#[pyfunction]
#[pyo3(name = "get_state_name")]
fn get_state_name_py(abbrev: &str) -> PyResult<&'static str> {
    Ok(states::state_name(abbrev)?)
}

/// The whole code -> name table as a dict.
#[pyfunction]
#[pyo3(name = "states")]
fn states_py() -> HashMap<&'static str, &'static str> {
    STATES.iter().copied().collect()
}

/// The `lambdata` Python module. The function name must match `lib.name` in `Cargo.toml`.
#[pymodule]
fn lambdata(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyComplex>()?;
    m.add_function(wrap_pyfunction!(train_validate_test_split_py, m)?)?;
    m.add_function(wrap_pyfunction!(get_state_abbrev_py, m)?)?;
    m.add_function(wrap_pyfunction!(get_state_name_py, m)?)?;
    m.add_function(wrap_pyfunction!(states_py, m)?)?;
    Ok(())
}
