//! Python bindings for preferred-number rounding

use std::str::FromStr;

use ndarray::IxDyn;
use numpy::{AllowTypeChange, PyArray1, PyArrayDyn, PyArrayLikeDyn, ToPyArray};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use eseries_core::notation::{self, Quantity};
use eseries_core::rounding::{round_to_series, BinPolicy, RoundOptions, Rounded};
use eseries_core::Series;

use crate::to_py_err;

/// Result of `round63`
#[pyclass(name = "Rounded")]
pub struct PyRounded {
    inner: Rounded<IxDyn>,
}

#[pymethods]
impl PyRounded {
    /// Rounded values, NaN where the input was undefined
    #[getter]
    pub fn values<'py>(&self, py: Python<'py>) -> Bound<'py, PyArrayDyn<f64>> {
        self.inner.values.to_pyarray(py)
    }

    /// Position of each value in `pns`, -1 where undefined
    #[getter]
    pub fn index<'py>(&self, py: Python<'py>) -> Bound<'py, PyArrayDyn<i64>> {
        self.inner
            .index
            .mapv(|i| i.map_or(-1, |i| i as i64))
            .to_pyarray(py)
    }

    /// Series values spanning the rounded results
    #[getter]
    pub fn pns<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>> {
        self.inner.pns.as_slice().to_pyarray(py)
    }

    /// Bin edges between consecutive `pns` entries
    #[getter]
    pub fn edges<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>> {
        self.inner.edges.as_slice().to_pyarray(py)
    }

    fn __len__(&self) -> usize {
        self.inner.values.len()
    }

    fn __repr__(&self) -> String {
        format!(
            "Rounded(n={}, defined={}, pns={})",
            self.inner.values.len(),
            self.inner.n_defined(),
            self.inner.pns.len()
        )
    }
}

/// Round to the nearest value of an IEC 60063 series
///
/// Args:
///     x: Values of any shape: a numpy array, list or other array-like,
///         converted to float64
///     series: Series name ('E3' .. 'E192')
///     policy: Bin policy ('harmonic', 'arithmetic', 'up', 'down'), may be
///         abbreviated to any unambiguous prefix
#[pyfunction]
#[pyo3(signature = (x, series="E12", policy="harmonic"))]
pub fn round63(
    x: PyArrayLikeDyn<'_, f64, AllowTypeChange>,
    series: &str,
    policy: &str,
) -> PyResult<PyRounded> {
    let series = Series::from_str(series).map_err(to_py_err)?;
    let policy = BinPolicy::from_str(policy).map_err(to_py_err)?;
    let inner = round_to_series(&x.as_array(), series, &RoundOptions::with_policy(policy));
    Ok(PyRounded { inner })
}

fn parse_quantity(quantity: &str) -> PyResult<Quantity> {
    match quantity.to_lowercase().as_str() {
        "r" | "resistance" => Ok(Quantity::Resistance),
        "c" | "capacitance" => Ok(Quantity::Capacitance),
        "l" | "inductance" => Ok(Quantity::Inductance),
        _ => Err(PyValueError::new_err(format!(
            "Invalid quantity: {}. Use 'resistance', 'capacitance' or 'inductance'",
            quantity
        ))),
    }
}

/// RKM code of a component value, e.g. 4700.0 -> '4K7'
///
/// Returns None for values that are not finite and positive.
#[pyfunction]
#[pyo3(signature = (value, quantity="resistance"))]
pub fn format_rkm(value: f64, quantity: &str) -> PyResult<Option<String>> {
    Ok(notation::format_rkm(value, parse_quantity(quantity)?))
}

/// Value of an RKM code, e.g. '4K7' -> 4700.0
#[pyfunction]
pub fn parse_rkm(code: &str) -> PyResult<f64> {
    notation::parse_rkm(code).map_err(to_py_err)
}
