//! Python bindings for the equivalent-circuit search

use std::str::FromStr;

use ndarray::IxDyn;
use numpy::{AllowTypeChange, PyArray1, PyArray2, PyArrayDyn, PyArrayLikeDyn, ToPyArray};
use pyo3::prelude::*;

use eseries_core::circuit::{
    equivalent_circuit, validate_range, CombinationRule, EquivalentCircuit, SearchOptions,
    TierSelection,
};
use eseries_core::sequence::pns_within;
use eseries_core::Series;

use crate::to_py_err;

/// Result of `num2circuit`
#[pyclass(name = "EquivalentCircuit")]
pub struct PyEquivalentCircuit {
    inner: EquivalentCircuit<IxDyn>,
}

#[pymethods]
impl PyEquivalentCircuit {
    /// Component values, shape (n_targets, nmc), rows ascending
    #[getter]
    pub fn components<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray2<f64>> {
        self.inner.components.to_pyarray(py)
    }

    /// Component indices into `window`, -1 where undefined
    #[getter]
    pub fn indices<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray2<i64>> {
        self.inner
            .indices
            .mapv(|i| i.map_or(-1, |i| i as i64))
            .to_pyarray(py)
    }

    /// Combined value per target
    #[getter]
    pub fn equivalent<'py>(&self, py: Python<'py>) -> Bound<'py, PyArrayDyn<f64>> {
        self.inner.equivalent.to_pyarray(py)
    }

    /// Absolute log error per target
    #[getter]
    pub fn error<'py>(&self, py: Python<'py>) -> Bound<'py, PyArrayDyn<f64>> {
        self.inner.error.to_pyarray(py)
    }

    /// Series values within the requested range
    #[getter]
    pub fn window<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>> {
        self.inner.window.as_slice().to_pyarray(py)
    }

    /// Tier that performed the search ('iterative' or 'batch')
    #[getter]
    pub fn tier(&self) -> &'static str {
        self.inner.tier.name()
    }

    #[getter]
    pub fn nmc(&self) -> usize {
        self.inner.nmc()
    }

    fn __repr__(&self) -> String {
        format!(
            "EquivalentCircuit(targets={}, nmc={}, window={}, tier={})",
            self.inner.components.nrows(),
            self.inner.nmc(),
            self.inner.window.len(),
            self.inner.tier
        )
    }
}

/// Find the nmc series values whose combination best matches each target
///
/// Args:
///     targets: Target values of any shape, array-like, converted to float64
///     series: Series name ('E3' .. 'E192')
///     range: (min, max) bounds on component values
///     nmc: Number of components per combination
///     parallel: True combines reciprocally, False sums directly
///     tier: 'auto', 'iterative' or 'batch'
#[pyfunction]
#[pyo3(signature = (targets, series, range, nmc, parallel=true, tier="auto"))]
pub fn num2circuit(
    targets: PyArrayLikeDyn<'_, f64, AllowTypeChange>,
    series: &str,
    range: (f64, f64),
    nmc: usize,
    parallel: bool,
    tier: &str,
) -> PyResult<PyEquivalentCircuit> {
    let series = Series::from_str(series).map_err(to_py_err)?;
    let tier = TierSelection::from_str(tier).map_err(to_py_err)?;
    let options = SearchOptions {
        rule: CombinationRule::from(parallel),
        tier,
    };
    let inner =
        equivalent_circuit(&targets.as_array(), series, range, nmc, &options).map_err(to_py_err)?;
    Ok(PyEquivalentCircuit { inner })
}

/// Every value of a series within [min, max], ascending
#[pyfunction]
pub fn series_values<'py>(
    py: Python<'py>,
    series: &str,
    min: f64,
    max: f64,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let series = Series::from_str(series).map_err(to_py_err)?;
    validate_range(min, max).map_err(to_py_err)?;
    Ok(pns_within(series, min, max).as_slice().to_pyarray(py))
}
