//! Python bindings for eseries-core
//!
//! This module exposes eseries-core functionality to Python via PyO3.
//!
//! ## Functions
//!
//! - `round63` - Round values to an IEC 60063 series
//! - `num2circuit` - Equivalent-circuit search over series values
//! - `series_values` - Series values within a range
//! - `format_rkm` / `parse_rkm` - RKM component codes

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use eseries_core::ESeriesError;

mod circuit;
mod rounding;

pub use circuit::PyEquivalentCircuit;
pub use rounding::PyRounded;

pub(crate) fn to_py_err(e: ESeriesError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

/// eseries_python - preferred-number rounding and equivalent circuits
///
/// Example:
///     >>> import eseries_python as es
///     >>> r = es.round63([500, 1234], "E12")
///     >>> r.values
///     array([ 470., 1200.])
///     >>> c = es.num2circuit([123.0], "E12", (10.0, 1000.0), 3)
///     >>> c.components
#[pymodule]
fn eseries_python(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyRounded>()?;
    m.add_class::<PyEquivalentCircuit>()?;

    m.add_function(wrap_pyfunction!(rounding::round63, m)?)?;
    m.add_function(wrap_pyfunction!(rounding::format_rkm, m)?)?;
    m.add_function(wrap_pyfunction!(rounding::parse_rkm, m)?)?;
    m.add_function(wrap_pyfunction!(circuit::num2circuit, m)?)?;
    m.add_function(wrap_pyfunction!(circuit::series_values, m)?)?;

    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}
