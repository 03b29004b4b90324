//! WASM bindings for the equivalent-circuit search

use std::str::FromStr;

use eseries_core::circuit::{
    equivalent_circuit, validate_range, CombinationRule, EquivalentCircuit, SearchOptions,
    TierSelection,
};
use eseries_core::sequence::pns_within;
use eseries_core::Series;
use js_sys::{Float64Array, Int32Array};
use ndarray::{ArrayView1, Ix1};
use wasm_bindgen::prelude::*;

use crate::to_js_err;

/// Result of `num2circuit`
#[wasm_bindgen]
pub struct WasmCircuit {
    inner: EquivalentCircuit<Ix1>,
}

#[wasm_bindgen]
impl WasmCircuit {
    /// Component values as flattened Float64Array, `nmc` per target
    #[wasm_bindgen(getter)]
    pub fn components(&self) -> Float64Array {
        let flat: Vec<f64> = self.inner.components.iter().copied().collect();
        Float64Array::from(flat.as_slice())
    }

    /// Component indices into `window`, flattened, -1 where undefined
    #[wasm_bindgen(getter)]
    pub fn indices(&self) -> Int32Array {
        let flat: Vec<i32> = self
            .inner
            .indices
            .iter()
            .map(|i| i.map_or(-1, |i| i as i32))
            .collect();
        Int32Array::from(flat.as_slice())
    }

    /// Combined value per target
    #[wasm_bindgen(getter)]
    pub fn equivalent(&self) -> Float64Array {
        Float64Array::from(self.inner.equivalent.to_vec().as_slice())
    }

    /// Absolute log error per target
    #[wasm_bindgen(getter)]
    pub fn error(&self) -> Float64Array {
        Float64Array::from(self.inner.error.to_vec().as_slice())
    }

    /// Series values within the requested range
    #[wasm_bindgen(getter)]
    pub fn window(&self) -> Float64Array {
        Float64Array::from(self.inner.window.as_slice())
    }

    /// Number of components per combination
    #[wasm_bindgen(getter)]
    pub fn nmc(&self) -> usize {
        self.inner.nmc()
    }

    /// Tier that performed the search
    #[wasm_bindgen(getter)]
    pub fn tier(&self) -> String {
        self.inner.tier.name().to_string()
    }
}

/// Find the `nmc` series values whose combination best matches each target
///
/// @param targets - Target values
/// @param series - Series name ('E3' .. 'E192')
/// @param min - Smallest allowed component value
/// @param max - Largest allowed component value
/// @param nmc - Number of components per combination
/// @param parallel - true combines reciprocally (default), false sums
/// @param tier - 'auto' (default), 'iterative' or 'batch'
#[wasm_bindgen]
pub fn num2circuit(
    targets: &[f64],
    series: &str,
    min: f64,
    max: f64,
    nmc: usize,
    parallel: Option<bool>,
    tier: Option<String>,
) -> Result<WasmCircuit, JsValue> {
    let series = Series::from_str(series).map_err(to_js_err)?;
    let tier = match tier.as_deref() {
        Some(t) => TierSelection::from_str(t).map_err(to_js_err)?,
        None => TierSelection::Auto,
    };
    let options = SearchOptions {
        rule: CombinationRule::from(parallel.unwrap_or(true)),
        tier,
    };
    let inner = equivalent_circuit(&ArrayView1::from(targets), series, (min, max), nmc, &options)
        .map_err(to_js_err)?;
    Ok(WasmCircuit { inner })
}

/// Every value of a series within [min, max], ascending
#[wasm_bindgen(js_name = seriesValues)]
pub fn series_values(series: &str, min: f64, max: f64) -> Result<Float64Array, JsValue> {
    let series = Series::from_str(series).map_err(to_js_err)?;
    validate_range(min, max).map_err(to_js_err)?;
    Ok(Float64Array::from(pns_within(series, min, max).as_slice()))
}
