//! WASM bindings for preferred-number rounding

use std::str::FromStr;

use eseries_core::notation::{self, Quantity};
use eseries_core::rounding::{round_to_series, BinPolicy, RoundOptions, Rounded};
use eseries_core::Series;
use js_sys::{Float64Array, Int32Array};
use ndarray::{ArrayView1, Ix1};
use wasm_bindgen::prelude::*;

use crate::to_js_err;

/// Result of `roundToSeries`
#[wasm_bindgen]
pub struct WasmRounded {
    inner: Rounded<Ix1>,
}

#[wasm_bindgen]
impl WasmRounded {
    /// Rounded values, NaN where the input was undefined
    #[wasm_bindgen(getter)]
    pub fn values(&self) -> Float64Array {
        Float64Array::from(self.inner.values.to_vec().as_slice())
    }

    /// Position of each value in `pns`, -1 where undefined
    #[wasm_bindgen(getter)]
    pub fn index(&self) -> Int32Array {
        let index: Vec<i32> = self
            .inner
            .index
            .iter()
            .map(|i| i.map_or(-1, |i| i as i32))
            .collect();
        Int32Array::from(index.as_slice())
    }

    /// Series values spanning the rounded results
    #[wasm_bindgen(getter)]
    pub fn pns(&self) -> Float64Array {
        Float64Array::from(self.inner.pns.as_slice())
    }

    /// Bin edges between consecutive `pns` entries
    #[wasm_bindgen(getter)]
    pub fn edges(&self) -> Float64Array {
        Float64Array::from(self.inner.edges.as_slice())
    }
}

/// Round to the nearest value of an IEC 60063 series
///
/// @param x - Input values
/// @param series - Series name ('E3' .. 'E192')
/// @param policy - 'harmonic' (default), 'arithmetic', 'up' or 'down'
#[wasm_bindgen(js_name = roundToSeries)]
pub fn round_to_series_js(
    x: &[f64],
    series: &str,
    policy: Option<String>,
) -> Result<WasmRounded, JsValue> {
    let series = Series::from_str(series).map_err(to_js_err)?;
    let policy = match policy.as_deref() {
        Some(p) => BinPolicy::from_str(p).map_err(to_js_err)?,
        None => BinPolicy::default(),
    };
    let inner = round_to_series(
        &ArrayView1::from(x),
        series,
        &RoundOptions::with_policy(policy),
    );
    Ok(WasmRounded { inner })
}

/// RKM code of a resistance, e.g. 4700 -> '4K7'
#[wasm_bindgen(js_name = formatRkm)]
pub fn format_rkm(value: f64) -> Option<String> {
    notation::format_rkm(value, Quantity::Resistance)
}

/// Value of an RKM code, e.g. '4K7' -> 4700
#[wasm_bindgen(js_name = parseRkm)]
pub fn parse_rkm(code: &str) -> Result<f64, JsValue> {
    notation::parse_rkm(code).map_err(to_js_err)
}
