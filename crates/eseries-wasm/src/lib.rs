//! WASM bindings for eseries-core
//!
//! This module exposes eseries-core functionality to JavaScript/WASM.

use eseries_core::ESeriesError;
use wasm_bindgen::prelude::*;

mod circuit;
mod rounding;

pub use circuit::WasmCircuit;
pub use rounding::WasmRounded;

pub(crate) fn to_js_err(e: ESeriesError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Get the library version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
