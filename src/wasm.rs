//! WASM bindings for arraytex
//!
//! This module provides JavaScript-accessible functions for rendering
//! numeric arrays as LaTeX markup.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "wasm")]
use crate::{Cell, Grid, Orientation, RenderOptions, Table};

/// Render options (exposed to WASM)
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
pub struct WasmRenderOptions {
    /// Environment name for numeric tables
    #[serde(default = "default_environment")]
    pub environment: String,
    /// Imaginary-unit suffix ("j" or "i")
    #[serde(default = "default_imaginary_unit")]
    pub imaginary_unit: String,
    /// Render 1-D input as a column instead of a row
    #[serde(default)]
    pub column: bool,
    /// Rewrite `e+NN` into `\times10^{+NN}` (on unless disabled)
    #[serde(default = "default_rewrite_exponent")]
    pub rewrite_exponent: bool,
}

#[cfg(feature = "wasm")]
fn default_environment() -> String {
    "bmatrix".to_string()
}

#[cfg(feature = "wasm")]
fn default_imaginary_unit() -> String {
    "j".to_string()
}

#[cfg(feature = "wasm")]
fn default_rewrite_exponent() -> bool {
    true
}

#[cfg(feature = "wasm")]
impl Default for WasmRenderOptions {
    fn default() -> Self {
        WasmRenderOptions {
            environment: default_environment(),
            imaginary_unit: default_imaginary_unit(),
            column: false,
            rewrite_exponent: default_rewrite_exponent(),
        }
    }
}

#[cfg(feature = "wasm")]
impl WasmRenderOptions {
    fn to_render_options(&self) -> RenderOptions {
        RenderOptions {
            environment: self.environment.clone(),
            imaginary_unit: self.imaginary_unit.chars().next().unwrap_or('j'),
            orientation: if self.column {
                Orientation::Column
            } else {
                Orientation::Row
            },
            rewrite_exponent: self.rewrite_exponent,
        }
    }
}

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Render a 2-D array of numbers as LaTeX markup
///
/// # Arguments
/// * `rows` - array of equal-length number arrays
/// * `format` - `{:6.2f}`-style format template
/// * `options` - optional `{ environment, imaginary_unit, column, rewrite_exponent }`
///
/// # Returns
/// The LaTeX markup
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "matrixToLatex")]
pub fn matrix_to_latex_wasm(
    rows: JsValue,
    format: &str,
    options: JsValue,
) -> Result<String, JsValue> {
    let rows: Vec<Vec<f64>> =
        serde_wasm_bindgen::from_value(rows).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let options = parse_options(options)?;
    let grid = Grid::from_reals(&rows).map_err(|e| JsValue::from_str(&e.to_string()))?;
    crate::to_latex(&Table::Numeric(grid), format, &options.to_render_options())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Render a 1-D array of numbers as a single row or column
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "vectorToLatex")]
pub fn vector_to_latex_wasm(
    values: JsValue,
    format: &str,
    options: JsValue,
) -> Result<String, JsValue> {
    let values: Vec<f64> =
        serde_wasm_bindgen::from_value(values).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let options = parse_options(options)?;
    let render_options = options.to_render_options();
    let cells = values.into_iter().map(Cell::from).collect();
    let grid = Grid::from_vector(cells, render_options.orientation);
    crate::to_latex(&Table::Numeric(grid), format, &render_options)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

#[cfg(feature = "wasm")]
fn parse_options(options: JsValue) -> Result<WasmRenderOptions, JsValue> {
    if options.is_undefined() || options.is_null() {
        Ok(WasmRenderOptions::default())
    } else {
        serde_wasm_bindgen::from_value(options).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}
