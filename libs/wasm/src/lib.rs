//! WASM-facing entry points for the shape-ops polygon façade.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. Every export takes its arguments as plain `JsValue`s,
//! the way a JavaScript caller passes them; trailing `undefined`s are not
//! counted, so `offset(shapes, "double")` is a two-argument call.
//!
//! Native tests use [`call_internal`], which takes JSON values directly and
//! exposes Rust error types.
//!
//! ```
//! use serde_json::json;
//! let square = json!([[{"x": 0, "y": 0}, {"x": 1, "y": 0}, {"x": 1, "y": 1}, {"x": 0, "y": 1}]]);
//! let out = shape_ops_wasm::call_internal("orientation", &[square, json!("double")]).unwrap();
//! assert_eq!(out, Some(json!([true])));
//! ```

mod console;
mod convert;

use config::constants::SCALE_FACTOR;
use serde_json::Value;
use shape_ops::{debug, ClipError, Operation, ShapeOps};
use std::sync::OnceLock;
use wasm_bindgen::prelude::*;

/// Installs a panic hook that forwards Rust panics to the browser console,
/// and the console `tracing` subscriber for diagnostics.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "shape-ops-wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    console::install();
}

/// Returns the factor `double` coordinates are scaled by.
///
/// # Examples
/// ```
/// assert_eq!(shape_ops_wasm::default_scale(), 1_000_000.0);
/// ```
#[wasm_bindgen]
pub fn default_scale() -> f64 {
    SCALE_FACTOR
}

/// Sets the diagnostic verbosity and returns the resulting level.
///
/// Diagnostics are written to the browser console. Non-numeric or absent
/// levels leave the verbosity unchanged.
#[wasm_bindgen(js_name = setDebug)]
pub fn set_debug(level: JsValue) -> u32 {
    console::install();
    set_debug_internal(level.as_f64())
}

/// Host-independent part of [`set_debug`].
///
/// The level is coerced like a JavaScript `int32`: truncated and wrapped
/// modulo 2^32. Levels that end up negative, and non-finite ones, leave the
/// verbosity unchanged.
///
/// # Examples
/// ```
/// let level = shape_ops_wasm::set_debug_internal(None);
/// assert_eq!(shape_ops_wasm::set_debug_internal(Some(-3.0)), level);
/// assert_eq!(shape_ops_wasm::set_debug_internal(Some(2_147_483_648.0)), level);
/// ```
pub fn set_debug_internal(level: Option<f64>) -> u32 {
    match level.filter(|level| level.is_finite()) {
        Some(level) => debug::set_level(i64::from(to_int32(level))),
        None => debug::level(),
    }
}

/// `ToInt32` for finite values.
fn to_int32(value: f64) -> i32 {
    const TWO_POW_32: f64 = 4_294_967_296.0;
    let wrapped = value.trunc().rem_euclid(TWO_POW_32);
    if wrapped >= TWO_POW_32 / 2.0 {
        (wrapped - TWO_POW_32) as i32
    } else {
        wrapped as i32
    }
}

/// Winding of every usable path: `orientation(shapes, mode)`.
#[wasm_bindgen]
pub fn orientation(shapes: JsValue, mode: JsValue) -> Result<JsValue, JsValue> {
    invoke(Operation::Orientation, &[shapes, mode])
}

/// Closed polygon offset: `offset(shapes, mode, delta, joinType?, miterLimit?)`.
#[wasm_bindgen]
pub fn offset(
    shapes: JsValue,
    mode: JsValue,
    delta: JsValue,
    join_type: JsValue,
    miter_limit: JsValue,
) -> Result<JsValue, JsValue> {
    invoke(Operation::Offset, &[shapes, mode, delta, join_type, miter_limit])
}

/// Open line offset: `lineOffset(shapes, mode, delta, joinType?, miterLimit?)`.
#[wasm_bindgen(js_name = lineOffset)]
pub fn line_offset(
    shapes: JsValue,
    mode: JsValue,
    delta: JsValue,
    join_type: JsValue,
    miter_limit: JsValue,
) -> Result<JsValue, JsValue> {
    invoke(Operation::LineOffset, &[shapes, mode, delta, join_type, miter_limit])
}

/// Union of many shape collections: `unionArrays(collections, mode?)`.
#[wasm_bindgen(js_name = unionArrays)]
pub fn union_arrays(collections: JsValue, mode: JsValue) -> Result<JsValue, JsValue> {
    invoke(Operation::Union, &[collections, mode])
}

/// Two-operand boolean: `clip(subject, clip, mode?, clipType?)`.
#[wasm_bindgen]
pub fn clip(subject: JsValue, clip: JsValue, mode: JsValue, clip_type: JsValue) -> Result<JsValue, JsValue> {
    invoke(Operation::Clip, &[subject, clip, mode, clip_type])
}

/// Vertex cleaning: `clean(shapes, mode, distance?)`.
#[wasm_bindgen]
pub fn clean(shapes: JsValue, mode: JsValue, distance: JsValue) -> Result<JsValue, JsValue> {
    invoke(Operation::Clean, &[shapes, mode, distance])
}

/// Outer CCW, holes CW: `fixOrientation(shapes, mode)`.
#[wasm_bindgen(js_name = fixOrientation)]
pub fn fix_orientation(shapes: JsValue, mode: JsValue) -> Result<JsValue, JsValue> {
    invoke(Operation::FixOrientation, &[shapes, mode])
}

/// Self-intersection removal: `simplify(shapes, mode)`.
#[wasm_bindgen]
pub fn simplify(shapes: JsValue, mode: JsValue) -> Result<JsValue, JsValue> {
    invoke(Operation::Simplify, &[shapes, mode])
}

fn invoke(operation: Operation, args: &[JsValue]) -> Result<JsValue, JsValue> {
    let args = convert::arguments(args);
    match run(operation, &args) {
        Ok(Some(value)) => convert::to_js(&value),
        Ok(None) => Ok(JsValue::UNDEFINED),
        Err(err) => {
            let message = err.to_string();
            web_sys::console::error_1(&JsValue::from_str(&message));
            Err(js_sys::TypeError::new(&message).into())
        }
    }
}

fn ops() -> &'static ShapeOps {
    static OPS: OnceLock<ShapeOps> = OnceLock::new();
    OPS.get_or_init(ShapeOps::default)
}

fn run(operation: Operation, args: &[Value]) -> Result<Option<Value>, ClipError> {
    ops().call(operation, args)
}

/// Runs an operation by its JavaScript name on JSON arguments.
///
/// # Errors
/// Returns a message for unknown operation names and every [`ClipError`].
///
/// # Examples
/// ```
/// use serde_json::json;
/// let err = shape_ops_wasm::call_internal("offset", &[json!([]), json!("double")]).unwrap_err();
/// assert!(err.contains("offset"));
/// ```
pub fn call_internal(name: &str, args: &[Value]) -> Result<Option<Value>, String> {
    let operation = name.parse::<Operation>().map_err(|err| err.to_string())?;
    run(operation, args).map_err(|err| err.to_string())
}
