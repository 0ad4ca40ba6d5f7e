//! `JsValue` ⇄ JSON conversion.
//!
//! Values cross the boundary as JSON text through the host's own `JSON`
//! object, so numbers, strings and nested arrays keep their JavaScript
//! meaning (`NaN` becomes `null`, object key order is preserved).

use serde_json::Value;
use wasm_bindgen::JsValue;

/// Converts call arguments, dropping trailing `undefined`s.
///
/// `undefined` in the middle of the list becomes `null`.
pub(crate) fn arguments(args: &[JsValue]) -> Vec<Value> {
    let supplied = supplied_len(args.iter().map(JsValue::is_undefined));
    args[..supplied].iter().map(to_json).collect()
}

/// Number of leading positions that remain once trailing absent ones are dropped.
pub(crate) fn supplied_len(absent: impl DoubleEndedIterator<Item = bool> + ExactSizeIterator) -> usize {
    let total = absent.len();
    let trailing = absent.rev().take_while(|&is_absent| is_absent).count();
    total - trailing
}

fn to_json(value: &JsValue) -> Value {
    if value.is_undefined() || value.is_null() {
        return Value::Null;
    }
    js_sys::JSON::stringify(value)
        .ok()
        .and_then(|text| JsValue::from(text).as_string())
        .and_then(|text| serde_json::from_str(&text).ok())
        .unwrap_or(Value::Null)
}

/// Converts a result back into a host value.
pub(crate) fn to_js(value: &Value) -> Result<JsValue, JsValue> {
    js_sys::JSON::parse(&value.to_string())
}
