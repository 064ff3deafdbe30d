//! Conversion between JS values and core host values.
//!
//! Incoming values are classified by JS type without coercion: a numeric
//! string stays a string, so the core can reject it with a type error.
//! Outgoing values go through serde-wasm-bindgen, with `Null` mapped to JS
//! `null` rather than `undefined`.

use js_sys::Array;
use pixelshift_core::HostValue;
use serde::Serialize;
use wasm_bindgen::JsValue;

/// Classify a JS value.
pub fn to_host_value(value: &JsValue) -> HostValue {
    if value.is_null() || value.is_undefined() {
        HostValue::Null
    } else if let Some(b) = value.as_bool() {
        HostValue::Bool(b)
    } else if let Some(n) = value.as_f64() {
        HostValue::Number(n)
    } else if let Some(s) = value.as_string() {
        HostValue::Text(s)
    } else {
        let type_name = value
            .js_typeof()
            .as_string()
            .unwrap_or_else(|| "unknown".to_string());
        HostValue::Other(type_name)
    }
}

/// Convert a JS argument array to positional host values.
pub fn to_host_args(args: &Array) -> Vec<HostValue> {
    args.iter().map(|value| to_host_value(&value)).collect()
}

/// Convert a host value back to JS.
pub fn to_js_value(value: &HostValue) -> Result<JsValue, JsValue> {
    let serializer = serde_wasm_bindgen::Serializer::new().serialize_missing_as_null(true);
    value.serialize(&serializer).map_err(JsValue::from)
}
