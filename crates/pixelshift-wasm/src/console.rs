//! Browser console diagnostic sink.

use pixelshift_core::DiagnosticSink;
use wasm_bindgen::JsValue;
use web_sys::console;

/// Sends failures to `console.error` and informational lines to `console.log`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl DiagnosticSink for ConsoleSink {
    fn report(&self, message: &str) {
        console::error_1(&JsValue::from_str(message));
    }

    fn info(&self, message: &str) {
        console::log_1(&JsValue::from_str(message));
    }
}
