//! Pixelshift WASM - WebAssembly bindings for Pixelshift
//!
//! This crate exposes the pixelshift-core entry points to a JavaScript host.
//!
//! # Module Structure
//!
//! - `console` - Diagnostic sink writing to the browser console
//! - `convert` - JS value <-> host value conversion
//! - `register` - Installs the export table on `globalThis`
//!
//! # Usage
//!
//! ```typescript
//! import init, { invoke } from '@pixelshift/wasm';
//!
//! // Instantiating the module installs `add` and `changeImageBrightness`
//! // on globalThis
//! await init();
//!
//! const sum = add(1, 2, 3);
//! const brighter = changeImageBrightness(dataUrl, 20); // null on failure
//!
//! // Or through the module export
//! const same = invoke('changeImageBrightness', [dataUrl, 20]);
//! ```

use std::sync::OnceLock;

use js_sys::Array;
use pixelshift_core::{DiagnosticSink, ExportTable};
use wasm_bindgen::prelude::*;

mod console;
mod convert;
mod register;

pub use console::ConsoleSink;

static EXPORTS: OnceLock<ExportTable> = OnceLock::new();

fn export_table() -> &'static ExportTable {
    EXPORTS.get_or_init(ExportTable::new)
}

/// Initialize the WASM module (called automatically on load)
///
/// Installing the globals needs runtime JS compilation. Under a strict
/// Content-Security-Policy that is refused; the error is logged, no globals
/// are installed and only [`invoke`] works.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    ConsoleSink.info("WASM Module Instantiated");
    if let Err(e) = register::install_globals(export_table()) {
        ConsoleSink.report(&format!(
            "Global functions not installed, use invoke() instead: {:?}",
            e
        ));
    }
}

/// Call an exported function by name with an array of positional arguments.
///
/// Returns `null` and logs to the console if the name is unknown or the call
/// fails.
#[wasm_bindgen]
pub fn invoke(name: &str, args: Array) -> JsValue {
    match export_table().get(name) {
        Some(f) => register::call_host_fn(f, &args),
        None => {
            ConsoleSink.report(&format!("Unknown function: {}", name));
            JsValue::NULL
        }
    }
}

/// Names of every exported function.
#[wasm_bindgen(js_name = exportNames)]
pub fn export_names() -> Array {
    export_table().names().map(JsValue::from_str).collect()
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
