//! Installs the export table on the JS global object.
//!
//! Each entry becomes a variadic JS function, so the host calls
//! `add(1, 2, 3)` or `changeImageBrightness(url, 20)` with plain positional
//! arguments.
//!
//! The variadic wrapper is compiled at runtime with the JS `Function`
//! constructor. A Content-Security-Policy without `'unsafe-eval'` forbids
//! that, in which case [`install_globals`] returns the `EvalError` and only
//! the `invoke` export is usable.

use js_sys::{Array, Function, Reflect};
use pixelshift_core::exports::{ExportTable, HostFn};
use pixelshift_core::DiagnosticSink;
use wasm_bindgen::prelude::*;

use crate::console::ConsoleSink;
use crate::convert::{to_host_args, to_js_value};

/// Run an entry point on JS arguments, reporting to the console.
pub(crate) fn call_host_fn(f: HostFn, args: &Array) -> JsValue {
    let args = to_host_args(args);
    let result = f(&args, &ConsoleSink);
    to_js_value(&result).unwrap_or_else(|e| {
        ConsoleSink.report(&format!("Failed to convert result: {:?}", e));
        JsValue::NULL
    })
}

/// Set every export table entry as a function on `globalThis`.
///
/// # Errors
///
/// Returns the JS exception if the wrapper cannot be compiled (strict CSP) or
/// the global object rejects the property.
pub fn install_globals(table: &ExportTable) -> Result<(), JsValue> {
    let global = js_sys::global();
    let wrap = variadic_wrapper()?;
    for (name, f) in table.iter() {
        let function = variadic_function(&wrap, f)?;
        Reflect::set(&global, &JsValue::from_str(name), &function)?;
    }
    Ok(())
}

/// Compile `inner => function (...args) { return inner(args); }`.
///
/// Goes through `Reflect.construct` so a CSP `EvalError` comes back as `Err`
/// instead of unwinding through the module.
fn variadic_wrapper() -> Result<Function, JsValue> {
    let ctor = Reflect::get(&js_sys::global(), &JsValue::from_str("Function"))?
        .dyn_into::<Function>()?;
    let source = Array::of2(
        &JsValue::from_str("inner"),
        &JsValue::from_str("return function (...args) { return inner(args); };"),
    );
    Reflect::construct(&ctor, &source)?.dyn_into::<Function>()
}

/// Wrap an entry point in `function (...args) { ... }`.
fn variadic_function(wrap: &Function, f: HostFn) -> Result<Function, JsValue> {
    // Lives for the lifetime of the module
    let inner = Closure::<dyn Fn(Array) -> JsValue>::new(move |args: Array| call_host_fn(f, &args))
        .into_js_value();
    wrap.call1(&JsValue::NULL, &inner)?.dyn_into::<Function>()
}
