//! Host-callable entry points and the export table.
//!
//! Entry points take positional [`HostValue`] arguments and a
//! [`DiagnosticSink`]. They never fail across the host boundary: every error
//! is reported once on the sink and `HostValue::Null` is returned.

use std::collections::BTreeMap;

use crate::brightness::Brightness;
use crate::host::{integer_arg, require_arity, text_arg, DiagnosticSink, HostValue};
use crate::{change_brightness, Error};

/// Signature shared by every exported function.
pub type HostFn = fn(&[HostValue], &dyn DiagnosticSink) -> HostValue;

/// Name under which [`add`] is exported.
pub const ADD: &str = "add";
/// Name under which [`change_image_brightness`] is exported.
pub const CHANGE_IMAGE_BRIGHTNESS: &str = "changeImageBrightness";

/// Immutable mapping from exported name to function.
#[derive(Debug, Clone)]
pub struct ExportTable {
    entries: BTreeMap<&'static str, HostFn>,
}

impl ExportTable {
    /// Build the table with every entry point registered.
    pub fn new() -> Self {
        let mut entries: BTreeMap<&'static str, HostFn> = BTreeMap::new();
        entries.insert(ADD, add);
        entries.insert(CHANGE_IMAGE_BRIGHTNESS, change_image_brightness);
        Self { entries }
    }

    /// Look up an entry point by name.
    pub fn get(&self, name: &str) -> Option<HostFn> {
        self.entries.get(name).copied()
    }

    /// Exported names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    /// Iterate over `(name, function)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, HostFn)> + '_ {
        self.entries.iter().map(|(name, f)| (*name, *f))
    }
}

impl Default for ExportTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Sum integers with 64-bit wrapping arithmetic. An empty slice sums to 0.
pub fn sum(values: &[i64]) -> i64 {
    values.iter().fold(0i64, |acc, v| acc.wrapping_add(*v))
}

/// `add(...numbers)`: sum every argument.
///
/// Each argument is truncated toward zero. A non-numeric argument is reported
/// and yields `null`.
pub fn add(args: &[HostValue], sink: &dyn DiagnosticSink) -> HostValue {
    let values = match (0..args.len())
        .map(|i| integer_arg(args, i, &format!("add argument {}", i)))
        .collect::<Result<Vec<_>, _>>()
    {
        Ok(values) => values,
        Err(e) => return fail(sink, e),
    };

    let total = sum(&values);
    sink.info(&format!("Sum is: {}", total));
    HostValue::from(total)
}

/// `changeImageBrightness(dataUrl, brightness)`: return a brightened data URL.
pub fn change_image_brightness(args: &[HostValue], sink: &dyn DiagnosticSink) -> HostValue {
    match run_change_image_brightness(args) {
        Ok((url, brightness)) => {
            sink.info(&format!("Image brightness changed by: {}", brightness.get()));
            HostValue::Text(url)
        }
        Err(e) => fail(sink, e),
    }
}

fn run_change_image_brightness(args: &[HostValue]) -> Result<(String, Brightness), Error> {
    require_arity(
        args,
        2,
        "changeImageBrightness requires 2 arguments: image (Data URL) and brightness (number).",
    )?;

    let data_url = text_arg(args, 0, "image")?;
    let brightness = Brightness::new(integer_arg(args, 1, "brightness")?)?;

    let url = change_brightness(data_url, brightness)?;
    Ok((url, brightness))
}

fn fail(sink: &dyn DiagnosticSink, error: Error) -> HostValue {
    sink.report(&error.to_string());
    HostValue::Null
}


// ============================================================================
// Property-Based Tests
// ============================================================================
