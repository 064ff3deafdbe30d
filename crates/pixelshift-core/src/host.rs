//! Host-facing value model and diagnostic channel.
//!
//! Arguments arrive from the host dynamically typed. They are converted to
//! [`HostValue`] by the bindings, then checked into concrete Rust types here
//! before any pipeline step runs.

use std::cell::RefCell;

use serde::Serialize;

use crate::Error;

/// A dynamically typed value exchanged with the host.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum HostValue {
    /// `null` or `undefined`.
    Null,
    /// A boolean.
    Bool(bool),
    /// Any number (the host has a single numeric type).
    Number(f64),
    /// A string.
    Text(String),
    /// A value the core does not interpret; carries the host's type name.
    #[serde(skip_serializing)]
    Other(String),
}

impl HostValue {
    /// Short type name used in diagnostics.
    pub fn type_name(&self) -> &str {
        match self {
            HostValue::Null => "null",
            HostValue::Bool(_) => "boolean",
            HostValue::Number(_) => "number",
            HostValue::Text(_) => "string",
            HostValue::Other(name) => name,
        }
    }

    /// Interpret the value as text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            HostValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Interpret the value as an integer, truncating toward zero.
    ///
    /// Non-finite numbers and non-numbers yield `None`. Magnitudes beyond
    /// `i64` saturate.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            HostValue::Number(n) if n.is_finite() => Some(n.trunc() as i64),
            _ => None,
        }
    }
}

impl From<i64> for HostValue {
    fn from(value: i64) -> Self {
        HostValue::Number(value as f64)
    }
}

impl From<String> for HostValue {
    fn from(value: String) -> Self {
        HostValue::Text(value)
    }
}

impl From<&str> for HostValue {
    fn from(value: &str) -> Self {
        HostValue::Text(value.to_string())
    }
}

/// Destination for human-readable diagnostics.
pub trait DiagnosticSink {
    /// Report a failure. The entry point returns `null` right after.
    fn report(&self, message: &str);

    /// Informational line (operation summaries). Ignored by default.
    fn info(&self, _message: &str) {}
}

/// Sink that drops every message.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn report(&self, _message: &str) {}
}

/// Sink that keeps messages in memory.
#[derive(Debug, Default)]
pub struct RecordingSink {
    reports: RefCell<Vec<String>>,
    infos: RefCell<Vec<String>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Failure messages, in order.
    pub fn reports(&self) -> Vec<String> {
        self.reports.borrow().clone()
    }

    /// Informational messages, in order.
    pub fn infos(&self) -> Vec<String> {
        self.infos.borrow().clone()
    }
}

impl DiagnosticSink for RecordingSink {
    fn report(&self, message: &str) {
        self.reports.borrow_mut().push(message.to_string());
    }

    fn info(&self, message: &str) {
        self.infos.borrow_mut().push(message.to_string());
    }
}

static MISSING: HostValue = HostValue::Null;

/// Fail with `InvalidArguments` unless at least `min` arguments were passed.
pub fn require_arity(args: &[HostValue], min: usize, usage: &str) -> Result<(), Error> {
    if args.len() < min {
        return Err(Error::InvalidArguments(usage.to_string()));
    }
    Ok(())
}

/// Extract positional argument `index` as text.
pub fn text_arg<'a>(args: &'a [HostValue], index: usize, name: &str) -> Result<&'a str, Error> {
    let value = args.get(index).unwrap_or(&MISSING);
    value.as_text().ok_or_else(|| {
        Error::InvalidArguments(format!(
            "{} must be a string, got {}",
            name,
            value.type_name()
        ))
    })
}

/// Extract positional argument `index` as an integer.
pub fn integer_arg(args: &[HostValue], index: usize, name: &str) -> Result<i64, Error> {
    let value = args.get(index).unwrap_or(&MISSING);
    value.as_integer().ok_or_else(|| {
        Error::InvalidArguments(format!(
            "{} must be a finite number, got {}",
            name,
            value.type_name()
        ))
    })
}
