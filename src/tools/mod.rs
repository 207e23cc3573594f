//! The fourteen MCP tools.
//!
//! Each submodule owns one domain's handlers: argument extraction from the
//! JSON arguments object, a call into the compute layer, and a `render_*`
//! function that turns the result struct into the text the model client
//! sees. Compute stays in the domain modules so tests can assert on values
//! without scraping strings.

pub mod capacitor;
pub mod gpio;
pub mod resistor;

use serde_json::Value;

use crate::mcp::{CallError, ToolRegistry};

/// Build the full registry the server exposes.
pub fn registry() -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    resistor::register(&mut registry);
    capacitor::register(&mut registry);
    gpio::register(&mut registry);
    registry
}

fn missing(name: &str) -> CallError {
    CallError::InvalidParams(format!("missing required argument '{name}'"))
}

fn wrong_type(name: &str, expected: &str) -> CallError {
    CallError::InvalidParams(format!("argument '{name}' must be {expected}"))
}

pub(crate) fn require_f64(args: &Value, name: &str) -> Result<f64, CallError> {
    let value = args.get(name).ok_or_else(|| missing(name))?;
    value.as_f64().ok_or_else(|| wrong_type(name, "a number"))
}

pub(crate) fn optional_f64(args: &Value, name: &str) -> Result<Option<f64>, CallError> {
    match args.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value
            .as_f64()
            .map(Some)
            .ok_or_else(|| wrong_type(name, "a number")),
    }
}

pub(crate) fn f64_or(args: &Value, name: &str, default: f64) -> Result<f64, CallError> {
    Ok(optional_f64(args, name)?.unwrap_or(default))
}

pub(crate) fn require_i64(args: &Value, name: &str) -> Result<i64, CallError> {
    let value = args.get(name).ok_or_else(|| missing(name))?;
    value.as_i64().ok_or_else(|| wrong_type(name, "an integer"))
}

pub(crate) fn require_str<'a>(args: &'a Value, name: &str) -> Result<&'a str, CallError> {
    let value = args.get(name).ok_or_else(|| missing(name))?;
    value.as_str().ok_or_else(|| wrong_type(name, "a string"))
}

pub(crate) fn str_or<'a>(args: &'a Value, name: &str, default: &'a str) -> Result<&'a str, CallError> {
    match args.get(name) {
        None | Some(Value::Null) => Ok(default),
        Some(value) => value.as_str().ok_or_else(|| wrong_type(name, "a string")),
    }
}

pub(crate) fn bool_or(args: &Value, name: &str, default: bool) -> Result<bool, CallError> {
    match args.get(name) {
        None | Some(Value::Null) => Ok(default),
        Some(value) => value.as_bool().ok_or_else(|| wrong_type(name, "a boolean")),
    }
}

pub(crate) fn require_str_array(args: &Value, name: &str) -> Result<Vec<String>, CallError> {
    let value = args.get(name).ok_or_else(|| missing(name))?;
    let items = value
        .as_array()
        .ok_or_else(|| wrong_type(name, "an array of strings"))?;
    items
        .iter()
        .map(|item| {
            item.as_str()
                .map(str::to_string)
                .ok_or_else(|| wrong_type(name, "an array of strings"))
        })
        .collect()
}

pub(crate) fn require_i64_array(args: &Value, name: &str) -> Result<Vec<i64>, CallError> {
    let value = args.get(name).ok_or_else(|| missing(name))?;
    let items = value
        .as_array()
        .ok_or_else(|| wrong_type(name, "an array of integers"))?;
    items
        .iter()
        .map(|item| {
            item.as_i64()
                .ok_or_else(|| wrong_type(name, "an array of integers"))
        })
        .collect()
}
