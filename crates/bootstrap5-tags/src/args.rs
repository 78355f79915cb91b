//! Reading Tera function arguments.
//!
//! Tera hands every function a map of named JSON values. Host objects (forms,
//! fields, formsets, pages) arrive in their serialized form and are read back
//! with serde; everything else is collected into the option structs the
//! renderers take.

use std::collections::HashMap;

use bootstrap5_core::error::{BootstrapError, BootstrapResult};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// The argument map Tera passes to functions.
pub type Args = HashMap<String, Value>;

/// Reads the object argument `name`, which should hold a `kind`.
pub fn object<T: DeserializeOwned>(args: &Args, name: &str, kind: &str) -> BootstrapResult<T> {
    let value = args
        .get(name)
        .ok_or_else(|| BootstrapError::MissingArgument(name.to_string()))?;
    serde_json::from_value(value.clone()).map_err(|err| {
        tracing::debug!(argument = name, error = %err, "argument is not the expected object");
        BootstrapError::invalid_argument(name, kind)
    })
}

/// A string argument. Numbers and booleans are converted, `null` counts as
/// absent.
pub fn string(args: &Args, name: &str) -> Option<String> {
    match args.get(name)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

pub fn required_string(args: &Args, name: &str) -> BootstrapResult<String> {
    string(args, name).ok_or_else(|| BootstrapError::MissingArgument(name.to_string()))
}

/// The truthiness of `name`, or `default` when it was not passed.
pub fn flag(args: &Args, name: &str, default: bool) -> bool {
    args.get(name).map_or(default, truthy)
}

/// Template truthiness of a value.
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Collects every argument not listed in `skip` into an options struct.
pub fn options<T: DeserializeOwned>(args: &Args, skip: &[&str]) -> BootstrapResult<T> {
    let map: Map<String, Value> = args
        .iter()
        .filter(|(key, _)| !skip.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();
    serde_json::from_value(Value::Object(map))
        .map_err(|err| BootstrapError::TemplateError(format!("invalid render options: {err}")))
}
