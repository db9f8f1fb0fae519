//! Option records and field access
//!
//! Options are arbitrary JSON records. The control only ever looks at two of
//! their fields, both chosen by name through [`SelectConfig`](crate::SelectConfig).

use std::borrow::Cow;
use std::path::Path;

use serde_json::Value;

use crate::error::{read_file, LoadError};

/// Display label of an option
///
/// Strings are returned as-is, numbers and booleans in their JSON form.
/// Missing fields and any other value type have no label.
pub fn option_text<'a>(option: &'a Value, field: &str) -> Option<Cow<'a, str>> {
    match option.get(field)? {
        Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        Value::Number(n) => Some(Cow::Owned(n.to_string())),
        Value::Bool(b) => Some(Cow::Owned(b.to_string())),
        _ => None,
    }
}

/// Identifier of an option, if the field exists
pub fn option_id<'a>(option: &'a Value, field: &str) -> Option<&'a Value> {
    option.get(field)
}

/// Loose identifier equality
///
/// Equal JSON values match, numbers compare by value (`1 == 1.0`), and a number
/// matches a string spelling the same number (`2 == "2"`).
pub fn ids_match(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x.as_f64() == y.as_f64(),
        (Value::Number(n), Value::String(s)) | (Value::String(s), Value::Number(n)) => {
            let s = s.trim();
            !s.is_empty() && s.parse::<f64>().ok() == n.as_f64()
        }
        _ => a == b,
    }
}

/// Whether two records carry matching identifiers under `field`
///
/// A record missing the field never matches.
pub fn same_option(a: &Value, b: &Value, field: &str) -> bool {
    match (option_id(a, field), option_id(b, field)) {
        (Some(x), Some(y)) => ids_match(x, y),
        _ => false,
    }
}

/// Find the option a previously chosen record refers to
///
/// When several options share the identifier, the last one wins.
pub fn resolve_saved<'a>(options: &'a [Value], value: &Value, field: &str) -> Option<&'a Value> {
    options
        .iter()
        .rev()
        .find(|option| same_option(option, value, field))
}

/// Parse a JSON array of option records
pub fn parse_options(json: &str) -> Result<Vec<Value>, LoadError> {
    match serde_json::from_str(json)? {
        Value::Array(items) => Ok(items),
        Value::Object(_) => Err(LoadError::NotAnArray("an object")),
        Value::String(_) => Err(LoadError::NotAnArray("a string")),
        Value::Number(_) => Err(LoadError::NotAnArray("a number")),
        Value::Bool(_) => Err(LoadError::NotAnArray("a boolean")),
        Value::Null => Err(LoadError::NotAnArray("null")),
    }
}

/// Read a JSON file holding an array of option records
pub fn load_options(path: impl AsRef<Path>) -> Result<Vec<Value>, LoadError> {
    parse_options(&read_file(path.as_ref())?)
}
