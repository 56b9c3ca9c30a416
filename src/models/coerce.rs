//! Lenient field deserializers for request bodies.
//!
//! Clients send records as JSON or as url-encoded forms, and older clients
//! are loose about types: numbers where text is expected, `"true"` where a
//! boolean is expected. These helpers accept those shapes and reject
//! anything that cannot be coerced.

use serde::{de, Deserialize, Deserializer};
use serde_json::Value;

/// Text field: strings pass through, numbers and booleans are rendered,
/// `null` means the field is absent.
pub fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(other) => Err(de::Error::custom(format!(
            "expected text, got {}",
            value_kind(&other)
        ))),
    }
}

/// Boolean field: booleans, `0`/`1`, and the usual truthy/falsy strings.
pub fn optional_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(b)),
        Some(Value::Number(n)) => match n.as_i64() {
            Some(1) => Ok(Some(true)),
            Some(0) => Ok(Some(false)),
            _ => Err(de::Error::custom(format!("expected boolean, got number {}", n))),
        },
        Some(Value::String(s)) => match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" => Ok(Some(true)),
            "false" | "0" | "no" => Ok(Some(false)),
            _ => Err(de::Error::custom(format!("expected boolean, got '{}'", s))),
        },
        Some(other) => Err(de::Error::custom(format!(
            "expected boolean, got {}",
            value_kind(&other)
        ))),
    }
}

/// List of text: a single scalar is a one-element list, `null` or a
/// missing field is empty.
pub fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(items)) => items,
        Some(scalar) => vec![scalar],
    };

    items
        .into_iter()
        .map(|item| match item {
            Value::String(s) => Ok(s),
            Value::Number(n) => Ok(n.to_string()),
            other => Err(de::Error::custom(format!(
                "expected text in list, got {}",
                value_kind(&other)
            ))),
        })
        .collect()
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
