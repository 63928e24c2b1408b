//! Serde helpers that never reject a value.
//!
//! Upstream payloads are model-generated and routinely put numbers where
//! strings belong (and the reverse). These `deserialize_with` helpers accept
//! any JSON value and coerce it, so a single odd field never discards the
//! whole payload.

use crate::normalize::parse_number;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Any scalar as text. Null, arrays and objects become `None`.
pub fn string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_string(&value))
}

/// Any scalar parsed as a number; see [`parse_number`].
pub fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(parse_number(&value))
}

/// Booleans, `"true"`/`"yes"` and non-zero numbers are `true`.
pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => matches!(s.trim().to_ascii_lowercase().as_str(), "true" | "yes"),
        _ => false,
    })
}

/// A nested structure that is dropped (with a debug log) when malformed.
pub fn nested<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    Ok(serde_json::from_value(value)
        .map_err(|e| log::debug!("Ignoring malformed nested value: {}", e))
        .ok())
}

/// Deserialize each element of a JSON array independently, skipping entries
/// that are not objects of the expected shape. Non-arrays yield no items.
pub fn items<T>(value: Option<&Value>) -> Vec<T>
where
    T: DeserializeOwned,
{
    let Some(Value::Array(entries)) = value else {
        return Vec::new();
    };

    entries
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| {
            serde_json::from_value(entry.clone())
                .map_err(|e| log::debug!("Skipping item {}: {}", index, e))
                .ok()
        })
        .collect()
}

/// The first alias under which a non-empty array is stored, falling back to
/// the first alias present at all.
pub fn first_list<'a>(value: &'a Value, aliases: &[&str]) -> Option<&'a Value> {
    let present = || aliases.iter().filter_map(|key| value.get(*key));
    present()
        .find(|v| v.as_array().is_some_and(|a| !a.is_empty()))
        .or_else(|| present().next())
}

fn value_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
