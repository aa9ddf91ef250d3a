//! Seed Field Coercion
//!
//! Turns loosely typed seed values into the shapes `RecipeDetails` expects.
//! Optional numbers follow a parse-or-absent rule: anything that is not a
//! finite number in range comes back as `None`, and the caller keeps going.

use crate::error::CatalogError;
use serde_json::{Map, Value};

/// Textual form of a seed value.
///
/// Strings are taken as-is, numbers and booleans are printed, `null` becomes
/// `"null"` and containers become an empty string.
pub fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(_) | Value::Object(_) => String::new(),
    }
}

/// Reads a field that every seed record must carry.
pub fn required_text(
    record: &Map<String, Value>,
    index: usize,
    field: &'static str,
) -> Result<String, CatalogError> {
    record
        .get(field)
        .map(text_of)
        .ok_or(CatalogError::MissingField { index, field })
}

/// Copies a nested value verbatim. A missing key reads as `null`.
pub fn raw_value(record: &Map<String, Value>, field: &str) -> Value {
    record.get(field).cloned().unwrap_or(Value::Null)
}

/// Applies `parse` to a present, non-null field. A value that fails to parse
/// is logged and dropped.
pub fn optional<T>(
    record: &Map<String, Value>,
    field: &str,
    parse: impl Fn(&Value) -> Option<T>,
) -> Option<T> {
    let value = match record.get(field) {
        None | Some(Value::Null) => return None,
        Some(value) => value,
    };

    let parsed = parse(value);
    if parsed.is_none() {
        tracing::debug!("Ignoring unreadable '{}' value: {}", field, value);
    }
    parsed
}

fn finite_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    number.is_finite().then_some(number)
}

/// Single-precision reading of a number or numeric string.
pub fn parse_f32(value: &Value) -> Option<f32> {
    let narrowed = finite_number(value)? as f32;
    narrowed.is_finite().then_some(narrowed)
}

/// Integer reading of a number or numeric string. Fractions are truncated
/// toward zero; values outside the `i32` range are rejected.
pub fn parse_i32(value: &Value) -> Option<i32> {
    if let Value::Number(n) = value
        && let Some(whole) = n.as_i64()
    {
        return i32::try_from(whole).ok();
    }
    if let Value::String(s) = value
        && let Ok(whole) = s.trim().parse::<i32>()
    {
        return Some(whole);
    }

    let truncated = finite_number(value)?.trunc();
    (truncated >= i32::MIN as f64 && truncated <= i32::MAX as f64).then_some(truncated as i32)
}
