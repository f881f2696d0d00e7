//! Helper functions and utilities
//!
//! This module contains small helpers shared by the request layer and the checks.

use serde_json::Value;
use url::Url;

use crate::utils::errors::Result;

/// Build the absolute URL for an API endpoint (`{base}/api/{endpoint}`).
///
/// The endpoint may carry a query string, e.g. `employees?status=Active`.
pub fn api_url(base_url: &str, endpoint: &str) -> Result<Url> {
    let raw = format!(
        "{}/api/{}",
        base_url.trim_end_matches('/'),
        endpoint.trim_start_matches('/')
    );
    Ok(Url::parse(&raw)?)
}

/// Value for an `Authorization` header carrying the given token
pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

/// Truncate text to a maximum length with ellipsis
pub fn truncate_text(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_length.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Short name of a JSON value's type, for failure details
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}

/// Records of a list response.
///
/// List endpoints answer either with a bare array or with a paginated
/// `{"data": [...]}` object; both are accepted.
pub fn records(value: &Value) -> Option<&Vec<Value>> {
    match value {
        Value::Array(items) => Some(items),
        Value::Object(map) => map.get("data").and_then(Value::as_array),
        _ => None,
    }
}

/// Number of elements a response holds, the way a loose `len()` would count it
pub fn json_len(value: &Value) -> usize {
    match value {
        Value::Array(items) => items.len(),
        Value::Object(map) => map.len(),
        Value::String(s) => s.chars().count(),
        _ => 0,
    }
}
