//! Mapping of HTTP failures onto the client error taxonomy.

use serde_json::Value;

use specdraft_core::Error;
use specdraft_core::error::TransportError;

/// Classify a reqwest failure.
pub(crate) fn transport_error(err: reqwest::Error) -> Error {
    let transport = if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_connect() {
        TransportError::Connection {
            message: err.to_string(),
        }
    } else if err.is_decode() {
        TransportError::Decode {
            message: err.to_string(),
        }
    } else {
        TransportError::Http {
            message: err.to_string(),
        }
    };
    Error::Transport(transport)
}

/// Pull a human-readable detail out of an error payload.
///
/// Understands `{"detail": "..."}` and the list form FastAPI uses for
/// request validation failures (`{"detail": [{"msg": "..."}]}`). Any other
/// `detail` value is rendered as compact JSON.
pub(crate) fn extract_detail(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;

    let detail = match value.get("detail")? {
        Value::Null => return None,
        Value::String(s) => s.clone(),
        Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            if messages.is_empty() {
                Value::Array(items.clone()).to_string()
            } else {
                messages.join("; ")
            }
        }
        other => other.to_string(),
    };

    if detail.is_empty() { None } else { Some(detail) }
}
