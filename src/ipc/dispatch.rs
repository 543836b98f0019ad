//! Request dispatch — routes by service, delegates to handlers.

use serde_json::Value;

use crate::bridge::NotificationBridge;
use crate::ipc::handlers;
use crate::types::{Error, Result};

/// Route a decoded request to the appropriate service handler.
pub async fn route_request(
    bridge: &NotificationBridge,
    service: &str,
    method: &str,
    body: Value,
) -> Result<Value> {
    match service {
        "notifications" => handlers::notifications::handle(bridge, method, body).await,
        _ => Err(Error::not_found(format!("Unknown service: {}", service))),
    }
}

// =============================================================================
// Shared helpers — used by all handler modules
// =============================================================================

pub fn str_field(body: &Value, key: &str) -> Result<String> {
    body.get(key)
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
        .ok_or_else(|| Error::invalid_arguments(format!("Missing required field: {}", key)))
}

pub fn str_list_field(body: &Value, key: &str) -> Result<Vec<String>> {
    let entries = body
        .get(key)
        .and_then(|v| v.as_array())
        .ok_or_else(|| Error::invalid_arguments(format!("Missing required field: {}", key)))?;

    entries
        .iter()
        .map(|entry| {
            entry.as_str().map(|s| s.to_string()).ok_or_else(|| {
                Error::invalid_arguments(format!("Field '{}' must be a list of strings", key))
            })
        })
        .collect()
}

pub fn bool_field(body: &Value, key: &str) -> bool {
    body.get(key).and_then(|v| v.as_bool()).unwrap_or(false)
}
