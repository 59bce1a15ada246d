//! Shared fixtures for McpScout integration tests.

use serde_json::{json, Value};

/// One list-endpoint entry.
pub fn summary(qualified_name: &str, display_name: &str) -> Value {
    json!({
        "qualifiedName": qualified_name,
        "displayName": display_name,
    })
}

/// A `/servers` response body with the given entries.
pub fn server_list(servers: Vec<Value>) -> Value {
    json!({ "servers": servers })
}

/// A detail-endpoint body; pass `Value::Null` for an unindexed tool list.
pub fn details(qualified_name: &str, display_name: &str, tools: Value) -> Value {
    json!({
        "qualifiedName": qualified_name,
        "displayName": display_name,
        "tools": tools,
    })
}

/// A tool descriptor as the registry serves it.
pub fn tool(name: &str, description: &str) -> Value {
    json!({ "name": name, "description": description })
}

/// Base URL of a port nothing listens on, for transport-failure tests.
pub fn unreachable_base_url() -> String {
    // Port 1 is privileged and effectively never bound in CI.
    "http://127.0.0.1:1".to_string()
}
