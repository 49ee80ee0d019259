//! MCP tools for user creation.
//!
//! Both tools funnel through the same load → assign id → append → save
//! path and differ only in how the field values are sourced: explicit
//! arguments for `create-user`, the fake-data generator for
//! `create-random-user`.

use std::sync::Arc;

use rmcp::model::{CallToolResult, Content, ErrorData, Tool};
use serde_json::Value;

use rolodex_core::{NewUser, User, UserStore, fakes, next_id};

use crate::error::McpErrorExt;
use crate::registry::{ToolRegistry, ToolResult};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Convert a `serde_json::Value::Object` to an `Arc<serde_json::Map>`.
fn json_schema(value: Value) -> Arc<serde_json::Map<String, Value>> {
    match value {
        Value::Object(map) => Arc::new(map),
        _ => Arc::new(serde_json::Map::new()),
    }
}

/// Build a `Tool` with a JSON schema.
fn make_tool(name: &str, description: &str, schema: Value) -> Tool {
    Tool::new(name.to_string(), description.to_string(), json_schema(schema))
}

// ---------------------------------------------------------------------------
// UserTools
// ---------------------------------------------------------------------------

/// MCP tools backed by the user store.
///
/// Serves two tools:
/// - `create-user` — create a user from explicit fields
/// - `create-random-user` — create a user from generated fields
pub struct UserTools {
    store: Arc<UserStore>,
}

impl UserTools {
    /// Create tools over their own store handle.
    pub fn new(store: UserStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Create tools over a shared store handle.
    pub fn with_shared(store: Arc<UserStore>) -> Self {
        Self { store }
    }
}

/// Append a new record and report its assigned id.
async fn create(store: Arc<UserStore>, new: NewUser) -> Result<CallToolResult, ErrorData> {
    let mut records = store.load().await.map_err(|e| e.to_mcp_error())?;
    let id = next_id(&records);
    records.push(User::from_new(id, new));
    store.save(&records).await.map_err(|e| e.to_mcp_error())?;
    Ok(CallToolResult::success(vec![Content::text(format!(
        "User {id} created successfully"
    ))]))
}

impl ToolRegistry for UserTools {
    fn tools(&self) -> Vec<Tool> {
        vec![
            make_tool(
                "create-user",
                "Create a new user in the database",
                serde_json::json!({
                    "type": "object",
                    "properties": {
                        "name": {
                            "type": "string",
                            "description": "Full name"
                        },
                        "email": {
                            "type": "string",
                            "description": "Contact email"
                        },
                        "address": {
                            "type": "string",
                            "description": "Postal address"
                        },
                        "phone": {
                            "type": "string",
                            "description": "Phone number"
                        }
                    },
                    "required": ["name", "email", "address", "phone"]
                }),
            ),
            make_tool(
                "create-random-user",
                "Create a random user with fake data",
                serde_json::json!({
                    "type": "object",
                    "properties": {}
                }),
            ),
        ]
    }

    fn call(&self, name: &str, args: Value) -> Option<ToolResult> {
        let store = Arc::clone(&self.store);

        match name {
            "create-user" => Some(Box::pin(async move {
                let new: NewUser = serde_json::from_value(args)
                    .map_err(|e| ErrorData::invalid_params(e.to_string(), None))?;
                create(store, new).await
            })),

            "create-random-user" => Some(Box::pin(async move {
                let new = fakes::fake_new_user().map_err(|e| e.to_mcp_error())?;
                create(store, new).await
            })),

            _ => None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
