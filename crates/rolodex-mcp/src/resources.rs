//! MCP resources over the user store.
//!
//! Two read surfaces: the full list at `users://all` and single profiles
//! through the `users://{userId}/profile` template. A profile read for an
//! id that is not in the store is a successful read carrying an
//! error-shaped payload, per the lookup's best-effort contract; only a
//! malformed id or an unrecognized URI is a protocol error.

use std::sync::Arc;

use rmcp::model::{
    AnnotateAble, ErrorData, RawResource, RawResourceTemplate, ReadResourceResult, Resource,
    ResourceContents, ResourceTemplate,
};

use rolodex_core::{Error, UserStore, find_by_id};

use crate::error::McpErrorExt;

/// URI of the full-list resource.
pub const USERS_ALL_URI: &str = "users://all";

/// URI template for a single user's profile.
pub const USER_PROFILE_TEMPLATE: &str = "users://{userId}/profile";

/// Payload returned when a profile id is not in the store.
const NOT_FOUND_PAYLOAD: &str = r#"{"error":"User not found"}"#;

/// Read-only resource surface over the user store.
pub struct UserResources {
    store: Arc<UserStore>,
}

impl UserResources {
    /// Create resources over their own store handle.
    pub fn new(store: UserStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Create resources over a shared store handle.
    pub fn with_shared(store: Arc<UserStore>) -> Self {
        Self { store }
    }

    /// Concrete resources served.
    pub fn resources(&self) -> Vec<Resource> {
        let mut users = RawResource::new(USERS_ALL_URI, "users");
        users.description = Some("Get all users data from the database".to_string());
        users.mime_type = Some("application/json".to_string());
        vec![users.no_annotation()]
    }

    /// Resource templates served.
    pub fn templates(&self) -> Vec<ResourceTemplate> {
        vec![
            RawResourceTemplate {
                uri_template: USER_PROFILE_TEMPLATE.to_string(),
                name: "user-details".to_string(),
                title: None,
                description: Some("Get a user's details from the database".to_string()),
                mime_type: Some("application/json".to_string()),
                icons: None,
            }
            .no_annotation(),
        ]
    }

    /// Read a resource by URI.
    pub async fn read(&self, uri: &str) -> Result<ReadResourceResult, ErrorData> {
        if uri == USERS_ALL_URI {
            return self.read_all().await;
        }
        if let Some(id) = parse_profile_uri(uri)? {
            return self.read_profile(uri, id).await;
        }
        Err(ErrorData::resource_not_found(
            format!("unknown resource: {uri}"),
            None,
        ))
    }

    async fn read_all(&self) -> Result<ReadResourceResult, ErrorData> {
        let records = self.store.load().await.map_err(|e| e.to_mcp_error())?;
        let text = serde_json::to_string(&records)
            .map_err(|e| ErrorData::internal_error(e.to_string(), None))?;
        Ok(ReadResourceResult::new(vec![json_contents(
            USERS_ALL_URI,
            text,
        )]))
    }

    async fn read_profile(&self, uri: &str, id: u64) -> Result<ReadResourceResult, ErrorData> {
        let records = self.store.load().await.map_err(|e| e.to_mcp_error())?;
        let text = match find_by_id(&records, id) {
            Some(user) => serde_json::to_string(user)
                .map_err(|e| ErrorData::internal_error(e.to_string(), None))?,
            None => NOT_FOUND_PAYLOAD.to_string(),
        };
        Ok(ReadResourceResult::new(vec![json_contents(uri, text)]))
    }
}

/// Parse `users://{userId}/profile`, if the URI has that shape.
///
/// Returns `Ok(None)` for URIs of some other shape. A profile-shaped URI
/// whose id segment is not an integer is an invalid argument, not an
/// unknown resource.
fn parse_profile_uri(uri: &str) -> Result<Option<u64>, ErrorData> {
    let Some(rest) = uri.strip_prefix("users://") else {
        return Ok(None);
    };
    let Some(raw_id) = rest.strip_suffix("/profile") else {
        return Ok(None);
    };
    if raw_id.is_empty() || raw_id.contains('/') {
        return Ok(None);
    }
    match raw_id.parse::<u64>() {
        Ok(id) => Ok(Some(id)),
        Err(_) => Err(Error::invalid_argument(format!(
            "userId must be an integer, got {raw_id:?}"
        ))
        .to_mcp_error()),
    }
}

/// JSON text contents for a resource read.
fn json_contents(uri: &str, text: String) -> ResourceContents {
    ResourceContents::TextResourceContents {
        uri: uri.to_string(),
        mime_type: Some("application/json".to_string()),
        text,
        meta: None,
    }
}

// ============================================================================
// Tests
// ============================================================================
