//! The MCP server: wires the tool, resource, and prompt surfaces into the
//! protocol dispatcher.
//!
//! The dispatcher, protocol, and stdio transport all come from the `rmcp`
//! SDK; this module only routes its callbacks to the registries built at
//! startup.

use std::sync::Arc;

use rmcp::model::{
    CallToolRequestParam, CallToolResult, ErrorData, GetPromptRequestParam, GetPromptResult,
    Implementation, ListPromptsResult, ListResourceTemplatesResult, ListResourcesResult,
    ListToolsResult, PaginatedRequestParam, ProtocolVersion, ReadResourceRequestParam,
    ReadResourceResult, ServerCapabilities, ServerInfo,
};
use rmcp::service::RequestContext;
use rmcp::transport::stdio;
use rmcp::{RoleServer, ServerHandler, ServiceExt};
use serde_json::Value;
use tracing::{debug, info};

use rolodex_core::{Error, Result, UserStore};

use crate::prompts::UserPrompts;
use crate::registry::ToolRegistry;
use crate::resources::UserResources;
use crate::tools::UserTools;

/// MCP server over a user store.
pub struct RolodexServer {
    tools: UserTools,
    resources: UserResources,
    prompts: UserPrompts,
}

impl RolodexServer {
    /// Build the server's surfaces over a shared handle to the store.
    pub fn new(store: UserStore) -> Self {
        let store = Arc::new(store);
        Self {
            tools: UserTools::with_shared(Arc::clone(&store)),
            resources: UserResources::with_shared(store),
            prompts: UserPrompts,
        }
    }
}

impl ServerHandler for RolodexServer {
    fn get_info(&self) -> ServerInfo {
        let capabilities = ServerCapabilities::builder()
            .enable_tools()
            .enable_resources()
            .enable_prompts()
            .build();
        let mut info = ServerInfo::new(capabilities);
        info.protocol_version = ProtocolVersion::LATEST;
        info.server_info =
            Implementation::new("rolodex", env!("CARGO_PKG_VERSION").to_string());
        info.instructions = Some(
            "User directory over a flat JSON store. Read users://all or a \
             users://{userId}/profile resource, create records with the \
             create-user and create-random-user tools, and use the \
             generate-fake-user prompt for fake-profile generation."
                .to_string(),
        );
        info
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, ErrorData> {
        Ok(ListToolsResult {
            meta: None,
            tools: self.tools.tools(),
            next_cursor: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, ErrorData> {
        debug!(tool = %request.name, "tools/call");
        let args = request
            .arguments
            .map(Value::Object)
            .unwrap_or_else(|| Value::Object(serde_json::Map::new()));
        match self.tools.call(&request.name, args) {
            Some(result) => result.await,
            None => Err(ErrorData::invalid_params(
                format!("unknown tool: {}", request.name),
                None,
            )),
        }
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListResourcesResult, ErrorData> {
        Ok(ListResourcesResult {
            meta: None,
            resources: self.resources.resources(),
            next_cursor: None,
        })
    }

    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListResourceTemplatesResult, ErrorData> {
        Ok(ListResourceTemplatesResult {
            meta: None,
            resource_templates: self.resources.templates(),
            next_cursor: None,
        })
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ReadResourceResult, ErrorData> {
        debug!(uri = %request.uri, "resources/read");
        self.resources.read(&request.uri).await
    }

    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListPromptsResult, ErrorData> {
        Ok(ListPromptsResult {
            meta: None,
            prompts: self.prompts.prompts(),
            next_cursor: None,
        })
    }

    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<GetPromptResult, ErrorData> {
        debug!(prompt = %request.name, "prompts/get");
        self.prompts.get(&request.name, request.arguments.as_ref())
    }
}

/// Serve the given handler over stdio until the transport closes.
///
/// Callers must route logging to stderr; stdout carries the protocol
/// stream.
pub async fn serve_stdio(server: RolodexServer) -> Result<()> {
    info!("rolodex MCP server starting on stdio");
    let service = server
        .serve(stdio())
        .await
        .map_err(|e| Error::server(e.to_string()))?;
    service
        .waiting()
        .await
        .map_err(|e| Error::server(e.to_string()))?;
    info!("transport closed, shutting down");
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
