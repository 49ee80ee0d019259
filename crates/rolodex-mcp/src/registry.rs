//! Tool registration and dispatch.
//!
//! A registry exposes its tool definitions as `rmcp` model values and
//! dispatches calls by name, resolved once at startup — the server holds a
//! fixed set of registries rather than a mutable name table.

use std::future::Future;
use std::pin::Pin;

use rmcp::model::{CallToolResult, ErrorData, Tool};
use serde_json::Value;

/// Future returned by a tool invocation.
pub type ToolResult = Pin<Box<dyn Future<Output = Result<CallToolResult, ErrorData>> + Send>>;

/// A named set of MCP tools with call dispatch.
pub trait ToolRegistry: Send + Sync {
    /// The tool definitions this registry serves.
    fn tools(&self) -> Vec<Tool>;

    /// Dispatch a call by tool name.
    ///
    /// Returns `None` for names this registry does not serve; the caller
    /// maps that to a protocol-level invalid-params error.
    fn call(&self, name: &str, args: Value) -> Option<ToolResult>;

    /// Whether a tool with the given name is registered.
    fn has_tool(&self, name: &str) -> bool {
        self.tools().iter().any(|t| t.name == name)
    }

    /// Number of registered tools.
    fn tool_count(&self) -> usize {
        self.tools().len()
    }
}
