//! Mapping from Rolodex errors to protocol error data.

use rmcp::model::ErrorData;
use rolodex_core::Error;

/// Extension trait converting domain errors into MCP error payloads.
pub trait McpErrorExt {
    /// Convert to an rmcp `ErrorData`.
    fn to_mcp_error(&self) -> ErrorData;
}

impl McpErrorExt for Error {
    fn to_mcp_error(&self) -> ErrorData {
        match self {
            Error::InvalidArgument(_) => ErrorData::invalid_params(self.to_string(), None),
            _ => ErrorData::internal_error(self.to_string(), None),
        }
    }
}
