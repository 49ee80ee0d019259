//! Rolodex MCP — the protocol surface over the user directory.
//!
//! This crate wires the record store into the MCP protocol via the `rmcp`
//! SDK. The protocol and transport are external; handlers here only
//! translate envelopes.
//!
//! # Key Abstractions
//!
//! - `ToolRegistry` trait: tool definitions plus call dispatch
//! - `UserTools` / `UserResources` / `UserPrompts`: the three surfaces
//! - `RolodexServer`: the `ServerHandler` composing them
//! - [`serve_stdio`]: run the server until the transport closes

#![doc = include_str!("../README.md")]

pub mod error;
pub mod prompts;
pub mod registry;
pub mod resources;
pub mod server;
pub mod tools;

// Re-export key types at crate root for convenience
pub use error::McpErrorExt;
pub use prompts::UserPrompts;
pub use registry::{ToolRegistry, ToolResult};
pub use resources::UserResources;
pub use server::{RolodexServer, serve_stdio};
pub use tools::UserTools;
