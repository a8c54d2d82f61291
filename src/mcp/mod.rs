//! MCP (Model Context Protocol) implementation.

mod handlers;
pub mod server;
mod tools;

pub use server::McpServer;
pub use tools::{Tool, ToolRegistry};

/// Protocol revision advertised in rendered documents.
pub const MCP_VERSION: &str = "2024-11-05";
