//! # Kali Arsenal MCP
//!
//! A Model Context Protocol (MCP) server exposing a curated catalog of Kali
//! Linux cybersecurity tooling: arsenal overview, per-category details,
//! templated scan transcripts, bleeding edge repository status and canned
//! assessment reports.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`models`]: Core data structures (Category, ScanType, ReportKind)
//! - [`catalog`]: The read-only arsenal catalog and its totals
//! - [`render`]: Pure functions composing the canned text documents
//! - [`mcp`]: MCP protocol implementation and server
//! - [`health`]: The `/health` HTTP endpoint
//! - [`config`]: Configuration management

pub mod catalog;
pub mod config;
pub mod health;
pub mod mcp;
pub mod models;
pub mod render;

// Re-export commonly used types
pub use catalog::Catalog;
pub use models::Category;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Server name reported over MCP and in rendered documents
pub const SERVER_NAME: &str = "kali-arsenal-mcp";
