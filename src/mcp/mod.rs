//! Model Context Protocol server exposing the favicon tools over stdio.

pub mod protocol;
pub mod server;

pub use server::McpServer;

pub const SERVER_NAME: &str = "favicon-generator";

/// Protocol revisions this server can speak, oldest first.
pub const PROTOCOL_VERSIONS: &[&str] = &["2024-11-05", "2025-03-26", "2025-06-18"];

pub const LATEST_PROTOCOL_VERSION: &str = "2025-06-18";
