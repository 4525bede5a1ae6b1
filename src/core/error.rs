//! Error types and handling for the MCP server.
//!
//! This module defines a unified error type that can represent errors from
//! all modules, providing consistent error handling across the application.
//! Tool-handler failures never reach this type at runtime — they are
//! converted into error-shaped tool results at the route boundary — but the
//! conversion exists for the startup path and tests.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Startup-argument errors; always fatal before serving.
    #[error("Configuration error: {0}")]
    Config(#[from] super::config::ConfigError),

    /// Panel HTTP client errors.
    #[error("Client error: {0}")]
    Client(#[from] super::client::ClientError),

    /// Transport lifecycle errors.
    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),

    /// Error originating from a tool handler.
    #[error("Tool error: {0}")]
    Tool(#[from] crate::domains::tools::ToolError),

    /// I/O errors from network communication.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
