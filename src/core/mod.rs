//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the MCP server:
//! startup configuration and validation, the authenticated panel HTTP
//! client, the base64 text codec, error handling, and server lifecycle
//! management.

pub mod client;
pub mod codec;
pub mod config;
pub mod error;
pub mod server;
pub mod transport;

pub use client::{ClientError, Envelope, PanelClient, RequestBody};
pub use codec::CodecError;
pub use config::{Config, ConfigError};
pub use error::{Error, Result};
pub use server::McpServer;
pub use transport::StdioTransport;
