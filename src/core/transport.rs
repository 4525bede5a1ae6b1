//! STDIO transport for the MCP server.
//!
//! The panel tools are served over standard input/output — the default MCP
//! mode. All logging goes to stderr; stdout belongs to the protocol.

use rmcp::ServiceExt;
use thiserror::Error;
use tracing::info;

use super::server::McpServer;

/// A specialized Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Errors raised by the transport layer.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Failed to initialize transport: {0}")]
    Init(String),

    #[error("Transport service error: {0}")]
    Service(String),
}

/// STDIO transport handler.
pub struct StdioTransport;

impl StdioTransport {
    /// Run the STDIO transport until the host disconnects.
    pub async fn run(server: McpServer) -> TransportResult<()> {
        info!("Ready - communicating via stdin/stdout");

        let service = server
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| TransportError::Init(e.to_string()))?;

        service
            .waiting()
            .await
            .map_err(|e| TransportError::Service(e.to_string()))?;

        info!("STDIO transport finished");
        Ok(())
    }
}
