//! MCP Server implementation and lifecycle management.
//!
//! The server holds the validated configuration and the tool router built
//! from every tool definition in `domains/tools/definitions/`. Each route
//! shares one authenticated [`PanelClient`]; tool invocations are otherwise
//! independent and stateless.

use std::sync::Arc;

use rmcp::{
    ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler,
};

use super::client::PanelClient;
use super::config::Config;
use crate::domains::tools::build_tool_router;

/// The main MCP server handler.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    pub fn new(config: Config) -> crate::core::Result<Self> {
        let config = Arc::new(config);
        let client = Arc::new(PanelClient::new(&config.panel)?);

        Ok(Self {
            tool_router: build_tool_router::<Self>(client),
            config,
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Remote management tools for a Minecraft server running the OPanel \
                 control panel. Every tool issues authenticated requests against the \
                 panel's HTTP API; nothing is cached locally."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
