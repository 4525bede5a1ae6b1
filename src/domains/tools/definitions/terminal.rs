//! Terminal tools: registered commands and command dispatch.

use std::sync::Arc;

use rmcp::{handler::server::tool::ToolRoute, model::Tool};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::client::{NoPayload, PanelClient, RequestBody};
use crate::domains::tools::common::{EmptyOutput, EmptyParams, panel_route, tool_model};
use crate::domains::tools::error::ToolError;

#[derive(Debug, Deserialize)]
struct CommandsResponse {
    commands: Vec<String>,
}

// ============================================================================
// get_server_commands
// ============================================================================

#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct GetCommandsOutput {
    /// The list of commands currently registered on the Minecraft server.
    pub commands: Vec<String>,
}

pub struct GetCommandsTool;

impl GetCommandsTool {
    pub const NAME: &'static str = "get_server_commands";

    pub const DESCRIPTION: &'static str =
        "Get the list of commands currently registered on the Minecraft server.";

    pub async fn execute(
        client: Arc<PanelClient>,
        _params: EmptyParams,
    ) -> Result<GetCommandsOutput, ToolError> {
        let res = client.get::<CommandsResponse>("/api/terminal").await?;
        Ok(GetCommandsOutput {
            commands: res.data.commands,
        })
    }

    pub fn to_tool() -> Tool {
        tool_model::<EmptyParams, GetCommandsOutput>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<PanelClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        panel_route(Self::to_tool(), client, Self::execute)
    }
}

// ============================================================================
// send_server_command
// ============================================================================

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SendCommandParams {
    /// The command to send to the Minecraft server.
    pub command: String,
}

pub struct SendCommandTool;

impl SendCommandTool {
    pub const NAME: &'static str = "send_server_command";

    pub const DESCRIPTION: &'static str = "Send a command to the Minecraft server. Use the tool get_latest_log_content to check the output of the command.";

    pub async fn execute(
        client: Arc<PanelClient>,
        params: SendCommandParams,
    ) -> Result<EmptyOutput, ToolError> {
        info!(command = %params.command, "Sending server command");
        client
            .post::<NoPayload>("/api/terminal", Some(RequestBody::text(params.command)))
            .await?;
        Ok(EmptyOutput {})
    }

    pub fn to_tool() -> Tool {
        tool_model::<SendCommandParams, EmptyOutput>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<PanelClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        panel_route(Self::to_tool(), client, Self::execute)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::PanelConfig;
    use wiremock::matchers::{body_string, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(base_url: &str) -> Arc<PanelClient> {
        Arc::new(
            PanelClient::new(&PanelConfig {
                base_url: base_url.to_string(),
                token: format!("o-{}", "a".repeat(48)),
            })
            .unwrap(),
        )
    }

    #[tokio::test]
    async fn test_get_server_commands() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/terminal"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "code": 0, "error": "",
                "commands": ["give", "tp", "weather"]
            })))
            .mount(&server)
            .await;

        let output = GetCommandsTool::execute(test_client(&server.uri()), EmptyParams {})
            .await
            .unwrap();
        assert_eq!(output.commands, vec!["give", "tp", "weather"]);
    }

    #[tokio::test]
    async fn test_send_command_posts_raw_text() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/terminal"))
            .and(body_string("say Server restarting in 5 minutes"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "code": 0, "error": ""
            })))
            .expect(1)
            .mount(&server)
            .await;

        let params = SendCommandParams {
            command: "say Server restarting in 5 minutes".to_string(),
        };
        SendCommandTool::execute(test_client(&server.uri()), params)
            .await
            .unwrap();
    }
}
