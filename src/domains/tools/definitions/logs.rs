//! Log file tools.
//!
//! Log listings come back in the usual envelope; log contents are served as
//! plain text, so the content tools read the raw body.

use std::sync::Arc;

use rmcp::{handler::server::tool::ToolRoute, model::Tool};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::core::client::{NoPayload, PanelClient};
use crate::domains::tools::common::{EmptyOutput, EmptyParams, panel_route, tool_model};
use crate::domains::tools::error::ToolError;

#[derive(Debug, Deserialize)]
struct LogsResponse {
    logs: Vec<String>,
}

// ============================================================================
// get_log_file_names
// ============================================================================

#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct GetLogsOutput {
    /// The list of file names of the logs currently available on the
    /// Minecraft server.
    pub logs: Vec<String>,
}

pub struct GetLogsTool;

impl GetLogsTool {
    pub const NAME: &'static str = "get_log_file_names";

    pub const DESCRIPTION: &'static str =
        "Get the list of file names of the logs currently available on the Minecraft server.";

    pub async fn execute(
        client: Arc<PanelClient>,
        _params: EmptyParams,
    ) -> Result<GetLogsOutput, ToolError> {
        let res = client.get::<LogsResponse>("/api/logs").await?;
        Ok(GetLogsOutput {
            logs: res.data.logs,
        })
    }

    pub fn to_tool() -> Tool {
        tool_model::<EmptyParams, GetLogsOutput>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<PanelClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        panel_route(Self::to_tool(), client, Self::execute)
    }
}

// ============================================================================
// get_log_content / get_latest_log_content
// ============================================================================

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetLogContentParams {
    /// The name of the log file to get the content of.
    pub file_name: String,
}

#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct LogContentOutput {
    /// The content of the log file.
    pub content: String,
}

pub struct GetLogContentTool;

impl GetLogContentTool {
    pub const NAME: &'static str = "get_log_content";

    pub const DESCRIPTION: &'static str =
        "Get the content of a log file on the Minecraft server.";

    pub async fn execute(
        client: Arc<PanelClient>,
        params: GetLogContentParams,
    ) -> Result<LogContentOutput, ToolError> {
        let content = client
            .get_text(&format!("/api/logs/{}", params.file_name))
            .await?;
        Ok(LogContentOutput { content })
    }

    pub fn to_tool() -> Tool {
        tool_model::<GetLogContentParams, LogContentOutput>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<PanelClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        panel_route(Self::to_tool(), client, Self::execute)
    }
}

pub struct GetLatestLogTool;

impl GetLatestLogTool {
    pub const NAME: &'static str = "get_latest_log_content";

    pub const DESCRIPTION: &'static str =
        "Get the content of the latest log file on the Minecraft server.";

    pub async fn execute(
        client: Arc<PanelClient>,
        _params: EmptyParams,
    ) -> Result<LogContentOutput, ToolError> {
        let content = client.get_text("/api/logs/latest.log").await?;
        Ok(LogContentOutput { content })
    }

    pub fn to_tool() -> Tool {
        tool_model::<EmptyParams, LogContentOutput>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<PanelClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        panel_route(Self::to_tool(), client, Self::execute)
    }
}

// ============================================================================
// delete_log_file / clear_log_files
// ============================================================================

pub struct DeleteLogTool;

impl DeleteLogTool {
    pub const NAME: &'static str = "delete_log_file";

    pub const DESCRIPTION: &'static str = "Delete a log file on the Minecraft server.";

    pub async fn execute(
        client: Arc<PanelClient>,
        params: GetLogContentParams,
    ) -> Result<EmptyOutput, ToolError> {
        client
            .delete::<NoPayload>(&format!("/api/logs/{}", params.file_name), None)
            .await?;
        Ok(EmptyOutput {})
    }

    pub fn to_tool() -> Tool {
        tool_model::<GetLogContentParams, EmptyOutput>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<PanelClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        panel_route(Self::to_tool(), client, Self::execute)
    }
}

pub struct ClearLogsTool;

impl ClearLogsTool {
    pub const NAME: &'static str = "clear_log_files";

    pub const DESCRIPTION: &'static str =
        "Delete all log files except latest.log and debug.log on the Minecraft server.";

    pub async fn execute(
        client: Arc<PanelClient>,
        _params: EmptyParams,
    ) -> Result<EmptyOutput, ToolError> {
        client.delete::<NoPayload>("/api/logs", None).await?;
        Ok(EmptyOutput {})
    }

    pub fn to_tool() -> Tool {
        tool_model::<EmptyParams, EmptyOutput>(Self::NAME, Self::DESCRIPTION)
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
    use wiremock::matchers::{method, path};
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
    async fn test_get_log_file_names() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/logs"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "code": 0, "error": "",
                "logs": ["latest.log", "2026-08-05-1.log.gz"]
            })))
            .mount(&server)
            .await;

        let output = GetLogsTool::execute(test_client(&server.uri()), EmptyParams {})
            .await
            .unwrap();
        assert_eq!(output.logs.len(), 2);
    }

    #[tokio::test]
    async fn test_get_log_content_reads_plain_text() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/logs/2026-08-05-1.log"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string("[12:00:00] [Server thread/INFO]: Done"),
            )
            .mount(&server)
            .await;

        let params = GetLogContentParams {
            file_name: "2026-08-05-1.log".to_string(),
        };
        let output = GetLogContentTool::execute(test_client(&server.uri()), params)
            .await
            .unwrap();
        assert!(output.content.contains("Done"));
    }

    #[tokio::test]
    async fn test_get_latest_log_content_route() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/logs/latest.log"))
            .respond_with(ResponseTemplate::new(200).set_body_string("booting"))
            .expect(1)
            .mount(&server)
            .await;

        let output = GetLatestLogTool::execute(test_client(&server.uri()), EmptyParams {})
            .await
            .unwrap();
        assert_eq!(output.content, "booting");
    }

    #[tokio::test]
    async fn test_clear_log_files_deletes_collection() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/api/logs"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "code": 0, "error": ""
            })))
            .expect(1)
            .mount(&server)
            .await;

        ClearLogsTool::execute(test_client(&server.uri()), EmptyParams {})
            .await
            .unwrap();
    }
}
