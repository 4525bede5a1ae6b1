//! Bukkit/Spigot/Paper configuration-file tools.
//!
//! A closed set of exactly four config files, each mapped to a fixed panel
//! key. The read endpoint returns all files at once as a base64 map; the
//! write endpoint targets one file via the `target` query discriminator.

use std::collections::BTreeMap;
use std::sync::Arc;

use rmcp::{handler::server::tool::ToolRoute, model::Tool};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::core::client::{NoPayload, PanelClient, RequestBody};
use crate::core::codec;
use crate::domains::tools::common::{EmptyOutput, panel_route, tool_model};
use crate::domains::tools::error::ToolError;

/// The configuration files the panel can read and write. Only these four
/// exist on the panel side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, JsonSchema)]
pub enum BukkitConfigFile {
    #[serde(rename = "bukkit.yml")]
    Bukkit,

    #[serde(rename = "spigot.yml")]
    Spigot,

    #[serde(rename = "config/paper-global.yml")]
    PaperGlobal,

    #[serde(rename = "leaves.yml")]
    Leaves,
}

impl BukkitConfigFile {
    /// The panel-side key for this file, used both in the read response map
    /// and as the write endpoint's `target` discriminator.
    fn target(self) -> &'static str {
        match self {
            Self::Bukkit => "bukkit",
            Self::Spigot => "spigot",
            Self::PaperGlobal => "paper",
            Self::Leaves => "leaves",
        }
    }
}

// ============================================================================
// get_bukkit_server_config
// ============================================================================

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetBukkitConfigParams {
    /// The name of the configuration file to retrieve.
    pub config_file: BukkitConfigFile,
}

#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct GetBukkitConfigOutput {
    /// The content of the configuration file.
    pub content: String,
}

pub struct GetBukkitServerConfigTool;

impl GetBukkitServerConfigTool {
    pub const NAME: &'static str = "get_bukkit_server_config";

    pub const DESCRIPTION: &'static str = "Get the configuration file content of the Minecraft server. Note that this tool is only available for Bukkit/Spigot/Paper servers.";

    pub async fn execute(
        client: Arc<PanelClient>,
        params: GetBukkitConfigParams,
    ) -> Result<GetBukkitConfigOutput, ToolError> {
        let res = client
            .get::<BTreeMap<String, String>>("/api/control/bukkit-config")
            .await?;

        let target = params.config_file.target();
        let encoded = res
            .data
            .get(target)
            .ok_or_else(|| ToolError::unexpected(format!("missing config entry '{target}'")))?;

        Ok(GetBukkitConfigOutput {
            content: codec::decode(encoded)?,
        })
    }

    pub fn to_tool() -> Tool {
        tool_model::<GetBukkitConfigParams, GetBukkitConfigOutput>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<PanelClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        panel_route(Self::to_tool(), client, Self::execute)
    }
}

// ============================================================================
// set_bukkit_server_config
// ============================================================================

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SetBukkitConfigParams {
    /// The name of the configuration file to set.
    pub config_file: BukkitConfigFile,

    /// The new content of the configuration file.
    pub content: String,
}

pub struct SetBukkitServerConfigTool;

impl SetBukkitServerConfigTool {
    pub const NAME: &'static str = "set_bukkit_server_config";

    pub const DESCRIPTION: &'static str = "Set the configuration file content of the Minecraft server. Note that this tool is only available for Bukkit/Spigot/Paper servers. This will overwrite the existing configuration file, so be careful when using this tool. Reload or restart the server after using this tool to apply the new configuration.";

    pub async fn execute(
        client: Arc<PanelClient>,
        params: SetBukkitConfigParams,
    ) -> Result<EmptyOutput, ToolError> {
        let route = format!(
            "/api/control/bukkit-config?target={}",
            params.config_file.target()
        );
        client
            .post::<NoPayload>(&route, Some(RequestBody::text(codec::encode(&params.content))))
            .await?;
        Ok(EmptyOutput {})
    }

    pub fn to_tool() -> Tool {
        tool_model::<SetBukkitConfigParams, EmptyOutput>(Self::NAME, Self::DESCRIPTION)
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
    use wiremock::matchers::{body_string, method, path, query_param};
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

    #[test]
    fn test_config_file_wire_names() {
        let file: BukkitConfigFile =
            serde_json::from_value(serde_json::json!("config/paper-global.yml")).unwrap();
        assert_eq!(file, BukkitConfigFile::PaperGlobal);
        assert_eq!(file.target(), "paper");

        // Only the four known files deserialize.
        assert!(serde_json::from_value::<BukkitConfigFile>(serde_json::json!("server.yml")).is_err());
    }

    #[tokio::test]
    async fn test_get_config_picks_and_decodes_target() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/control/bukkit-config"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "code": 0, "error": "",
                "bukkit": codec::encode("settings:\n  shutdown-message: bye"),
                "spigot": codec::encode("settings:\n  bungeecord: false"),
                "paper": codec::encode("proxies: {}"),
                "leaves": codec::encode("leaves: {}")
            })))
            .mount(&server)
            .await;

        let params = GetBukkitConfigParams {
            config_file: BukkitConfigFile::Spigot,
        };
        let output = GetBukkitServerConfigTool::execute(test_client(&server.uri()), params)
            .await
            .unwrap();
        assert_eq!(output.content, "settings:\n  bungeecord: false");
    }

    #[tokio::test]
    async fn test_get_config_missing_key_is_tool_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/control/bukkit-config"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "code": 0, "error": "",
                "bukkit": codec::encode("settings: {}")
            })))
            .mount(&server)
            .await;

        let params = GetBukkitConfigParams {
            config_file: BukkitConfigFile::Leaves,
        };
        let outcome = GetBukkitServerConfigTool::execute(test_client(&server.uri()), params).await;
        assert!(matches!(outcome, Err(ToolError::UnexpectedResponse(_))));
    }

    #[tokio::test]
    async fn test_set_config_targets_one_file() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/control/bukkit-config"))
            .and(query_param("target", "spigot"))
            .and(body_string(codec::encode("settings:\n  bungeecord: true")))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "code": 0, "error": ""
            })))
            .expect(1)
            .mount(&server)
            .await;

        let params = SetBukkitConfigParams {
            config_file: BukkitConfigFile::Spigot,
            content: "settings:\n  bungeecord: true".to_string(),
        };
        SetBukkitServerConfigTool::execute(test_client(&server.uri()), params)
            .await
            .unwrap();
    }
}
