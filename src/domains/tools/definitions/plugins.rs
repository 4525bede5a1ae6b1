//! Plugin tools.
//!
//! The listing is read-only; installation cannot be automated through the
//! panel, so `install_plugin` answers with manual steps instead of touching
//! the network.

use std::sync::Arc;

use rmcp::{handler::server::tool::ToolRoute, model::Tool};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::core::client::PanelClient;
use crate::core::codec;
use crate::domains::tools::common::{EmptyParams, panel_route, tool_model};
use crate::domains::tools::error::ToolError;
use crate::domains::types::Plugin;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PluginsResponse {
    plugins: Vec<Plugin>,
    folder_path: String,
}

// ============================================================================
// get_server_plugins
// ============================================================================

#[derive(Debug, Clone, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetPluginsOutput {
    /// The list of plugins/mods currently installed on the Minecraft server.
    pub plugins: Vec<Plugin>,

    /// The path to the plugins/mods folder on the server.
    pub folder_path: String,
}

pub struct GetPluginsTool;

impl GetPluginsTool {
    pub const NAME: &'static str = "get_server_plugins";

    pub const DESCRIPTION: &'static str = "Get the list of plugins/mods currently installed on the Minecraft server, as well as the path to the plugins/mods folder.";

    pub async fn execute(
        client: Arc<PanelClient>,
        _params: EmptyParams,
    ) -> Result<GetPluginsOutput, ToolError> {
        let res = client.get::<PluginsResponse>("/api/plugins").await?;

        let mut plugins = res.data.plugins;
        for plugin in &mut plugins {
            plugin.file_name = codec::decode(&plugin.file_name)?;
            if let Some(description) = plugin.description.take() {
                plugin.description = Some(codec::decode(&description)?);
            }
        }

        Ok(GetPluginsOutput {
            plugins,
            folder_path: res.data.folder_path,
        })
    }

    pub fn to_tool() -> Tool {
        tool_model::<EmptyParams, GetPluginsOutput>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<PanelClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        panel_route(Self::to_tool(), client, Self::execute)
    }
}

// ============================================================================
// install_plugin
// ============================================================================

#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct InstallPluginOutput {
    /// Always false: plugin installation cannot be automated through OPanel.
    pub supported: bool,

    /// The manual steps to install a plugin/mod, in order.
    pub instructions: Vec<String>,
}

pub struct InstallPluginTool;

impl InstallPluginTool {
    pub const NAME: &'static str = "install_plugin";

    pub const DESCRIPTION: &'static str = "Install a plugin/mod on the Minecraft server. Plugin installation cannot be automated through OPanel; this tool returns the manual installation steps instead.";

    const INSTRUCTIONS: [&'static str; 4] = [
        "Download the plugin/mod jar file from a trusted source such as SpigotMC, Hangar, or Modrinth, matching the server type and version reported by get_info.",
        "Upload the jar file into the server's plugins/mods folder. Use get_server_plugins to find the folder path.",
        "Restart the Minecraft server so the plugin/mod gets loaded.",
        "Run get_server_plugins again to verify the plugin/mod is listed as loaded and enabled.",
    ];

    pub async fn execute(
        _client: Arc<PanelClient>,
        _params: EmptyParams,
    ) -> Result<InstallPluginOutput, ToolError> {
        Ok(InstallPluginOutput {
            supported: false,
            instructions: Self::INSTRUCTIONS.iter().map(|s| s.to_string()).collect(),
        })
    }

    pub fn to_tool() -> Tool {
        tool_model::<EmptyParams, InstallPluginOutput>(Self::NAME, Self::DESCRIPTION)
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
    async fn test_get_plugins_decodes_base64_fields() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/plugins"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "code": 0, "error": "",
                "folderPath": "/srv/minecraft/plugins",
                "plugins": [
                    {
                        "fileName": codec::encode("worldedit-7.3.0.jar"),
                        "name": "WorldEdit",
                        "version": "7.3.0",
                        "description": codec::encode("In-game world editor"),
                        "authors": ["sk89q"],
                        "size": 6291456,
                        "enabled": true,
                        "loaded": true
                    },
                    {
                        "fileName": codec::encode("unloaded.jar"),
                        "name": "unloaded",
                        "authors": [],
                        "size": 1024,
                        "enabled": false,
                        "loaded": false
                    }
                ]
            })))
            .mount(&server)
            .await;

        let output = GetPluginsTool::execute(test_client(&server.uri()), EmptyParams {})
            .await
            .unwrap();

        assert_eq!(output.folder_path, "/srv/minecraft/plugins");
        assert_eq!(output.plugins[0].file_name, "worldedit-7.3.0.jar");
        assert_eq!(
            output.plugins[0].description.as_deref(),
            Some("In-game world editor")
        );
        assert_eq!(output.plugins[1].description, None);
    }

    #[tokio::test]
    async fn test_install_plugin_is_unsupported_and_offline() {
        let server = MockServer::start().await;

        let output = InstallPluginTool::execute(test_client(&server.uri()), EmptyParams {})
            .await
            .unwrap();

        assert!(!output.supported);
        assert!(!output.instructions.is_empty());
        // No network call was issued.
        assert!(server.received_requests().await.unwrap().is_empty());
    }
}
