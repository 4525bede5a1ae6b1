//! Save management tools.
//!
//! Display names travel base64 over the wire: `get_saves` decodes them,
//! `edit_save` re-encodes before writing.

use std::sync::Arc;

use rmcp::{handler::server::tool::ToolRoute, model::Tool};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::core::client::{NoPayload, PanelClient, RequestBody};
use crate::core::codec;
use crate::domains::tools::common::{EmptyOutput, EmptyParams, panel_route, tool_model};
use crate::domains::tools::error::ToolError;
use crate::domains::types::{Difficulty, GameMode, Save};

#[derive(Debug, Deserialize)]
struct SavesResponse {
    saves: Vec<Save>,
}

// ============================================================================
// get_saves
// ============================================================================

#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct GetSavesOutput {
    /// The list of saves on the Minecraft server.
    pub saves: Vec<Save>,
}

pub struct GetSavesTool;

impl GetSavesTool {
    pub const NAME: &'static str = "get_saves";

    pub const DESCRIPTION: &'static str = "Get the list of saves on the Minecraft server.";

    pub async fn execute(
        client: Arc<PanelClient>,
        _params: EmptyParams,
    ) -> Result<GetSavesOutput, ToolError> {
        let res = client.get::<SavesResponse>("/api/saves").await?;

        let mut saves = res.data.saves;
        for save in &mut saves {
            save.display_name = codec::decode(&save.display_name)?;
        }

        Ok(GetSavesOutput { saves })
    }

    pub fn to_tool() -> Tool {
        tool_model::<EmptyParams, GetSavesOutput>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<PanelClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        panel_route(Self::to_tool(), client, Self::execute)
    }
}

// ============================================================================
// edit_save
// ============================================================================

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EditSaveParams {
    /// The name of the save to edit.
    pub save_name: String,

    /// The new display name of the save.
    pub display_name: String,

    /// The new default game mode of the save.
    pub default_game_mode: GameMode,

    /// The new difficulty of the save.
    pub difficulty: Difficulty,

    /// Whether the difficulty of the save is locked.
    pub is_difficulty_locked: bool,

    /// Whether the save is in hardcore mode.
    pub is_hardcore: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EditSaveBody {
    /// Base64 on the wire.
    display_name: String,
    default_game_mode: GameMode,
    difficulty: Difficulty,
    is_difficulty_locked: bool,
    is_hardcore: bool,
}

pub struct EditSaveTool;

impl EditSaveTool {
    pub const NAME: &'static str = "edit_save";

    pub const DESCRIPTION: &'static str = "Edit a save on the Minecraft server. You can edit the display name, the default game mode, difficulty, whether the difficulty is locked or whether it's in hardcore mode.";

    pub async fn execute(
        client: Arc<PanelClient>,
        params: EditSaveParams,
    ) -> Result<EmptyOutput, ToolError> {
        let body = RequestBody::json(&EditSaveBody {
            display_name: codec::encode(&params.display_name),
            default_game_mode: params.default_game_mode,
            difficulty: params.difficulty,
            is_difficulty_locked: params.is_difficulty_locked,
            is_hardcore: params.is_hardcore,
        })?;

        client
            .post::<NoPayload>(&format!("/api/saves/{}", params.save_name), Some(body))
            .await?;
        Ok(EmptyOutput {})
    }

    pub fn to_tool() -> Tool {
        tool_model::<EditSaveParams, EmptyOutput>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<PanelClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        panel_route(Self::to_tool(), client, Self::execute)
    }
}

// ============================================================================
// toggle_save_datapack
// ============================================================================

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ToggleSaveDatapackParams {
    /// The name of the save to edit.
    pub save_name: String,

    /// The name of the datapack to enable or disable.
    pub datapack: String,

    /// Whether the datapack should be enabled or disabled.
    pub enabled: bool,
}

pub struct ToggleSaveDatapackTool;

impl ToggleSaveDatapackTool {
    pub const NAME: &'static str = "toggle_save_datapack";

    pub const DESCRIPTION: &'static str =
        "Enable or disable a datapack in a save on the Minecraft server.";

    pub async fn execute(
        client: Arc<PanelClient>,
        params: ToggleSaveDatapackParams,
    ) -> Result<EmptyOutput, ToolError> {
        let route = format!(
            "/api/saves/{}?datapack={}&enabled={}",
            params.save_name,
            params.datapack,
            if params.enabled { "1" } else { "0" }
        );
        client.patch::<NoPayload>(&route, None).await?;
        Ok(EmptyOutput {})
    }

    pub fn to_tool() -> Tool {
        tool_model::<ToggleSaveDatapackParams, EmptyOutput>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<PanelClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        panel_route(Self::to_tool(), client, Self::execute)
    }
}

// ============================================================================
// delete_save
// ============================================================================

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteSaveParams {
    /// The name of the save to delete.
    pub save_name: String,
}

pub struct DeleteSaveTool;

impl DeleteSaveTool {
    pub const NAME: &'static str = "delete_save";

    pub const DESCRIPTION: &'static str = "Delete a save on the Minecraft server. This action is irreversible, so be careful when using this tool.";

    pub async fn execute(
        client: Arc<PanelClient>,
        params: DeleteSaveParams,
    ) -> Result<EmptyOutput, ToolError> {
        client
            .delete::<NoPayload>(&format!("/api/saves/{}", params.save_name), None)
            .await?;
        Ok(EmptyOutput {})
    }

    pub fn to_tool() -> Tool {
        tool_model::<DeleteSaveParams, EmptyOutput>(Self::NAME, Self::DESCRIPTION)
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
    use wiremock::matchers::{body_string_contains, method, path, query_param};
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
    async fn test_get_saves_decodes_display_names() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/saves"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "code": 0, "error": "",
                "saves": [{
                    "name": "world",
                    "displayName": codec::encode("My World"),
                    "path": "/srv/minecraft/world",
                    "size": 1024,
                    "isRunning": true,
                    "isCurrent": true,
                    "defaultGameMode": "survival",
                    "difficulty": "normal",
                    "isDifficultyLocked": false,
                    "isHardcore": false,
                    "datapacks": { "vanilla": true }
                }]
            })))
            .mount(&server)
            .await;

        let output = GetSavesTool::execute(test_client(&server.uri()), EmptyParams {})
            .await
            .unwrap();
        assert_eq!(output.saves[0].display_name, "My World");
    }

    #[tokio::test]
    async fn test_edit_save_encodes_display_name() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/saves/world"))
            .and(body_string_contains(codec::encode("Renamed")))
            .and(body_string_contains("\"difficulty\":\"hard\""))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "code": 0, "error": ""
            })))
            .expect(1)
            .mount(&server)
            .await;

        let params = EditSaveParams {
            save_name: "world".to_string(),
            display_name: "Renamed".to_string(),
            default_game_mode: GameMode::Survival,
            difficulty: Difficulty::Hard,
            is_difficulty_locked: true,
            is_hardcore: false,
        };
        EditSaveTool::execute(test_client(&server.uri()), params)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_toggle_save_datapack_query() {
        let server = MockServer::start().await;

        Mock::given(method("PATCH"))
            .and(path("/api/saves/world"))
            .and(query_param("datapack", "coordinates"))
            .and(query_param("enabled", "0"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "code": 0, "error": ""
            })))
            .expect(1)
            .mount(&server)
            .await;

        let params = ToggleSaveDatapackParams {
            save_name: "world".to_string(),
            datapack: "coordinates".to_string(),
            enabled: false,
        };
        ToggleSaveDatapackTool::execute(test_client(&server.uri()), params)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_delete_save() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/api/saves/old_world"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "code": 0, "error": ""
            })))
            .expect(1)
            .mount(&server)
            .await;

        let params = DeleteSaveParams {
            save_name: "old_world".to_string(),
        };
        DeleteSaveTool::execute(test_client(&server.uri()), params)
            .await
            .unwrap();
    }
}
