//! Gamerule tools.
//!
//! Values are opaque to this server: reads pass through whatever shape the
//! panel reports, writes send the value string as-is.

use std::collections::BTreeMap;
use std::sync::Arc;

use rmcp::{handler::server::tool::ToolRoute, model::Tool};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::core::client::{NoPayload, PanelClient};
use crate::domains::tools::common::{EmptyOutput, EmptyParams, panel_route, tool_model};
use crate::domains::tools::error::ToolError;
use crate::domains::types::GameruleValue;

#[derive(Debug, Deserialize)]
struct GamerulesResponse {
    gamerules: BTreeMap<String, GameruleValue>,
}

// ============================================================================
// get_gamerules
// ============================================================================

#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct GetGamerulesOutput {
    /// The current gamerules of the Minecraft server. The keys are the
    /// names of the gamerules, and the values are the values of the
    /// gamerules.
    pub gamerules: BTreeMap<String, GameruleValue>,
}

pub struct GetGamerulesTool;

impl GetGamerulesTool {
    pub const NAME: &'static str = "get_gamerules";

    pub const DESCRIPTION: &'static str = "Get the current gamerules of the Minecraft server.";

    pub async fn execute(
        client: Arc<PanelClient>,
        _params: EmptyParams,
    ) -> Result<GetGamerulesOutput, ToolError> {
        let res = client.get::<GamerulesResponse>("/api/gamerules").await?;
        Ok(GetGamerulesOutput {
            gamerules: res.data.gamerules,
        })
    }

    pub fn to_tool() -> Tool {
        tool_model::<EmptyParams, GetGamerulesOutput>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<PanelClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        panel_route(Self::to_tool(), client, Self::execute)
    }
}

// ============================================================================
// set_gamerule
// ============================================================================

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SetGameruleParams {
    /// The key of the gamerule to set.
    pub key: String,

    /// The value to set for the gamerule.
    pub value: String,
}

pub struct SetGameruleTool;

impl SetGameruleTool {
    pub const NAME: &'static str = "set_gamerule";

    pub const DESCRIPTION: &'static str = "Set a gamerule of the Minecraft server.";

    pub async fn execute(
        client: Arc<PanelClient>,
        params: SetGameruleParams,
    ) -> Result<EmptyOutput, ToolError> {
        let route = format!("/api/gamerules?key={}&value={}", params.key, params.value);
        client.patch::<NoPayload>(&route, None).await?;
        Ok(EmptyOutput {})
    }

    pub fn to_tool() -> Tool {
        tool_model::<SetGameruleParams, EmptyOutput>(Self::NAME, Self::DESCRIPTION)
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
    use wiremock::matchers::{method, path, query_param};
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
    async fn test_get_gamerules_mixed_value_shapes() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/gamerules"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "code": 0, "error": "",
                "gamerules": {
                    "doDaylightCycle": true,
                    "randomTickSpeed": 3,
                    "announceAdvancements": "true"
                }
            })))
            .mount(&server)
            .await;

        let output = GetGamerulesTool::execute(test_client(&server.uri()), EmptyParams {})
            .await
            .unwrap();

        assert_eq!(
            output.gamerules.get("doDaylightCycle"),
            Some(&GameruleValue::Bool(true))
        );
        assert_eq!(
            output.gamerules.get("randomTickSpeed"),
            Some(&GameruleValue::Int(3))
        );
        assert_eq!(
            output.gamerules.get("announceAdvancements"),
            Some(&GameruleValue::Text("true".to_string()))
        );
    }

    #[tokio::test]
    async fn test_set_gamerule_query() {
        let server = MockServer::start().await;

        Mock::given(method("PATCH"))
            .and(path("/api/gamerules"))
            .and(query_param("key", "keepInventory"))
            .and(query_param("value", "true"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "code": 0, "error": ""
            })))
            .expect(1)
            .mount(&server)
            .await;

        let params = SetGameruleParams {
            key: "keepInventory".to_string(),
            value: "true".to_string(),
        };
        SetGameruleTool::execute(test_client(&server.uri()), params)
            .await
            .unwrap();
    }
}
