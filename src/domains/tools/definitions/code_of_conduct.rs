//! Code-of-conduct tools, keyed by language code (e.g. en_us, zh_cn).

use std::collections::BTreeMap;
use std::sync::Arc;

use rmcp::{handler::server::tool::ToolRoute, model::Tool};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::core::client::{NoPayload, PanelClient, RequestBody};
use crate::domains::tools::common::{EmptyOutput, EmptyParams, panel_route, tool_model};
use crate::domains::tools::error::ToolError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CodeOfConductsResponse {
    code_of_conducts: BTreeMap<String, String>,
}

// ============================================================================
// get_code_of_conducts
// ============================================================================

#[derive(Debug, Clone, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetCodeOfConductsOutput {
    /// The list of code of conducts currently available on the Minecraft
    /// server.
    pub code_of_conducts: BTreeMap<String, String>,
}

pub struct GetCodeOfConductsTool;

impl GetCodeOfConductsTool {
    pub const NAME: &'static str = "get_code_of_conducts";

    pub const DESCRIPTION: &'static str =
        "Get the list of code of conducts currently available on the Minecraft server.";

    pub async fn execute(
        client: Arc<PanelClient>,
        _params: EmptyParams,
    ) -> Result<GetCodeOfConductsOutput, ToolError> {
        let res = client
            .get::<CodeOfConductsResponse>("/api/control/code-of-conduct")
            .await?;
        Ok(GetCodeOfConductsOutput {
            code_of_conducts: res.data.code_of_conducts,
        })
    }

    pub fn to_tool() -> Tool {
        tool_model::<EmptyParams, GetCodeOfConductsOutput>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<PanelClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        panel_route(Self::to_tool(), client, Self::execute)
    }
}

// ============================================================================
// change_code_of_conduct_content
// ============================================================================

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ChangeCodeOfConductParams {
    /// The language of the code of conduct to change the content of.
    /// e.g. en_us, zh_cn.
    pub lang: String,

    /// The new content of the code of conduct.
    pub content: String,
}

pub struct ChangeCodeOfConductTool;

impl ChangeCodeOfConductTool {
    pub const NAME: &'static str = "change_code_of_conduct_content";

    pub const DESCRIPTION: &'static str =
        "Change the content of a code of conduct on the Minecraft server.";

    pub async fn execute(
        client: Arc<PanelClient>,
        params: ChangeCodeOfConductParams,
    ) -> Result<EmptyOutput, ToolError> {
        client
            .post::<NoPayload>(
                &format!("/api/control/code-of-conduct?lang={}", params.lang),
                Some(RequestBody::text(params.content)),
            )
            .await?;
        Ok(EmptyOutput {})
    }

    pub fn to_tool() -> Tool {
        tool_model::<ChangeCodeOfConductParams, EmptyOutput>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<PanelClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        panel_route(Self::to_tool(), client, Self::execute)
    }
}

// ============================================================================
// remove_code_of_conduct
// ============================================================================

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RemoveCodeOfConductParams {
    /// The language of the code of conduct to remove. e.g. en_us, zh_cn.
    pub lang: String,
}

pub struct RemoveCodeOfConductTool;

impl RemoveCodeOfConductTool {
    pub const NAME: &'static str = "remove_code_of_conduct";

    pub const DESCRIPTION: &'static str =
        "Remove a code of conduct from the Minecraft server.";

    pub async fn execute(
        client: Arc<PanelClient>,
        params: RemoveCodeOfConductParams,
    ) -> Result<EmptyOutput, ToolError> {
        client
            .delete::<NoPayload>(
                &format!("/api/control/code-of-conduct?lang={}", params.lang),
                None,
            )
            .await?;
        Ok(EmptyOutput {})
    }

    pub fn to_tool() -> Tool {
        tool_model::<RemoveCodeOfConductParams, EmptyOutput>(Self::NAME, Self::DESCRIPTION)
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
