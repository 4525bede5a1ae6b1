//! Shared plumbing for tool definitions.
//!
//! Each tool exposes an async `execute(client, params) -> Result<Output,
//! ToolError>`; [`panel_route`] adapts that into an rmcp [`ToolRoute`].
//! Input is deserialized before the handler runs, so invalid input is
//! rejected without a single network call. Handler results are shaped into
//! the uniform envelope — structured content plus a text echo of
//! `{"status":"ok", ...fields}` on success, `{"status":"error", "error":
//! ...}` with the error flag on failure — and no handler error ever escapes
//! a tool invocation.

use std::future::Future;
use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Content, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::{Value, json};
use tracing::warn;

use super::error::ToolError;
use crate::core::client::PanelClient;

/// Input shape for tools that take no arguments.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct EmptyParams {}

/// Output shape for tools that only acknowledge completion.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct EmptyOutput {}

/// Create a Tool model carrying both the input and the output schema.
pub(crate) fn tool_model<P, O>(name: &'static str, description: &'static str) -> Tool
where
    P: JsonSchema + 'static,
    O: JsonSchema + 'static,
{
    Tool {
        name: name.into(),
        description: Some(description.into()),
        input_schema: cached_schema_for_type::<P>(),
        output_schema: Some(cached_schema_for_type::<O>()),
        annotations: None,
        icons: None,
        meta: None,
        title: None,
    }
}

/// Create a ToolRoute that parses params, runs the handler against the
/// shared panel client, and shapes the outcome.
pub(crate) fn panel_route<S, P, O, F, Fut>(
    tool: Tool,
    client: Arc<PanelClient>,
    handler: F,
) -> ToolRoute<S>
where
    S: Send + Sync + 'static,
    P: DeserializeOwned + Send + 'static,
    O: Serialize,
    F: Fn(Arc<PanelClient>, P) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<O, ToolError>> + Send + 'static,
{
    ToolRoute::new_dyn(tool, move |ctx: ToolCallContext<'_, S>| {
        let args = ctx.arguments.clone().unwrap_or_default();
        let client = client.clone();

        // Reject invalid input before the handler gets a chance to touch
        // the network.
        let pending = serde_json::from_value::<P>(Value::Object(args))
            .map_err(|e| McpError::invalid_params(e.to_string(), None))
            .map(|params| handler(client, params));

        async move {
            match pending {
                Ok(fut) => Ok(into_result(fut.await)),
                Err(e) => Err(e),
            }
        }
        .boxed()
    })
}

/// Convert a handler outcome into a tool result.
pub(crate) fn into_result<O: Serialize>(outcome: Result<O, ToolError>) -> CallToolResult {
    match outcome {
        Ok(output) => ok_result(&output),
        Err(e) => error_result(&e.to_string()),
    }
}

/// Build a success result: structured content plus a text echo merging
/// `status: "ok"` with the output fields.
pub(crate) fn ok_result<T: Serialize>(output: &T) -> CallToolResult {
    let structured = match serde_json::to_value(output) {
        Ok(value) => value,
        Err(e) => return error_result(&format!("failed to serialize tool output: {e}")),
    };

    let mut echo = serde_json::Map::new();
    echo.insert("status".to_string(), json!("ok"));
    if let Value::Object(fields) = &structured {
        for (key, value) in fields {
            echo.insert(key.clone(), value.clone());
        }
    }

    CallToolResult {
        content: vec![Content::text(Value::Object(echo).to_string())],
        structured_content: Some(structured),
        is_error: Some(false),
        meta: None,
    }
}

/// Build an error result with the `{"status":"error"}` text echo.
pub(crate) fn error_result(message: &str) -> CallToolResult {
    warn!("tool invocation failed: {}", message);

    let echo = json!({ "status": "error", "error": message });

    CallToolResult {
        content: vec![Content::text(echo.to_string())],
        structured_content: None,
        is_error: Some(true),
        meta: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;

    fn text_of(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        }
    }

    #[derive(Serialize)]
    struct SampleOutput {
        motd: String,
    }

    #[test]
    fn test_ok_result_merges_status_and_fields() {
        let result = ok_result(&SampleOutput {
            motd: "Hello".to_string(),
        });

        assert_eq!(result.is_error, Some(false));
        let echo: Value = serde_json::from_str(text_of(&result)).unwrap();
        assert_eq!(echo["status"], "ok");
        assert_eq!(echo["motd"], "Hello");
        assert_eq!(result.structured_content.unwrap()["motd"], "Hello");
    }

    #[test]
    fn test_error_result_shape() {
        let result = error_result("connection refused");

        assert_eq!(result.is_error, Some(true));
        assert!(result.structured_content.is_none());
        let echo: Value = serde_json::from_str(text_of(&result)).unwrap();
        assert_eq!(echo["status"], "error");
        assert_eq!(echo["error"], "connection refused");
    }

    #[test]
    fn test_into_result_converts_handler_errors() {
        let outcome: Result<EmptyOutput, ToolError> =
            Err(ToolError::unexpected("missing field `motd`"));
        let result = into_result(outcome);

        assert_eq!(result.is_error, Some(true));
        assert!(text_of(&result).contains("missing field `motd`"));
    }

    #[test]
    fn test_empty_params_accepts_empty_object() {
        let params: EmptyParams = serde_json::from_value(json!({})).unwrap();
        let _ = params;
    }
}
