//! Scheduled-task tools.
//!
//! Thin forwarding: the panel owns the scheduler, so cron expressions and
//! command lists pass through as opaque strings in both directions.

use std::sync::Arc;

use rmcp::{handler::server::tool::ToolRoute, model::Tool};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::core::client::{NoPayload, PanelClient, RequestBody};
use crate::domains::tools::common::{EmptyOutput, EmptyParams, panel_route, tool_model};
use crate::domains::tools::error::ToolError;
use crate::domains::types::ScheduledTask;

#[derive(Debug, Deserialize)]
struct TasksResponse {
    tasks: Vec<ScheduledTask>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateTaskResponse {
    task_id: String,
}

#[derive(Debug, Serialize)]
struct TaskBody {
    name: String,
    cron: String,
    commands: Vec<String>,
}

// ============================================================================
// get_scheduled_tasks
// ============================================================================

#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct GetScheduledTasksOutput {
    /// The list of scheduled tasks currently registered on OPanel.
    pub tasks: Vec<ScheduledTask>,
}

pub struct GetScheduledTasksTool;

impl GetScheduledTasksTool {
    pub const NAME: &'static str = "get_scheduled_tasks";

    pub const DESCRIPTION: &'static str =
        "Get the list of scheduled tasks currently registered on OPanel.";

    pub async fn execute(
        client: Arc<PanelClient>,
        _params: EmptyParams,
    ) -> Result<GetScheduledTasksOutput, ToolError> {
        let res = client.get::<TasksResponse>("/api/tasks").await?;
        Ok(GetScheduledTasksOutput {
            tasks: res.data.tasks,
        })
    }

    pub fn to_tool() -> Tool {
        tool_model::<EmptyParams, GetScheduledTasksOutput>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<PanelClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        panel_route(Self::to_tool(), client, Self::execute)
    }
}

// ============================================================================
// create_scheduled_task
// ============================================================================

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateScheduledTaskParams {
    /// The name of the scheduled task.
    pub name: String,

    /// The cron expression of the scheduled task.
    pub cron: String,

    /// The list of commands to execute for the scheduled task.
    pub commands: Vec<String>,
}

#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct CreateScheduledTaskOutput {
    /// The id of the newly created scheduled task.
    pub id: String,
}

pub struct CreateScheduledTaskTool;

impl CreateScheduledTaskTool {
    pub const NAME: &'static str = "create_scheduled_task";

    pub const DESCRIPTION: &'static str = "Create a new scheduled task on OPanel.";

    pub async fn execute(
        client: Arc<PanelClient>,
        params: CreateScheduledTaskParams,
    ) -> Result<CreateScheduledTaskOutput, ToolError> {
        let body = RequestBody::json(&TaskBody {
            name: params.name,
            cron: params.cron,
            commands: params.commands,
        })?;

        let res = client
            .post::<CreateTaskResponse>("/api/tasks", Some(body))
            .await?;
        Ok(CreateScheduledTaskOutput {
            id: res.data.task_id,
        })
    }

    pub fn to_tool() -> Tool {
        tool_model::<CreateScheduledTaskParams, CreateScheduledTaskOutput>(
            Self::NAME,
            Self::DESCRIPTION,
        )
    }

    pub fn create_route<S>(client: Arc<PanelClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        panel_route(Self::to_tool(), client, Self::execute)
    }
}

// ============================================================================
// edit_scheduled_task
// ============================================================================

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct EditScheduledTaskParams {
    /// The id of the scheduled task to edit.
    pub id: String,

    /// The name of the scheduled task.
    pub name: String,

    /// The cron expression of the scheduled task.
    pub cron: String,

    /// The list of commands to execute for the scheduled task.
    pub commands: Vec<String>,
}

pub struct EditScheduledTaskTool;

impl EditScheduledTaskTool {
    pub const NAME: &'static str = "edit_scheduled_task";

    pub const DESCRIPTION: &'static str = "Edit an existing scheduled task on OPanel.";

    pub async fn execute(
        client: Arc<PanelClient>,
        params: EditScheduledTaskParams,
    ) -> Result<EmptyOutput, ToolError> {
        let body = RequestBody::json(&TaskBody {
            name: params.name,
            cron: params.cron,
            commands: params.commands,
        })?;

        client
            .post::<NoPayload>(&format!("/api/tasks/{}", params.id), Some(body))
            .await?;
        Ok(EmptyOutput {})
    }

    pub fn to_tool() -> Tool {
        tool_model::<EditScheduledTaskParams, EmptyOutput>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<PanelClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        panel_route(Self::to_tool(), client, Self::execute)
    }
}

// ============================================================================
// toggle_scheduled_task / delete_scheduled_task
// ============================================================================

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ToggleScheduledTaskParams {
    /// The id of the scheduled task to enable or disable.
    pub id: String,

    /// Whether to enable or disable the scheduled task.
    pub enabled: bool,
}

pub struct ToggleScheduledTaskTool;

impl ToggleScheduledTaskTool {
    pub const NAME: &'static str = "toggle_scheduled_task";

    pub const DESCRIPTION: &'static str = "Enable or disable a scheduled task on OPanel.";

    pub async fn execute(
        client: Arc<PanelClient>,
        params: ToggleScheduledTaskParams,
    ) -> Result<EmptyOutput, ToolError> {
        let route = format!(
            "/api/tasks/{}?enabled={}",
            params.id,
            if params.enabled { "1" } else { "0" }
        );
        client.patch::<NoPayload>(&route, None).await?;
        Ok(EmptyOutput {})
    }

    pub fn to_tool() -> Tool {
        tool_model::<ToggleScheduledTaskParams, EmptyOutput>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<PanelClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        panel_route(Self::to_tool(), client, Self::execute)
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DeleteScheduledTaskParams {
    /// The id of the scheduled task to delete.
    pub id: String,
}

pub struct DeleteScheduledTaskTool;

impl DeleteScheduledTaskTool {
    pub const NAME: &'static str = "delete_scheduled_task";

    pub const DESCRIPTION: &'static str = "Delete a scheduled task on OPanel.";

    pub async fn execute(
        client: Arc<PanelClient>,
        params: DeleteScheduledTaskParams,
    ) -> Result<EmptyOutput, ToolError> {
        client
            .delete::<NoPayload>(&format!("/api/tasks/{}", params.id), None)
            .await?;
        Ok(EmptyOutput {})
    }

    pub fn to_tool() -> Tool {
        tool_model::<DeleteScheduledTaskParams, EmptyOutput>(Self::NAME, Self::DESCRIPTION)
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
    use wiremock::matchers::{body_json, method, path, query_param};
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
    async fn test_get_scheduled_tasks() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/tasks"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "code": 0, "error": "",
                "tasks": [{
                    "id": "task-1",
                    "name": "nightly backup",
                    "cron": "0 4 * * *",
                    "commands": ["save-all", "say backup done"],
                    "enabled": true
                }]
            })))
            .mount(&server)
            .await;

        let output = GetScheduledTasksTool::execute(test_client(&server.uri()), EmptyParams {})
            .await
            .unwrap();
        assert_eq!(output.tasks[0].cron, "0 4 * * *");
        assert_eq!(output.tasks[0].commands.len(), 2);
    }

    #[tokio::test]
    async fn test_create_scheduled_task_maps_task_id() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/tasks"))
            .and(body_json(serde_json::json!({
                "name": "restart",
                "cron": "@daily",
                "commands": ["stop"]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "code": 0, "error": "",
                "taskId": "task-9"
            })))
            .expect(1)
            .mount(&server)
            .await;

        // The cron string is pass-through: "@daily" is whatever the panel
        // makes of it, no validation happens here.
        let params = CreateScheduledTaskParams {
            name: "restart".to_string(),
            cron: "@daily".to_string(),
            commands: vec!["stop".to_string()],
        };
        let output = CreateScheduledTaskTool::execute(test_client(&server.uri()), params)
            .await
            .unwrap();
        assert_eq!(output.id, "task-9");
    }

    #[tokio::test]
    async fn test_toggle_scheduled_task_query() {
        let server = MockServer::start().await;

        Mock::given(method("PATCH"))
            .and(path("/api/tasks/task-1"))
            .and(query_param("enabled", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "code": 0, "error": ""
            })))
            .expect(1)
            .mount(&server)
            .await;

        let params = ToggleScheduledTaskParams {
            id: "task-1".to_string(),
            enabled: true,
        };
        ToggleScheduledTaskTool::execute(test_client(&server.uri()), params)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_delete_scheduled_task() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/api/tasks/task-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "code": 0, "error": ""
            })))
            .expect(1)
            .mount(&server)
            .await;

        let params = DeleteScheduledTaskParams {
            id: "task-1".to_string(),
        };
        DeleteScheduledTaskTool::execute(test_client(&server.uri()), params)
            .await
            .unwrap();
    }
}
