//! Server info tools: basic info, MOTD, and server.properties.
//!
//! `get_info` merges three independent read endpoints (version, info,
//! monitor) into one record; the MOTD and the properties file travel base64
//! over the wire.

use std::sync::Arc;

use rmcp::{handler::server::tool::ToolRoute, model::Tool};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::client::{NoPayload, PanelClient, RequestBody};
use crate::core::codec;
use crate::domains::tools::common::{EmptyOutput, EmptyParams, panel_route, tool_model};
use crate::domains::tools::error::ToolError;

// ============================================================================
// Wire shapes
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VersionResponse {
    server_type: String,
    version: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InfoResponse {
    /// Base64 on the wire.
    motd: String,
    port: u16,
    max_player_count: u32,
    whitelist: bool,
    uptime: u64,
    ingame_time: IngameTimeResponse,
    system: SystemResponse,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IngameTimeResponse {
    current: i64,
    do_daylight_cycle: bool,
    paused: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SystemResponse {
    os: String,
    arch: String,
    cpu_name: String,
    cpu_core: u32,
    memory: u64,
    gpus: Vec<String>,
    java: String,
}

#[derive(Debug, Deserialize)]
struct MonitorResponse {
    cpu: f64,
    memory: f64,
    tps: f64,
}

#[derive(Debug, Deserialize)]
struct ServerPropertiesResponse {
    /// Base64 on the wire.
    properties: String,
}

// ============================================================================
// get_info
// ============================================================================

/// Merged server overview returned by `get_info`.
#[derive(Debug, Clone, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetInfoOutput {
    /// The type of the Minecraft server, e.g. Spigot, Paper, etc.
    pub server_type: String,

    /// The version of the Minecraft server.
    pub version: String,

    /// The Message of the Day (MOTD) of the Minecraft server.
    pub motd: String,

    /// The port number the Minecraft server is running on.
    pub port: u16,

    /// The maximum number of players allowed on the Minecraft server.
    pub max_player_count: u32,

    /// Whether the Minecraft server has whitelist enabled.
    pub whitelist: bool,

    /// The uptime of the Minecraft server in milliseconds.
    pub uptime: u64,

    /// The current ticks per second (TPS) of the Minecraft server. A TPS of
    /// 20 means the server is running perfectly; lower values indicate lag.
    pub tps: f64,

    pub ingame_time: IngameTime,

    pub system: SystemInfo,
}

#[derive(Debug, Clone, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct IngameTime {
    /// The current in-game time of the Minecraft server.
    pub current: i64,

    /// Whether the daylight cycle is enabled on the Minecraft server.
    pub do_daylight_cycle: bool,

    /// Whether the Minecraft server is currently paused. (While paused, the
    /// in-game time does not advance.)
    pub paused: bool,
}

#[derive(Debug, Clone, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SystemInfo {
    /// The operating system the Minecraft server is running on.
    pub os: String,

    /// The CPU architecture of the system.
    pub arch: String,

    /// The name of the CPU.
    pub cpu_name: String,

    /// The number of CPU cores.
    pub cpu_core: u32,

    /// The current CPU usage percentage of the Minecraft server.
    pub cpu_usage: f64,

    /// The total memory of the system in bytes.
    pub memory: u64,

    /// The current memory usage percentage of the Minecraft server.
    pub memory_usage: f64,

    /// The list of GPU names of the system.
    pub gpus: Vec<String>,

    /// The Java version the Minecraft server is running with.
    pub java: String,
}

pub struct GetInfoTool;

impl GetInfoTool {
    pub const NAME: &'static str = "get_info";

    pub const DESCRIPTION: &'static str = "Get basic info of the Minecraft server that OPanel is running on, such as motd, port, in-game time or server system information.";

    pub async fn execute(
        client: Arc<PanelClient>,
        _params: EmptyParams,
    ) -> Result<GetInfoOutput, ToolError> {
        let version = client.get::<VersionResponse>("/api/version").await?;
        let info = client.get::<InfoResponse>("/api/info").await?;
        let monitor = client.get::<MonitorResponse>("/api/monitor").await?;

        let info = info.data;
        let monitor = monitor.data;

        Ok(GetInfoOutput {
            server_type: version.data.server_type,
            version: version.data.version,
            motd: codec::decode(&info.motd)?,
            port: info.port,
            max_player_count: info.max_player_count,
            whitelist: info.whitelist,
            uptime: info.uptime,
            tps: monitor.tps,
            ingame_time: IngameTime {
                current: info.ingame_time.current,
                do_daylight_cycle: info.ingame_time.do_daylight_cycle,
                paused: info.ingame_time.paused,
            },
            system: SystemInfo {
                os: info.system.os,
                arch: info.system.arch,
                cpu_name: info.system.cpu_name,
                cpu_core: info.system.cpu_core,
                cpu_usage: monitor.cpu,
                memory: info.system.memory,
                memory_usage: monitor.memory,
                gpus: info.system.gpus,
                java: info.system.java,
            },
        })
    }

    pub fn to_tool() -> Tool {
        tool_model::<EmptyParams, GetInfoOutput>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<PanelClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        panel_route(Self::to_tool(), client, Self::execute)
    }
}

// ============================================================================
// set_motd
// ============================================================================

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SetMotdParams {
    /// The new MOTD to set for the Minecraft server.
    pub motd: String,
}

pub struct SetMotdTool;

impl SetMotdTool {
    pub const NAME: &'static str = "set_motd";

    pub const DESCRIPTION: &'static str =
        "Set the Message of the Day (MOTD) of the Minecraft server.";

    pub async fn execute(
        client: Arc<PanelClient>,
        params: SetMotdParams,
    ) -> Result<EmptyOutput, ToolError> {
        info!("Setting MOTD");
        client
            .post::<NoPayload>("/api/info/motd", Some(RequestBody::text(codec::encode(&params.motd))))
            .await?;
        Ok(EmptyOutput {})
    }

    pub fn to_tool() -> Tool {
        tool_model::<SetMotdParams, EmptyOutput>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<PanelClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        panel_route(Self::to_tool(), client, Self::execute)
    }
}

// ============================================================================
// get_server_properties / set_server_properties
// ============================================================================

#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct GetServerPropertiesOutput {
    /// The content of the server.properties file, in plain text.
    pub properties: String,
}

pub struct GetServerPropertiesTool;

impl GetServerPropertiesTool {
    pub const NAME: &'static str = "get_server_properties";

    pub const DESCRIPTION: &'static str =
        "Get the content of the server.properties file of the Minecraft server.";

    pub async fn execute(
        client: Arc<PanelClient>,
        _params: EmptyParams,
    ) -> Result<GetServerPropertiesOutput, ToolError> {
        let res = client
            .get::<ServerPropertiesResponse>("/api/control/properties")
            .await?;
        Ok(GetServerPropertiesOutput {
            properties: codec::decode(&res.data.properties)?,
        })
    }

    pub fn to_tool() -> Tool {
        tool_model::<EmptyParams, GetServerPropertiesOutput>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<PanelClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        panel_route(Self::to_tool(), client, Self::execute)
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SetServerPropertiesParams {
    /// The new content of the server.properties file, in plain text.
    pub properties: String,
}

pub struct SetServerPropertiesTool;

impl SetServerPropertiesTool {
    pub const NAME: &'static str = "set_server_properties";

    pub const DESCRIPTION: &'static str = "Set the content of the server.properties file of the Minecraft server. This will overwrite the existing server.properties file, so be careful when using this tool.";

    pub async fn execute(
        client: Arc<PanelClient>,
        params: SetServerPropertiesParams,
    ) -> Result<EmptyOutput, ToolError> {
        client
            .post::<NoPayload>(
                "/api/control/properties",
                Some(RequestBody::text(codec::encode(&params.properties))),
            )
            .await?;
        Ok(EmptyOutput {})
    }

    pub fn to_tool() -> Tool {
        tool_model::<SetServerPropertiesParams, EmptyOutput>(Self::NAME, Self::DESCRIPTION)
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
