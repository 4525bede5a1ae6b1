//! Player management tools: roster, op, kick/ban, gamemode, whitelist, and
//! IP bans.
//!
//! `get_players` merges the overview and list endpoints; ban/kick reasons
//! travel base64 in both directions. Fields that do not apply to a player's
//! current state (ping/ip offline, banReason unbanned) are omitted from the
//! output rather than emitted as null.

use std::sync::Arc;

use rmcp::{handler::server::tool::ToolRoute, model::Tool};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::client::{NoPayload, PanelClient};
use crate::core::codec;
use crate::domains::tools::common::{EmptyOutput, EmptyParams, panel_route, tool_model};
use crate::domains::tools::error::ToolError;
use crate::domains::types::{GameMode, Player, WhitelistEntry};

// ============================================================================
// Wire shapes
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlayersOverviewResponse {
    max_player_count: u32,
    whitelist: bool,
}

#[derive(Debug, Deserialize)]
struct PlayersListResponse {
    players: Vec<Player>,
}

#[derive(Debug, Deserialize)]
struct WhitelistResponse {
    whitelist: Vec<WhitelistEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BannedIpsResponse {
    banned_ips: Vec<String>,
}

// ============================================================================
// get_players
// ============================================================================

#[derive(Debug, Clone, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetPlayersOutput {
    /// The players known to the Minecraft server, online or not.
    pub players: Vec<Player>,

    /// The maximum number of players allowed on the Minecraft server.
    pub max_player_count: u32,

    /// Whether the whitelist is enabled on the Minecraft server.
    pub whitelist: bool,
}

pub struct GetPlayersTool;

impl GetPlayersTool {
    pub const NAME: &'static str = "get_players";

    pub const DESCRIPTION: &'static str = "Get the list of players currently on the Minecraft server, as well as the maximum player count and whether the whitelist is enabled.";

    pub async fn execute(
        client: Arc<PanelClient>,
        _params: EmptyParams,
    ) -> Result<GetPlayersOutput, ToolError> {
        // These two routes really have no /api prefix on the panel.
        let overview = client.get::<PlayersOverviewResponse>("/players").await?;
        let list = client.get::<PlayersListResponse>("/players/list").await?;

        let mut players = list.data.players;
        for player in &mut players {
            if let Some(reason) = player.ban_reason.take() {
                player.ban_reason = Some(codec::decode(&reason)?);
            }
        }

        Ok(GetPlayersOutput {
            players,
            max_player_count: overview.data.max_player_count,
            whitelist: overview.data.whitelist,
        })
    }

    pub fn to_tool() -> Tool {
        tool_model::<EmptyParams, GetPlayersOutput>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<PanelClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        panel_route(Self::to_tool(), client, Self::execute)
    }
}

// ============================================================================
// op / deop
// ============================================================================

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct PlayerUuidParams {
    /// The UUID of the player.
    pub uuid: String,
}

pub struct GivePlayerOpTool;

impl GivePlayerOpTool {
    pub const NAME: &'static str = "give_player_op";

    pub const DESCRIPTION: &'static str =
        "Give a player operator (op) permission on the Minecraft server.";

    pub async fn execute(
        client: Arc<PanelClient>,
        params: PlayerUuidParams,
    ) -> Result<EmptyOutput, ToolError> {
        info!(uuid = %params.uuid, "Giving op");
        client
            .post::<NoPayload>(&format!("/api/players/op?uuid={}", params.uuid), None)
            .await?;
        Ok(EmptyOutput {})
    }

    pub fn to_tool() -> Tool {
        tool_model::<PlayerUuidParams, EmptyOutput>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<PanelClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        panel_route(Self::to_tool(), client, Self::execute)
    }
}

pub struct DeprivePlayerOpTool;

impl DeprivePlayerOpTool {
    pub const NAME: &'static str = "deprive_player_op";

    pub const DESCRIPTION: &'static str =
        "Deprive a player of operator (op) permission on the Minecraft server.";

    pub async fn execute(
        client: Arc<PanelClient>,
        params: PlayerUuidParams,
    ) -> Result<EmptyOutput, ToolError> {
        info!(uuid = %params.uuid, "Depriving op");
        client
            .post::<NoPayload>(&format!("/api/players/deop?uuid={}", params.uuid), None)
            .await?;
        Ok(EmptyOutput {})
    }

    pub fn to_tool() -> Tool {
        tool_model::<PlayerUuidParams, EmptyOutput>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<PanelClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        panel_route(Self::to_tool(), client, Self::execute)
    }
}

// ============================================================================
// kick / ban / pardon
// ============================================================================

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct KickPlayerParams {
    /// The UUID of the player to kick.
    pub uuid: String,

    /// The reason for kicking the player.
    pub reason: String,
}

pub struct KickPlayerTool;

impl KickPlayerTool {
    pub const NAME: &'static str = "kick_player";

    pub const DESCRIPTION: &'static str = "Kick a player from the Minecraft server.";

    pub async fn execute(
        client: Arc<PanelClient>,
        params: KickPlayerParams,
    ) -> Result<EmptyOutput, ToolError> {
        let route = format!(
            "/api/players/kick?uuid={}&r={}",
            params.uuid,
            codec::encode(&params.reason)
        );
        client.post::<NoPayload>(&route, None).await?;
        Ok(EmptyOutput {})
    }

    pub fn to_tool() -> Tool {
        tool_model::<KickPlayerParams, EmptyOutput>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<PanelClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        panel_route(Self::to_tool(), client, Self::execute)
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct BanPlayerParams {
    /// The UUID of the player to ban.
    pub uuid: String,

    /// The reason for banning the player.
    pub reason: String,
}

pub struct BanPlayerTool;

impl BanPlayerTool {
    pub const NAME: &'static str = "ban_player";

    pub const DESCRIPTION: &'static str = "Ban a player from the Minecraft server.";

    pub async fn execute(
        client: Arc<PanelClient>,
        params: BanPlayerParams,
    ) -> Result<EmptyOutput, ToolError> {
        let route = format!(
            "/api/players/ban?uuid={}&r={}",
            params.uuid,
            codec::encode(&params.reason)
        );
        client.post::<NoPayload>(&route, None).await?;
        Ok(EmptyOutput {})
    }

    pub fn to_tool() -> Tool {
        tool_model::<BanPlayerParams, EmptyOutput>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<PanelClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        panel_route(Self::to_tool(), client, Self::execute)
    }
}

pub struct PardonPlayerTool;

impl PardonPlayerTool {
    pub const NAME: &'static str = "pardon_player";

    pub const DESCRIPTION: &'static str =
        "Pardon a player from the ban list of the Minecraft server.";

    pub async fn execute(
        client: Arc<PanelClient>,
        params: PlayerUuidParams,
    ) -> Result<EmptyOutput, ToolError> {
        client
            .post::<NoPayload>(&format!("/api/players/pardon?uuid={}", params.uuid), None)
            .await?;
        Ok(EmptyOutput {})
    }

    pub fn to_tool() -> Tool {
        tool_model::<PlayerUuidParams, EmptyOutput>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<PanelClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        panel_route(Self::to_tool(), client, Self::execute)
    }
}

// ============================================================================
// set_player_gamemode / delete_player_data
// ============================================================================

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SetPlayerGamemodeParams {
    /// The UUID of the player to set game mode for.
    pub uuid: String,

    /// The game mode to set for the player.
    pub gamemode: GameMode,
}

pub struct SetPlayerGamemodeTool;

impl SetPlayerGamemodeTool {
    pub const NAME: &'static str = "set_player_gamemode";

    pub const DESCRIPTION: &'static str = "Set the game mode of a player on the Minecraft server.";

    pub async fn execute(
        client: Arc<PanelClient>,
        params: SetPlayerGamemodeParams,
    ) -> Result<EmptyOutput, ToolError> {
        let route = format!(
            "/api/players/gamemode?uuid={}&gm={}",
            params.uuid,
            params.gamemode.as_str()
        );
        client.post::<NoPayload>(&route, None).await?;
        Ok(EmptyOutput {})
    }

    pub fn to_tool() -> Tool {
        tool_model::<SetPlayerGamemodeParams, EmptyOutput>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<PanelClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        panel_route(Self::to_tool(), client, Self::execute)
    }
}

pub struct DeletePlayerDataTool;

impl DeletePlayerDataTool {
    pub const NAME: &'static str = "delete_player_data";

    pub const DESCRIPTION: &'static str = "Delete a player's data (/<server_root_dir>/world/playerdata/<player_uuid>.dat) from the Minecraft server. This will reset the player's inventory, position, and other data to the default state when they join the server again.";

    pub async fn execute(
        client: Arc<PanelClient>,
        params: PlayerUuidParams,
    ) -> Result<EmptyOutput, ToolError> {
        client
            .delete::<NoPayload>(&format!("/api/players?uuid={}", params.uuid), None)
            .await?;
        Ok(EmptyOutput {})
    }

    pub fn to_tool() -> Tool {
        tool_model::<PlayerUuidParams, EmptyOutput>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<PanelClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        panel_route(Self::to_tool(), client, Self::execute)
    }
}

// ============================================================================
// whitelist
// ============================================================================

#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct GetWhitelistOutput {
    /// The whitelist of the Minecraft server.
    pub whitelist: Vec<WhitelistEntry>,
}

pub struct GetWhitelistTool;

impl GetWhitelistTool {
    pub const NAME: &'static str = "get_whitelist";

    pub const DESCRIPTION: &'static str = "Get the whitelist of the Minecraft server.";

    pub async fn execute(
        client: Arc<PanelClient>,
        _params: EmptyParams,
    ) -> Result<GetWhitelistOutput, ToolError> {
        let res = client.get::<WhitelistResponse>("/api/whitelist").await?;
        Ok(GetWhitelistOutput {
            whitelist: res.data.whitelist,
        })
    }

    pub fn to_tool() -> Tool {
        tool_model::<EmptyParams, GetWhitelistOutput>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<PanelClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        panel_route(Self::to_tool(), client, Self::execute)
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ToggleWhitelistParams {
    /// Whether to enable the whitelist. Set to true to enable, or false to
    /// disable.
    pub enabled: bool,
}

pub struct ToggleWhitelistTool;

impl ToggleWhitelistTool {
    pub const NAME: &'static str = "toggle_whitelist";

    pub const DESCRIPTION: &'static str =
        "Enable or disable the whitelist of the Minecraft server.";

    pub async fn execute(
        client: Arc<PanelClient>,
        params: ToggleWhitelistParams,
    ) -> Result<EmptyOutput, ToolError> {
        let route = if params.enabled {
            "/api/whitelist/enable"
        } else {
            "/api/whitelist/disable"
        };
        client.post::<NoPayload>(route, None).await?;
        Ok(EmptyOutput {})
    }

    pub fn to_tool() -> Tool {
        tool_model::<ToggleWhitelistParams, EmptyOutput>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<PanelClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        panel_route(Self::to_tool(), client, Self::execute)
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct WhitelistEntryParams {
    /// The name of the player.
    pub name: String,

    /// The UUID of the player.
    pub uuid: String,
}

pub struct AddToWhitelistTool;

impl AddToWhitelistTool {
    pub const NAME: &'static str = "add_to_whitelist";

    pub const DESCRIPTION: &'static str =
        "Add a player to the whitelist of the Minecraft server.";

    pub async fn execute(
        client: Arc<PanelClient>,
        params: WhitelistEntryParams,
    ) -> Result<EmptyOutput, ToolError> {
        let route = format!(
            "/api/whitelist/add?name={}&uuid={}",
            params.name, params.uuid
        );
        client.post::<NoPayload>(&route, None).await?;
        Ok(EmptyOutput {})
    }

    pub fn to_tool() -> Tool {
        tool_model::<WhitelistEntryParams, EmptyOutput>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<PanelClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        panel_route(Self::to_tool(), client, Self::execute)
    }
}

pub struct RemoveFromWhitelistTool;

impl RemoveFromWhitelistTool {
    pub const NAME: &'static str = "remove_from_whitelist";

    pub const DESCRIPTION: &'static str =
        "Remove a player from the whitelist of the Minecraft server.";

    pub async fn execute(
        client: Arc<PanelClient>,
        params: WhitelistEntryParams,
    ) -> Result<EmptyOutput, ToolError> {
        let route = format!(
            "/api/whitelist/remove?name={}&uuid={}",
            params.name, params.uuid
        );
        client.post::<NoPayload>(&route, None).await?;
        Ok(EmptyOutput {})
    }

    pub fn to_tool() -> Tool {
        tool_model::<WhitelistEntryParams, EmptyOutput>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<PanelClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        panel_route(Self::to_tool(), client, Self::execute)
    }
}

// ============================================================================
// IP bans
// ============================================================================

#[derive(Debug, Clone, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetBannedIpsOutput {
    /// The list of banned IP addresses.
    pub banned_ips: Vec<String>,
}

pub struct GetBannedIpsTool;

impl GetBannedIpsTool {
    pub const NAME: &'static str = "get_banned_ips";

    pub const DESCRIPTION: &'static str =
        "Get the list of banned IP addresses on the Minecraft server.";

    pub async fn execute(
        client: Arc<PanelClient>,
        _params: EmptyParams,
    ) -> Result<GetBannedIpsOutput, ToolError> {
        let res = client.get::<BannedIpsResponse>("/api/banned-ips").await?;
        Ok(GetBannedIpsOutput {
            banned_ips: res.data.banned_ips,
        })
    }

    pub fn to_tool() -> Tool {
        tool_model::<EmptyParams, GetBannedIpsOutput>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<PanelClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        panel_route(Self::to_tool(), client, Self::execute)
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct IpParams {
    /// The IP address.
    pub ip: String,
}

pub struct BanIpTool;

impl BanIpTool {
    pub const NAME: &'static str = "ban_ip";

    pub const DESCRIPTION: &'static str =
        "Ban an IP address from accessing the Minecraft server.";

    pub async fn execute(
        client: Arc<PanelClient>,
        params: IpParams,
    ) -> Result<EmptyOutput, ToolError> {
        client
            .post::<NoPayload>(&format!("/api/banned-ips/add?ip={}", params.ip), None)
            .await?;
        Ok(EmptyOutput {})
    }

    pub fn to_tool() -> Tool {
        tool_model::<IpParams, EmptyOutput>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<PanelClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        panel_route(Self::to_tool(), client, Self::execute)
    }
}

pub struct PardonIpTool;

impl PardonIpTool {
    pub const NAME: &'static str = "pardon_ip";

    pub const DESCRIPTION: &'static str =
        "Pardon an IP address from the ban list of the Minecraft server.";

    pub async fn execute(
        client: Arc<PanelClient>,
        params: IpParams,
    ) -> Result<EmptyOutput, ToolError> {
        client
            .post::<NoPayload>(&format!("/api/banned-ips/remove?ip={}", params.ip), None)
            .await?;
        Ok(EmptyOutput {})
    }

    pub fn to_tool() -> Tool {
        tool_model::<IpParams, EmptyOutput>(Self::NAME, Self::DESCRIPTION)
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
