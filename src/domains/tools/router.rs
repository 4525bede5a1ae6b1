//! Tool Router - builds the rmcp ToolRouter from the definitions.
//!
//! Every route shares one authenticated panel client; each tool knows how to
//! create its own route.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::core::client::PanelClient;

use super::definitions::{
    AddToWhitelistTool, BanIpTool, BanPlayerTool, ChangeCodeOfConductTool, ClearLogsTool,
    CreateScheduledTaskTool, DeleteLogTool, DeletePlayerDataTool, DeleteSaveTool,
    DeleteScheduledTaskTool, DeprivePlayerOpTool, EditSaveTool, EditScheduledTaskTool,
    GetBannedIpsTool, GetBukkitServerConfigTool, GetCodeOfConductsTool, GetCommandsTool,
    GetGamerulesTool, GetInfoTool, GetLatestLogTool, GetLogContentTool, GetLogsTool,
    GetPlayersTool, GetPluginsTool, GetSavesTool, GetScheduledTasksTool,
    GetServerPropertiesTool, GetWhitelistTool, GivePlayerOpTool, InstallPluginTool,
    KickPlayerTool, PardonIpTool, PardonPlayerTool, RemoveCodeOfConductTool,
    RemoveFromWhitelistTool, SendCommandTool, SetBukkitServerConfigTool, SetGameruleTool,
    SetMotdTool, SetPlayerGamemodeTool, SetServerPropertiesTool, ToggleSaveDatapackTool,
    ToggleScheduledTaskTool, ToggleWhitelistTool,
};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(client: Arc<PanelClient>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(GetInfoTool::create_route(client.clone()))
        .with_route(SetMotdTool::create_route(client.clone()))
        .with_route(GetServerPropertiesTool::create_route(client.clone()))
        .with_route(SetServerPropertiesTool::create_route(client.clone()))
        .with_route(GetSavesTool::create_route(client.clone()))
        .with_route(EditSaveTool::create_route(client.clone()))
        .with_route(ToggleSaveDatapackTool::create_route(client.clone()))
        .with_route(DeleteSaveTool::create_route(client.clone()))
        .with_route(GetPlayersTool::create_route(client.clone()))
        .with_route(GivePlayerOpTool::create_route(client.clone()))
        .with_route(DeprivePlayerOpTool::create_route(client.clone()))
        .with_route(KickPlayerTool::create_route(client.clone()))
        .with_route(BanPlayerTool::create_route(client.clone()))
        .with_route(PardonPlayerTool::create_route(client.clone()))
        .with_route(SetPlayerGamemodeTool::create_route(client.clone()))
        .with_route(DeletePlayerDataTool::create_route(client.clone()))
        .with_route(GetWhitelistTool::create_route(client.clone()))
        .with_route(ToggleWhitelistTool::create_route(client.clone()))
        .with_route(AddToWhitelistTool::create_route(client.clone()))
        .with_route(RemoveFromWhitelistTool::create_route(client.clone()))
        .with_route(GetBannedIpsTool::create_route(client.clone()))
        .with_route(BanIpTool::create_route(client.clone()))
        .with_route(PardonIpTool::create_route(client.clone()))
        .with_route(GetGamerulesTool::create_route(client.clone()))
        .with_route(SetGameruleTool::create_route(client.clone()))
        .with_route(GetPluginsTool::create_route(client.clone()))
        .with_route(InstallPluginTool::create_route(client.clone()))
        .with_route(GetCommandsTool::create_route(client.clone()))
        .with_route(SendCommandTool::create_route(client.clone()))
        .with_route(GetLogsTool::create_route(client.clone()))
        .with_route(GetLogContentTool::create_route(client.clone()))
        .with_route(GetLatestLogTool::create_route(client.clone()))
        .with_route(DeleteLogTool::create_route(client.clone()))
        .with_route(ClearLogsTool::create_route(client.clone()))
        .with_route(GetCodeOfConductsTool::create_route(client.clone()))
        .with_route(ChangeCodeOfConductTool::create_route(client.clone()))
        .with_route(RemoveCodeOfConductTool::create_route(client.clone()))
        .with_route(GetScheduledTasksTool::create_route(client.clone()))
        .with_route(CreateScheduledTaskTool::create_route(client.clone()))
        .with_route(EditScheduledTaskTool::create_route(client.clone()))
        .with_route(ToggleScheduledTaskTool::create_route(client.clone()))
        .with_route(DeleteScheduledTaskTool::create_route(client.clone()))
        .with_route(GetBukkitServerConfigTool::create_route(client.clone()))
        .with_route(SetBukkitServerConfigTool::create_route(client))
}
