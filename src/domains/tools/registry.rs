//! Tool Registry - central metadata collection for all tools.
//!
//! The registry is the single source of truth for which tools exist. Order
//! carries no meaning (dispatch is by name), but names must be unique.

use rmcp::model::Tool;

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

/// Tool registry - aggregates every tool definition.
pub struct ToolRegistry;

impl ToolRegistry {
    /// Get all tool names, grouped the way the definitions are.
    pub fn tool_names() -> Vec<&'static str> {
        vec![
            GetInfoTool::NAME,
            SetMotdTool::NAME,
            GetServerPropertiesTool::NAME,
            SetServerPropertiesTool::NAME,
            GetSavesTool::NAME,
            EditSaveTool::NAME,
            ToggleSaveDatapackTool::NAME,
            DeleteSaveTool::NAME,
            GetPlayersTool::NAME,
            GivePlayerOpTool::NAME,
            DeprivePlayerOpTool::NAME,
            KickPlayerTool::NAME,
            BanPlayerTool::NAME,
            PardonPlayerTool::NAME,
            SetPlayerGamemodeTool::NAME,
            DeletePlayerDataTool::NAME,
            GetWhitelistTool::NAME,
            ToggleWhitelistTool::NAME,
            AddToWhitelistTool::NAME,
            RemoveFromWhitelistTool::NAME,
            GetBannedIpsTool::NAME,
            BanIpTool::NAME,
            PardonIpTool::NAME,
            GetGamerulesTool::NAME,
            SetGameruleTool::NAME,
            GetPluginsTool::NAME,
            InstallPluginTool::NAME,
            GetCommandsTool::NAME,
            SendCommandTool::NAME,
            GetLogsTool::NAME,
            GetLogContentTool::NAME,
            GetLatestLogTool::NAME,
            DeleteLogTool::NAME,
            ClearLogsTool::NAME,
            GetCodeOfConductsTool::NAME,
            ChangeCodeOfConductTool::NAME,
            RemoveCodeOfConductTool::NAME,
            GetScheduledTasksTool::NAME,
            CreateScheduledTaskTool::NAME,
            EditScheduledTaskTool::NAME,
            ToggleScheduledTaskTool::NAME,
            DeleteScheduledTaskTool::NAME,
            GetBukkitServerConfigTool::NAME,
            SetBukkitServerConfigTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            GetInfoTool::to_tool(),
            SetMotdTool::to_tool(),
            GetServerPropertiesTool::to_tool(),
            SetServerPropertiesTool::to_tool(),
            GetSavesTool::to_tool(),
            EditSaveTool::to_tool(),
            ToggleSaveDatapackTool::to_tool(),
            DeleteSaveTool::to_tool(),
            GetPlayersTool::to_tool(),
            GivePlayerOpTool::to_tool(),
            DeprivePlayerOpTool::to_tool(),
            KickPlayerTool::to_tool(),
            BanPlayerTool::to_tool(),
            PardonPlayerTool::to_tool(),
            SetPlayerGamemodeTool::to_tool(),
            DeletePlayerDataTool::to_tool(),
            GetWhitelistTool::to_tool(),
            ToggleWhitelistTool::to_tool(),
            AddToWhitelistTool::to_tool(),
            RemoveFromWhitelistTool::to_tool(),
            GetBannedIpsTool::to_tool(),
            BanIpTool::to_tool(),
            PardonIpTool::to_tool(),
            GetGamerulesTool::to_tool(),
            SetGameruleTool::to_tool(),
            GetPluginsTool::to_tool(),
            InstallPluginTool::to_tool(),
            GetCommandsTool::to_tool(),
            SendCommandTool::to_tool(),
            GetLogsTool::to_tool(),
            GetLogContentTool::to_tool(),
            GetLatestLogTool::to_tool(),
            DeleteLogTool::to_tool(),
            ClearLogsTool::to_tool(),
            GetCodeOfConductsTool::to_tool(),
            ChangeCodeOfConductTool::to_tool(),
            RemoveCodeOfConductTool::to_tool(),
            GetScheduledTasksTool::to_tool(),
            CreateScheduledTaskTool::to_tool(),
            EditScheduledTaskTool::to_tool(),
            ToggleScheduledTaskTool::to_tool(),
            DeleteScheduledTaskTool::to_tool(),
            GetBukkitServerConfigTool::to_tool(),
            SetBukkitServerConfigTool::to_tool(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_registry_tool_names() {
        let names = ToolRegistry::tool_names();
        assert_eq!(names.len(), 44);
        assert!(names.contains(&"get_info"));
        assert!(names.contains(&"get_players"));
        assert!(names.contains(&"install_plugin"));
        assert!(names.contains(&"get_scheduled_tasks"));
        assert!(names.contains(&"set_bukkit_server_config"));
    }

    #[test]
    fn test_tool_names_are_unique() {
        let names = ToolRegistry::tool_names();
        let unique: HashSet<_> = names.iter().collect();
        assert_eq!(unique.len(), names.len());
    }

    #[test]
    fn test_metadata_matches_names() {
        let names = ToolRegistry::tool_names();
        let tools = ToolRegistry::get_all_tools();
        assert_eq!(tools.len(), names.len());

        for (tool, name) in tools.iter().zip(names) {
            assert_eq!(tool.name.as_ref(), name);
            assert!(tool.description.as_ref().is_some_and(|d| !d.is_empty()));
            assert!(tool.output_schema.is_some());
        }
    }
}
