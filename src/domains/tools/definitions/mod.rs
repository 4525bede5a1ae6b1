//! Tool definitions module.
//!
//! One module per tool group, mirroring the panel API surface. Each tool is
//! a struct with `NAME`, `DESCRIPTION`, an async `execute`, and the
//! `to_tool`/`create_route` pair the router and registry consume.

pub mod bukkit_config;
pub mod code_of_conduct;
pub mod gamerules;
pub mod info;
pub mod logs;
pub mod players;
pub mod plugins;
pub mod saves;
pub mod tasks;
pub mod terminal;

pub use bukkit_config::{GetBukkitServerConfigTool, SetBukkitServerConfigTool};
pub use code_of_conduct::{
    ChangeCodeOfConductTool, GetCodeOfConductsTool, RemoveCodeOfConductTool,
};
pub use gamerules::{GetGamerulesTool, SetGameruleTool};
pub use info::{GetInfoTool, GetServerPropertiesTool, SetMotdTool, SetServerPropertiesTool};
pub use logs::{
    ClearLogsTool, DeleteLogTool, GetLatestLogTool, GetLogContentTool, GetLogsTool,
};
pub use players::{
    AddToWhitelistTool, BanIpTool, BanPlayerTool, DeletePlayerDataTool, DeprivePlayerOpTool,
    GetBannedIpsTool, GetPlayersTool, GetWhitelistTool, GivePlayerOpTool, KickPlayerTool,
    PardonIpTool, PardonPlayerTool, RemoveFromWhitelistTool, SetPlayerGamemodeTool,
    ToggleWhitelistTool,
};
pub use plugins::{GetPluginsTool, InstallPluginTool};
pub use saves::{DeleteSaveTool, EditSaveTool, GetSavesTool, ToggleSaveDatapackTool};
pub use tasks::{
    CreateScheduledTaskTool, DeleteScheduledTaskTool, EditScheduledTaskTool,
    GetScheduledTasksTool, ToggleScheduledTaskTool,
};
pub use terminal::{GetCommandsTool, SendCommandTool};
