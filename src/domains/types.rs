//! Records mirrored from the panel API.
//!
//! These are read-only views over state the panel owns; instances live only
//! for the duration of one tool invocation. Fields the panel transmits
//! base64-encoded are decoded by the handlers before a record leaves a tool,
//! and optional fields are omitted from output rather than serialized as
//! null.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Game mode of a player or save.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    Adventure,
    Survival,
    Creative,
    Spectator,
}

impl GameMode {
    /// Wire name, as used in query strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Adventure => "adventure",
            Self::Survival => "survival",
            Self::Creative => "creative",
            Self::Spectator => "spectator",
        }
    }
}

/// World difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Peaceful,
    Easy,
    Normal,
    Hard,
}

/// A player known to the server, online or not.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    /// The name of the player. Bot players and players that are not
    /// correctly cached in the usercache may not have a name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The UUID of the player.
    pub uuid: String,

    /// Whether the player is currently online.
    pub is_online: bool,

    /// Whether the player is an operator (op).
    pub is_op: bool,

    /// Whether the player is banned.
    pub is_banned: bool,

    /// The game mode of the player.
    pub gamemode: GameMode,

    /// The reason why the player is banned. Only available when the player
    /// is banned. Base64 on the wire.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ban_reason: Option<String>,

    /// Whether the player is whitelisted. Only available when the whitelist
    /// is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_whitelisted: Option<bool>,

    /// The ping of the player in milliseconds. Only available while the
    /// player is online.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ping: Option<i64>,

    /// The IP address of the player. Only available while the player is
    /// online.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
}

/// A world save on the server.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Save {
    /// The name of the save.
    pub name: String,

    /// The display name of the save. Base64 on the wire.
    pub display_name: String,

    /// The path of the save on the server.
    pub path: String,

    /// The size of the save in bytes.
    pub size: u64,

    /// Whether the save is currently running (not necessarily the currently
    /// selected one).
    pub is_running: bool,

    /// Whether the save is the currently selected one.
    pub is_current: bool,

    /// The default game mode of the save.
    pub default_game_mode: GameMode,

    /// The difficulty of the save.
    pub difficulty: Difficulty,

    /// Whether the difficulty of the save is locked.
    pub is_difficulty_locked: bool,

    /// Whether the save is in hardcore mode.
    pub is_hardcore: bool,

    /// The datapacks in the save, keyed by datapack name; the value says
    /// whether the datapack is enabled.
    pub datapacks: BTreeMap<String, bool>,
}

/// A plugin or mod installed on the server.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Plugin {
    /// The file name of the plugin/mod. Base64 on the wire.
    pub file_name: String,

    /// The name of the plugin/mod.
    pub name: String,

    /// The version. Not available for plugins/mods that are not loaded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// The description. Not available for plugins/mods that are not loaded.
    /// Base64 on the wire.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The authors of the plugin/mod.
    #[serde(default)]
    pub authors: Vec<String>,

    /// The website. Not available for plugins/mods that are not loaded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    /// The file size of the plugin/mod in bytes.
    pub size: u64,

    /// Whether the plugin/mod is enabled.
    pub enabled: bool,

    /// Whether the plugin/mod is loaded to the server.
    pub loaded: bool,
}

/// A scheduled task registered on the panel. The cron expression and
/// commands are opaque to this server; the panel owns the scheduler.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledTask {
    /// The id of the scheduled task.
    pub id: String,

    /// The name of the scheduled task.
    pub name: String,

    /// The cron expression of the scheduled task.
    pub cron: String,

    /// The list of commands to execute for the scheduled task.
    pub commands: Vec<String>,

    /// Whether the scheduled task is enabled.
    pub enabled: bool,
}

/// One whitelist entry.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WhitelistEntry {
    /// The name of the whitelisted player.
    pub name: String,

    /// The UUID of the whitelisted player.
    pub uuid: String,
}

/// A gamerule value: the panel reports strings, numbers, or booleans.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum GameruleValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}
