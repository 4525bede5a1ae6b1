//! OPanel MCP Server Library
//!
//! This crate exposes a remote OPanel instance (a Minecraft-server control
//! panel) as a set of MCP tools served over stdio. Every tool maps 1:1 to a
//! panel HTTP endpoint: server info, saves, players, whitelist and bans,
//! gamerules, plugins, terminal, logs, code of conduct, scheduled tasks, and
//! Bukkit configuration files.
//!
//! # Architecture
//!
//! - **core**: configuration and startup-argument validation, the
//!   authenticated panel HTTP client, the base64 text codec, error handling,
//!   and the MCP server/transport plumbing
//! - **domains**: the tool surface — one definition module per tool group,
//!   aggregated by a registry and wired into the rmcp tool router

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
