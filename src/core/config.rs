//! Configuration management for the MCP server.
//!
//! The panel connection is configured entirely through process arguments:
//! `--server <url>` and `--token <token>` (the `--server=<url>` form is also
//! accepted). Both values are validated here, before any tool is registered,
//! and then carried in an explicit [`PanelConfig`] so the HTTP client never
//! has to re-read process state.

use thiserror::Error;
use url::Url;

/// Errors raised while extracting or validating startup arguments.
///
/// All of these are fatal: the process must exit non-zero before serving.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required arguments: --server and --token")]
    MissingArguments,

    #[error("Invalid server URL: {0}.")]
    InvalidServerUrl(String),

    #[error("Invalid token: {0}.")]
    InvalidToken(String),
}

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Panel connection settings (base URL + auth token).
    pub panel: PanelConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Connection settings for the remote OPanel instance.
#[derive(Clone)]
pub struct PanelConfig {
    /// Validated base URL of the panel, used by plain concatenation with
    /// each route (no path joining).
    pub base_url: String,

    /// Bearer token for the panel API.
    pub token: String,
}

/// Custom Debug implementation to redact the token from logs.
impl std::fmt::Debug for PanelConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PanelConfig")
            .field("base_url", &self.base_url)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Config {
    /// Build the configuration from process arguments.
    ///
    /// Extracts and validates `--server` and `--token`. The log level can be
    /// overridden with the `OPANEL_LOG_LEVEL` environment variable.
    pub fn from_args(args: &[String]) -> Result<Self, ConfigError> {
        let server = arg_value(args, "server").ok_or(ConfigError::MissingArguments)?;
        let token = arg_value(args, "token").ok_or(ConfigError::MissingArguments)?;

        validate_server(&server)?;
        validate_token(&token)?;

        let level = std::env::var("OPANEL_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            server: ServerConfig {
                name: "opanel-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            panel: PanelConfig {
                base_url: server,
                token,
            },
            logging: LoggingConfig { level },
        })
    }
}

/// Extract the value of `--name` from an argument list.
///
/// Accepts both `--name value` (the next token, unless it looks like another
/// flag) and `--name=value` (inline, trimmed; empty after trimming counts as
/// absent). The first matching token wins, even when it carries no usable
/// value.
pub fn arg_value(args: &[String], name: &str) -> Option<String> {
    let flag = format!("--{name}");
    let inline_prefix = format!("--{name}=");

    for (i, arg) in args.iter().enumerate() {
        if *arg == flag {
            return match args.get(i + 1) {
                Some(next) if !next.starts_with("--") => Some(next.clone()),
                _ => None,
            };
        }

        if let Some(rest) = arg.strip_prefix(&inline_prefix) {
            let value = rest.trim();
            return (!value.is_empty()).then(|| value.to_string());
        }
    }

    None
}

/// Validate the `--server` argument.
///
/// Accepts `https` with any host, and `http` only for `localhost` or hosts
/// with the `192.168.` prefix.
pub fn validate_server(server: &str) -> Result<Url, ConfigError> {
    let parsed = Url::parse(server)
        .map_err(|_| ConfigError::InvalidServerUrl("must be a valid URL".to_string()))?;

    let is_https = parsed.scheme() == "https";
    let is_http_local_only = parsed.scheme() == "http"
        && parsed
            .host_str()
            .is_some_and(|host| host == "localhost" || host.starts_with("192.168."));

    if !is_https && !is_http_local_only {
        return Err(ConfigError::InvalidServerUrl(
            "use https, or http with localhost/192.168.* only".to_string(),
        ));
    }

    Ok(parsed)
}

/// Validate the `--token` argument: non-blank, `o-` prefix, exactly 50
/// characters.
pub fn validate_token(token: &str) -> Result<(), ConfigError> {
    if token.trim().is_empty() {
        return Err(ConfigError::InvalidToken(
            "token cannot be empty".to_string(),
        ));
    }

    if !token.starts_with("o-") || token.chars().count() != 50 {
        return Err(ConfigError::InvalidToken(
            "token must start with 'o-' and be 50 characters long".to_string(),
        ));
    }

    Ok(())
}
