use crate::constants;
use crate::error::{ConfigError, Result};
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct VoiceConfig {
    #[serde(default)]
    pub bot: BotConfig,

    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Deserialize, Clone)]
pub struct BotConfig {
    #[serde(default)]
    pub token: String,

    /// Destination chat. Zero disables delivery.
    #[serde(default)]
    pub chat_id: i64,

    #[serde(default = "default_api_url")]
    pub api_url: String,

    #[serde(default = "default_poll_updates")]
    pub poll_updates: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_api_url() -> String {
    constants::DEFAULT_BOT_API_URL.to_string()
}

fn default_poll_updates() -> bool {
    true
}

fn default_host() -> String {
    constants::DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    constants::DEFAULT_PORT
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            chat_id: 0,
            api_url: default_api_url(),
            poll_updates: default_poll_updates(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl fmt::Debug for BotConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BotConfig")
            .field("token", &"<redacted>")
            .field("chat_id", &self.chat_id)
            .field("api_url", &self.api_url)
            .field("poll_updates", &self.poll_updates)
            .finish()
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl VoiceConfig {
    /// Overrides file settings with `BOT_*`, `HOST` and `PORT` variables
    /// resolved through `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(token) = lookup("BOT_TOKEN") {
            self.bot.token = token;
        }

        if let Some(chat_id) = lookup("BOT_CHAT_ID") {
            self.bot.chat_id = chat_id
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue {
                    key: "BOT_CHAT_ID",
                    value: chat_id.clone(),
                })?;
        }

        if let Some(api_url) = lookup("BOT_API_URL") {
            self.bot.api_url = api_url;
        }

        if let Some(poll) = lookup("BOT_POLL_UPDATES") {
            self.bot.poll_updates = parse_flag(&poll).ok_or_else(|| ConfigError::InvalidValue {
                key: "BOT_POLL_UPDATES",
                value: poll.clone(),
            })?;
        }

        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }

        if let Some(port) = lookup("PORT") {
            self.server.port = port.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: "PORT",
                value: port.clone(),
            })?;
        }

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.bot.token.trim().is_empty() {
            return Err(ConfigError::Missing("BOT_TOKEN"));
        }
        Ok(())
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Reads a TOML config file. A missing file yields the defaults.
pub async fn parse_config_file(path: &Path) -> Result<VoiceConfig> {
    if !path.exists() {
        debug!("No config file at {}, using defaults", path.display());
        return Ok(VoiceConfig::default());
    }

    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
    let config: VoiceConfig = toml::from_str(&content)?;

    info!("Loaded config from {}", path.display());
    Ok(config)
}

/// Loads the process configuration: the file named by `VOICE_CONFIG` (or
/// the default path), then environment overrides.
pub async fn load_config() -> Result<VoiceConfig> {
    let path = std::env::var("VOICE_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(constants::DEFAULT_CONFIG_PATH));

    let mut config = parse_config_file(&path).await?;
    config.apply_env(|key| std::env::var(key).ok())?;
    config.validate()?;

    Ok(config)
}
