mod config;
pub mod constants;
mod error;

pub use config::{BotConfig, ServerConfig, VoiceConfig, load_config, parse_config_file};
pub use error::{ConfigError, Result};
