use std::time::Duration;

pub const DEFAULT_CONFIG_PATH: &str = "/etc/gitlab-voice/voice.toml";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_BOT_API_URL: &str = "https://api.telegram.org";

pub const BOT_HTTP_TIMEOUT: Duration = Duration::from_secs(10);

pub const UPDATE_POLL_TIMEOUT_SECS: u64 = 60;
pub const UPDATE_POLL_RETRY_DELAY: Duration = Duration::from_secs(5);

pub const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(30);
