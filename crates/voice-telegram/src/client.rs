use crate::Result;
use crate::error::TelegramError;
use crate::gateway::ChatGateway;
use crate::types::{ApiResponse, Message, Update, User};
use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;
use voice_config::constants;

const PARSE_MODE: &str = "MarkdownV2";

/// Thin Bot API client. Holds the token inside its endpoint URL, so errors
/// are stripped of the URL before they leave this type.
pub struct TelegramClient {
    http: reqwest::Client,
    endpoint: String,
}

#[derive(Serialize)]
struct SendMessageParams<'a> {
    chat_id: i64,
    text: &'a str,
    parse_mode: &'static str,
}

#[derive(Serialize)]
struct GetUpdatesParams {
    offset: i64,
    timeout: u64,
}

impl TelegramClient {
    pub fn new(token: &str, api_url: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(constants::BOT_HTTP_TIMEOUT)
            .build()
            .map_err(|e| TelegramError::Http(e.without_url()))?;

        Ok(Self {
            http,
            endpoint: format!("{}/bot{}", api_url.trim_end_matches('/'), token),
        })
    }

    async fn call<P, T>(&self, method: &str, params: &P, timeout: Option<Duration>) -> Result<T>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!("Calling Telegram method {}", method);

        let mut request = self
            .http
            .post(format!("{}/{}", self.endpoint, method))
            .json(params);
        if let Some(timeout) = timeout {
            request = request.timeout(timeout);
        }

        let response = request
            .send()
            .await
            .map_err(|e| TelegramError::Http(e.without_url()))?;
        let envelope: ApiResponse<T> = response
            .json()
            .await
            .map_err(|e| TelegramError::Http(e.without_url()))?;

        envelope.into_result()
    }

    pub async fn get_me(&self) -> Result<User> {
        self.call("getMe", &serde_json::json!({}), None).await
    }

    pub async fn send_markdown(&self, chat_id: i64, text: &str) -> Result<Message> {
        let params = SendMessageParams {
            chat_id,
            text,
            parse_mode: PARSE_MODE,
        };
        self.call("sendMessage", &params, None).await
    }

    /// Long-polls for updates. The request timeout is stretched past the
    /// server-side poll timeout.
    pub async fn get_updates(&self, offset: i64, timeout_secs: u64) -> Result<Vec<Update>> {
        let params = GetUpdatesParams {
            offset,
            timeout: timeout_secs,
        };
        let request_timeout = Duration::from_secs(timeout_secs) + constants::BOT_HTTP_TIMEOUT;
        self.call("getUpdates", &params, Some(request_timeout))
            .await
    }
}

#[async_trait]
impl ChatGateway for TelegramClient {
    async fn send_message(&self, chat_id: i64, text: &str) -> Result<()> {
        self.send_markdown(chat_id, text).await?;
        Ok(())
    }
}
