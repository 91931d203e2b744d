mod error;
mod events;
mod handler;
mod parse;

pub use error::{Result, WebhookError};
pub use events::GitLabWebhook;
pub use parse::parse_webhook_event;

use axum::{Router, routing::post};
use std::sync::Arc;
use voice_telegram::ChatGateway;

#[derive(Clone)]
pub struct WebhookConfig {
    pub gateway: Arc<dyn ChatGateway>,
    /// Destination chat. Zero disables delivery.
    pub chat_id: i64,
}

pub fn router(config: WebhookConfig) -> Router {
    Router::new()
        .route("/webhook", post(handler::handle_webhook))
        .route("/webhook/raw", post(handler::handle_raw))
        .with_state(Arc::new(config))
}
