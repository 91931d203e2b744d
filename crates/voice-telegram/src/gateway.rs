use crate::Result;
use async_trait::async_trait;
use tracing::{debug, error, info};
use voice_notify::Notification;

#[async_trait]
pub trait ChatGateway: Send + Sync {
    async fn send_message(&self, chat_id: i64, text: &str) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryOutcome {
    Sent,
    Suppressed,
    NoChat,
    Failed,
}

/// Sends a notification to the configured chat. Makes at most one attempt
/// and logs failures instead of returning them.
pub async fn deliver(
    gateway: &dyn ChatGateway,
    chat_id: i64,
    notification: &Notification,
) -> DeliveryOutcome {
    if chat_id == 0 {
        debug!("No chat configured, skipping delivery");
        return DeliveryOutcome::NoChat;
    }

    let Some(text) = notification.message() else {
        return DeliveryOutcome::Suppressed;
    };

    match gateway.send_message(chat_id, text).await {
        Ok(()) => {
            info!("Delivered notification to chat {}", chat_id);
            DeliveryOutcome::Sent
        }
        Err(e) => {
            error!("Send message error: {} | msg: {}", e, text);
            DeliveryOutcome::Failed
        }
    }
}
