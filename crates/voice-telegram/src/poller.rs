use crate::client::TelegramClient;
use crate::types::Update;
use std::sync::Arc;
use tracing::{error, info};
use voice_config::constants;

/// Long-polls the bot for incoming updates and logs them. Useful for
/// discovering the chat id to configure; nothing here feeds back into
/// notification delivery.
pub async fn run_update_poller(client: Arc<TelegramClient>) {
    info!("Starting update poller");

    let mut offset = 0;

    loop {
        match client
            .get_updates(offset, constants::UPDATE_POLL_TIMEOUT_SECS)
            .await
        {
            Ok(updates) => {
                for update in &updates {
                    log_update(update);
                }
                offset = next_offset(offset, &updates);
            }
            Err(e) => {
                error!("Failed to poll updates: {}", e);
                tokio::time::sleep(constants::UPDATE_POLL_RETRY_DELAY).await;
            }
        }
    }
}

fn log_update(update: &Update) {
    let Some(message) = &update.message else {
        return;
    };

    let from = message
        .from
        .as_ref()
        .map(|user| user.to_string())
        .unwrap_or_default();

    info!(
        "Update {}: chat {} from {}: {}",
        update.update_id,
        message.chat.id,
        from,
        message.text.as_deref().unwrap_or("")
    );
}

fn next_offset(current: i64, updates: &[Update]) -> i64 {
    updates
        .iter()
        .map(|u| u.update_id + 1)
        .max()
        .unwrap_or(current)
        .max(current)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn update(id: i64) -> Update {
        Update {
            update_id: id,
            message: None,
        }
    }

    #[test]
    fn test_next_offset_advances_past_latest() {
        assert_eq!(next_offset(0, &[update(5), update(7), update(6)]), 8);
    }

    #[test]
    fn test_next_offset_keeps_current_when_empty() {
        assert_eq!(next_offset(12, &[]), 12);
    }

    #[test]
    fn test_next_offset_never_goes_back() {
        assert_eq!(next_offset(20, &[update(3)]), 20);
    }
}
