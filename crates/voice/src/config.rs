use std::sync::Arc;
use voice_config::BotConfig;
use voice_telegram::TelegramClient;

pub fn create_telegram_client(bot: &BotConfig) -> anyhow::Result<Arc<TelegramClient>> {
    Ok(Arc::new(TelegramClient::new(&bot.token, &bot.api_url)?))
}

pub fn create_webhook_config(
    client: Arc<TelegramClient>,
    bot: &BotConfig,
) -> voice_webhook::WebhookConfig {
    voice_webhook::WebhookConfig {
        gateway: client,
        chat_id: bot.chat_id,
    }
}
