mod config;
mod signal;

use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Notify;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use voice_config::constants;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    let voice_config = voice_config::load_config().await?;
    tracing::info!("Loaded configuration: {:?}", voice_config);

    let client = config::create_telegram_client(&voice_config.bot)?;
    let me = client.get_me().await?;
    tracing::info!("Authorized on account {}", me);

    if voice_config.bot.chat_id == 0 {
        tracing::warn!("BOT_CHAT_ID is not set, webhook events will not be delivered");
    }

    // Spawn update poller
    let poller_handle = voice_config
        .bot
        .poll_updates
        .then(|| tokio::spawn(voice_telegram::run_update_poller(client.clone())));

    let webhook_config = config::create_webhook_config(client.clone(), &voice_config.bot);
    let app = voice_api::router().merge(voice_webhook::router(webhook_config));

    let addr = voice_config.server.bind_addr();
    tracing::info!("Starting webhook server on {addr}");
    let listener = TcpListener::bind(&addr).await?;

    let shutdown = Arc::new(Notify::new());
    let server_shutdown = shutdown.clone();
    let mut server_handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app)
            .with_graceful_shutdown(async move { server_shutdown.notified().await })
            .await
        {
            tracing::error!("Webhook server failed: {}", e);
        }
    });

    tokio::select! {
        _ = signal::shutdown_signal() => {
            shutdown.notify_one();
        }
        _ = &mut server_handle => {
            tracing::warn!("Webhook server exited unexpectedly");
        }
    }

    if let Some(handle) = poller_handle {
        handle.abort();
    }

    if !server_handle.is_finished() {
        match tokio::time::timeout(constants::SHUTDOWN_TIMEOUT, server_handle).await {
            Ok(_) => tracing::info!("Webhook server shut down gracefully"),
            Err(_) => tracing::warn!("Shutdown timeout reached, forcing exit"),
        }
    }

    tracing::info!("GitLab Voice shutdown complete");

    Ok(())
}
