//! # Bangla Daily Bot Main Entry Point
//!
//! This is the main entry point for the Bangla Daily Bot application.
//! It initializes logging, loads configuration, starts the daily broadcast
//! service, registers the Telegram webhook, and serves the webhook gateway.

use anyhow::{anyhow, Result};
use teloxide::prelude::*;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod bot;
mod calendar;
mod config;
mod services;
mod utils;

use crate::bot::handlers::BotHandler;
use crate::config::Config;
use crate::services::broadcast::BroadcastService;
use crate::services::composer::MessageComposer;
use crate::services::prayer::PrayerTimesClient;
use crate::services::webhook::WebhookGateway;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bangla_daily_bot=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    info!("Starting Bangla Daily Bot v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration loaded - City: {}, Timezone: {}, Destinations: {}, HTTP Port: {}",
        config.city,
        config.timezone,
        config.chat_ids.len(),
        config.http_port
    );

    // Initialize bot
    info!("Initializing Telegram bot...");
    let bot = Bot::new(&config.telegram_bot_token);
    let me = bot
        .get_me()
        .await
        .map_err(|e| anyhow!("Failed to fetch bot identity: {}", e))?;
    info!("Telegram bot initialized as @{}", me.username());

    let prayer_client =
        PrayerTimesClient::new(&config.prayer_api_url, &config.city, &config.country)?;
    let composer = Arc::new(MessageComposer::new(prayer_client, config.city.clone()));
    let handler = Arc::new(BotHandler::new(
        composer.clone(),
        config.timezone,
        me.username().to_string(),
    ));

    // Initialize and start the daily broadcast service
    info!("Initializing broadcast service...");
    let mut broadcast_service = match BroadcastService::new(
        bot.clone(),
        composer.clone(),
        config.chat_ids.clone(),
        config.timezone,
    )
    .await
    {
        Ok(service) => {
            info!("Broadcast service initialized successfully");
            service
        }
        Err(e) => {
            tracing::error!("Failed to create broadcast service: {}", e);
            return Err(anyhow!("Failed to create broadcast service: {}", e));
        }
    };

    if let Err(e) = broadcast_service.start().await {
        tracing::error!("Failed to start broadcast service: {}", e);
    } else {
        info!("Broadcast service started successfully");
    }

    // Register the webhook with Telegram, then serve the gateway
    WebhookGateway::register(&bot, config.webhook_url.as_deref()).await?;

    let gateway = WebhookGateway::new(bot, handler);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.http_port))
        .await
        .map_err(|e| anyhow!("Failed to bind to port {}: {}", config.http_port, e))?;

    info!("Webhook gateway starting on port {}", config.http_port);

    let server_task = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, gateway.router).await {
            tracing::error!("Webhook server error: {}", e);
        }
    });

    tokio::select! {
        result = server_task => {
            if let Err(e) = result {
                tracing::error!("Server task error: {}", e);
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
    }

    // Stop broadcast service on shutdown
    if let Err(e) = broadcast_service.stop().await {
        tracing::warn!("Error stopping broadcast service: {}", e);
    }

    info!("Application stopped");
    Ok(())
}
