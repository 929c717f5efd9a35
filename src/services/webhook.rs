use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use reqwest::Url;
use teloxide::{prelude::*, types::Update};
use tower_http::trace::TraceLayer;

use crate::bot::handlers::BotHandler;

/// Status payload served on `/health`.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    pub uptime_seconds: u64,
}

#[derive(Clone)]
pub struct AppState {
    pub bot: Bot,
    pub handler: Arc<BotHandler>,
    pub start_time: DateTime<Utc>,
}

/// HTTP gateway: decodes inbound Telegram updates on `/webhook` and routes
/// them to the bot handler, plus health endpoints.
pub struct WebhookGateway {
    pub router: Router,
}

impl WebhookGateway {
    pub fn new(bot: Bot, handler: Arc<BotHandler>) -> Self {
        let state = AppState {
            bot,
            handler,
            start_time: Utc::now(),
        };

        let router = Router::new()
            .route("/webhook", post(receive_update))
            .route("/health", get(health_check))
            .route("/health/live", get(liveness_check))
            .layer(TraceLayer::new_for_http())
            .with_state(state);

        Self { router }
    }

    /// Registers `{base_url}/webhook` with Telegram. With no base URL
    /// configured the registration is skipped and the process runs without
    /// a reachable webhook.
    pub async fn register(bot: &Bot, base_url: Option<&str>) -> anyhow::Result<()> {
        let Some(base_url) = base_url else {
            tracing::info!("WEBHOOK_URL not set, skipping webhook registration");
            return Ok(());
        };

        let full_url = format!("{}/webhook", base_url.trim_end_matches('/'));
        let url: Url = full_url
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid webhook URL '{}': {}", full_url, e))?;

        bot.set_webhook(url).await?;
        tracing::info!("Webhook registered at {}", full_url);
        Ok(())
    }
}

async fn receive_update(
    State(state): State<AppState>,
    body: String,
) -> (StatusCode, Json<serde_json::Value>) {
    // Decoded by hand so a malformed payload gets an explicit error body
    // instead of the extractor's default rejection.
    let update: Update = match serde_json::from_str(&body) {
        Ok(update) => update,
        Err(e) => {
            tracing::warn!("Discarding undecodable webhook payload: {}", e);
            return (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "error": e.to_string() })),
            );
        }
    };

    match state.handler.handle_update(state.bot.clone(), update).await {
        Ok(()) => (StatusCode::OK, Json(serde_json::json!({ "ok": true }))),
        Err(e) => {
            tracing::error!("Failed to process webhook update: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": e.to_string() })),
            )
        }
    }
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let uptime = Utc::now()
        .signed_duration_since(state.start_time)
        .num_seconds() as u64;

    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: uptime,
    })
}

async fn liveness_check() -> Json<&'static str> {
    // Simple liveness check - if this endpoint responds, the service is alive
    Json("alive")
}
