use anyhow::{anyhow, Result};
use chrono_tz::Tz;
use std::env;
use teloxide::types::{ChatId, Recipient};

/// Process configuration, loaded once at startup and read-only afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    pub telegram_bot_token: String,
    /// Broadcast destinations. May be empty, in which case the daily
    /// broadcast is a no-op.
    pub chat_ids: Vec<Recipient>,
    pub city: String,
    pub country: String,
    pub timezone: Tz,
    /// Public base URL for webhook registration. When unset the webhook is
    /// not registered with Telegram.
    pub webhook_url: Option<String>,
    pub http_port: u16,
    pub prayer_api_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let token = env::var("TELEGRAM_BOT_TOKEN")
            .map_err(|_| anyhow!("TELEGRAM_BOT_TOKEN must be set"))?;

        if token.trim().is_empty() {
            return Err(anyhow!("TELEGRAM_BOT_TOKEN must be set"));
        }

        let chat_ids = parse_destinations(&env::var("TARGET_CHAT_IDS").unwrap_or_default())?;

        let city = non_empty_or(env::var("CITY").ok(), "Dhaka");
        let country = non_empty_or(env::var("COUNTRY").ok(), "Bangladesh");

        let tz_name = non_empty_or(env::var("TIMEZONE").ok(), "Asia/Dhaka");
        let timezone: Tz = tz_name
            .parse()
            .map_err(|_| anyhow!("Invalid TIMEZONE '{}'", tz_name))?;

        let webhook_url = env::var("WEBHOOK_URL")
            .ok()
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty());

        let port_str = env::var("HTTP_PORT").unwrap_or_else(|_| "3000".to_string());
        let http_port = port_str
            .trim()
            .parse()
            .map_err(|_| anyhow!("Invalid HTTP_PORT"))?;

        let prayer_api_url =
            non_empty_or(env::var("PRAYER_API_URL").ok(), "https://api.aladhan.com");

        Ok(Config {
            telegram_bot_token: token,
            chat_ids,
            city,
            country,
            timezone,
            webhook_url,
            http_port,
            prayer_api_url,
        })
    }
}

/// Parses the comma-separated destination list. Entries are numeric chat
/// ids or @channelusername handles; anything else fails configuration.
fn parse_destinations(raw: &str) -> Result<Vec<Recipient>> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            if let Some(username) = entry.strip_prefix('@') {
                if username.is_empty() {
                    return Err(anyhow!("Invalid TARGET_CHAT_IDS entry '{}'", entry));
                }
                Ok(Recipient::ChannelUsername(entry.to_string()))
            } else {
                entry
                    .parse::<i64>()
                    .map(|id| Recipient::Id(ChatId(id)))
                    .map_err(|_| anyhow!("Invalid TARGET_CHAT_IDS entry '{}'", entry))
            }
        })
        .collect()
}

fn non_empty_or(value: Option<String>, default: &str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => default.to_string(),
    }
}
