#![allow(clippy::unwrap_used)]

use bangla_daily_bot::config::Config;
use std::env;
use std::sync::Mutex;
use teloxide::types::{ChatId, Recipient};

// Mutex to ensure config tests run sequentially to avoid environment variable conflicts
static CONFIG_TEST_MUTEX: Mutex<()> = Mutex::new(());

fn clear_env() {
    for key in [
        "TELEGRAM_BOT_TOKEN",
        "TARGET_CHAT_IDS",
        "CITY",
        "COUNTRY",
        "TIMEZONE",
        "WEBHOOK_URL",
        "HTTP_PORT",
        "PRAYER_API_URL",
    ] {
        env::remove_var(key);
    }
}

#[test]
fn test_config_from_env_with_all_vars() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "test_token_123");
    env::set_var("TARGET_CHAT_IDS", "123456, -100987654321, @dailychannel");
    env::set_var("CITY", "Chattogram");
    env::set_var("COUNTRY", "Bangladesh");
    env::set_var("TIMEZONE", "Asia/Dhaka");
    env::set_var("WEBHOOK_URL", "https://bot.example.com/");
    env::set_var("HTTP_PORT", "8080");
    env::set_var("PRAYER_API_URL", "https://aladhan.example.com");

    let config = Config::from_env().unwrap();

    assert_eq!(config.telegram_bot_token, "test_token_123");
    assert_eq!(
        config.chat_ids,
        vec![
            Recipient::Id(ChatId(123456)),
            Recipient::Id(ChatId(-100987654321)),
            Recipient::ChannelUsername("@dailychannel".to_string()),
        ]
    );
    assert_eq!(config.city, "Chattogram");
    assert_eq!(config.country, "Bangladesh");
    assert_eq!(config.timezone, chrono_tz::Asia::Dhaka);
    assert_eq!(config.webhook_url.as_deref(), Some("https://bot.example.com"));
    assert_eq!(config.http_port, 8080);
    assert_eq!(config.prayer_api_url, "https://aladhan.example.com");

    clear_env();
}

#[test]
fn test_config_from_env_with_defaults() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "required_token");

    let config = Config::from_env().unwrap();

    assert_eq!(config.telegram_bot_token, "required_token");
    assert!(config.chat_ids.is_empty());
    assert_eq!(config.city, "Dhaka");
    assert_eq!(config.country, "Bangladesh");
    assert_eq!(config.timezone, chrono_tz::Asia::Dhaka);
    assert!(config.webhook_url.is_none());
    assert_eq!(config.http_port, 3000);
    assert_eq!(config.prayer_api_url, "https://api.aladhan.com");

    clear_env();
}

#[test]
fn test_config_missing_required_token() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    let result = Config::from_env();
    assert!(result.is_err());

    let error_msg = result.unwrap_err().to_string();
    assert!(error_msg.contains("TELEGRAM_BOT_TOKEN must be set"));
}

#[test]
fn test_config_empty_token() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "   ");

    let result = Config::from_env();
    assert!(result.is_err());

    clear_env();
}

#[test]
fn test_config_invalid_chat_id_is_fatal() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "test_token");
    env::set_var("TARGET_CHAT_IDS", "123456, not-a-chat");

    let result = Config::from_env();
    assert!(result.is_err());

    let error_msg = result.unwrap_err().to_string();
    assert!(error_msg.contains("TARGET_CHAT_IDS"));
    assert!(error_msg.contains("not-a-chat"));

    clear_env();
}

#[test]
fn test_config_blank_destination_entries_are_skipped() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "test_token");
    env::set_var("TARGET_CHAT_IDS", " 123 , , 456 ,");

    let config = Config::from_env().unwrap();
    assert_eq!(
        config.chat_ids,
        vec![Recipient::Id(ChatId(123)), Recipient::Id(ChatId(456))]
    );

    clear_env();
}

#[test]
fn test_config_invalid_timezone_is_fatal() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "test_token");
    env::set_var("TIMEZONE", "Mars/Olympus");

    let result = Config::from_env();
    assert!(result.is_err());

    let error_msg = result.unwrap_err().to_string();
    assert!(error_msg.contains("TIMEZONE"));

    clear_env();
}

#[test]
fn test_config_invalid_port() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "test_token");
    env::set_var("HTTP_PORT", "invalid_port");

    let result = Config::from_env();
    assert!(result.is_err());

    let error_msg = result.unwrap_err().to_string();
    assert!(error_msg.contains("Invalid HTTP_PORT"));

    clear_env();
}

#[test]
fn test_config_webhook_url_trailing_slash_is_trimmed() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "test_token");
    env::set_var("WEBHOOK_URL", "https://bot.example.com///");

    let config = Config::from_env().unwrap();
    assert_eq!(config.webhook_url.as_deref(), Some("https://bot.example.com"));

    clear_env();
}
