//! # Bangla Daily Bot
//!
//! A Telegram bot that posts a daily almanac message with the Gregorian
//! date, the traditional Bangla calendar date and season, the Hijri date,
//! and local prayer times.
//!
//! ## Features
//! - /today command that replies with the almanac for the current day
//! - Daily broadcast at midnight (configured time zone) to configured chats
//! - Webhook-based update delivery with health endpoints
//! - Graceful degradation when the prayer-times API is unavailable

/// Bot command definitions and update handling
pub mod bot;
/// Bangla civil calendar conversion
pub mod calendar;
/// Configuration management and environment variables
pub mod config;
/// Services: prayer-times client, message composer, broadcast, webhook gateway
pub mod services;
/// Utility functions for datetime formatting and logging
pub mod utils;
