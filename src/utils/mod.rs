/// Datetime helpers for weekday names and date formatting
pub mod datetime;
/// Structured logging helpers
pub mod logging;
