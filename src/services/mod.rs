/// Daily broadcast scheduling and fan-out
pub mod broadcast;
/// Message composition from calendar and prayer-times data
pub mod composer;
/// Prayer-times API client
pub mod prayer;
/// Webhook gateway and health endpoints
pub mod webhook;
