use std::future::Future;
use std::sync::Arc;

use chrono_tz::Tz;
use teloxide::{prelude::*, types::Recipient};
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::services::composer::MessageComposer;
use crate::utils::datetime::today_in;
use crate::utils::logging::log_system_event;

/// Daily broadcast: composes one almanac message at midnight in the
/// configured time zone and fans it out to every configured destination.
pub struct BroadcastService {
    bot: Bot,
    composer: Arc<MessageComposer>,
    chat_ids: Vec<Recipient>,
    timezone: Tz,
    scheduler: JobScheduler,
}

impl BroadcastService {
    pub async fn new(
        bot: Bot,
        composer: Arc<MessageComposer>,
        chat_ids: Vec<Recipient>,
        timezone: Tz,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let scheduler = JobScheduler::new().await?;

        Ok(Self {
            bot,
            composer,
            chat_ids,
            timezone,
            scheduler,
        })
    }

    pub async fn start(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let bot = self.bot.clone();
        let composer = self.composer.clone();
        let chat_ids = self.chat_ids.clone();
        let timezone = self.timezone;

        // Fire daily at 00:00 in the configured time zone
        let broadcast_job = Job::new_async_tz("0 0 0 * * *", timezone, move |_uuid, _l| {
            let bot = bot.clone();
            let composer = composer.clone();
            let chat_ids = chat_ids.clone();
            Box::pin(async move {
                send_daily_broadcast(&bot, &composer, &chat_ids, timezone).await;
            })
        })?;

        self.scheduler.add(broadcast_job).await?;
        self.scheduler.start().await?;

        tracing::info!(
            "Broadcast service started - sending daily at 00:00 {} to {} destination(s)",
            self.timezone,
            self.chat_ids.len()
        );
        Ok(())
    }

    pub async fn stop(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.scheduler.shutdown().await?;
        Ok(())
    }

    // Manual trigger for testing
    pub async fn broadcast_now(&self) {
        send_daily_broadcast(&self.bot, &self.composer, &self.chat_ids, self.timezone).await;
    }
}

async fn send_daily_broadcast(
    bot: &Bot,
    composer: &MessageComposer,
    chat_ids: &[Recipient],
    timezone: Tz,
) {
    if chat_ids.is_empty() {
        tracing::info!("No broadcast destinations configured, skipping daily broadcast");
        return;
    }

    let today = today_in(timezone);
    let text = composer.compose(today).await;

    let delivered = fan_out(chat_ids, |chat| {
        let bot = bot.clone();
        let text = text.clone();
        async move { bot.send_message(chat, text).await.map(|_| ()) }
    })
    .await;

    log_system_event(
        "daily broadcast complete",
        Some(&format!(
            "{}/{} destinations reached",
            delivered,
            chat_ids.len()
        )),
    );
}

/// Sequential fan-out. A failed destination is logged and skipped so the
/// remaining destinations still receive the message; returns the number of
/// successful deliveries.
async fn fan_out<F, Fut, E>(destinations: &[Recipient], send: F) -> usize
where
    F: Fn(Recipient) -> Fut,
    Fut: Future<Output = Result<(), E>>,
    E: std::fmt::Display,
{
    let mut delivered = 0;
    for chat in destinations {
        match send(chat.clone()).await {
            Ok(()) => delivered += 1,
            Err(e) => tracing::error!("Failed to send broadcast to {:?}: {}", chat, e),
        }
    }
    delivered
}
