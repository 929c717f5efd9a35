pub mod message;

use std::sync::Arc;

use chrono_tz::Tz;
use teloxide::{prelude::*, types::UpdateKind, utils::command::BotCommands};

use crate::bot::commands::Command;
use crate::services::composer::MessageComposer;

/// Stateless update handler. Holds the shared composer and the bot
/// identity needed to parse commands addressed as `/today@botname`.
pub struct BotHandler {
    composer: Arc<MessageComposer>,
    timezone: Tz,
    bot_username: String,
}

impl BotHandler {
    pub fn new(composer: Arc<MessageComposer>, timezone: Tz, bot_username: String) -> Self {
        Self {
            composer,
            timezone,
            bot_username,
        }
    }

    /// Routes one decoded update. Non-message updates and text that does
    /// not parse as a command for this bot are ignored, not errors.
    pub async fn handle_update(&self, bot: Bot, update: Update) -> ResponseResult<()> {
        let UpdateKind::Message(msg) = update.kind else {
            return Ok(());
        };
        let Some(text) = msg.text() else {
            return Ok(());
        };

        match Command::parse(text, self.bot_username.as_str()) {
            Ok(cmd) => {
                message::command_handler(bot, msg, cmd, &self.composer, self.timezone).await
            }
            Err(_) => Ok(()),
        }
    }
}
