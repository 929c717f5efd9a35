use chrono_tz::Tz;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

use crate::bot::commands::Command;
use crate::services::composer::MessageComposer;
use crate::utils::datetime::today_in;
use crate::utils::logging::{log_command_error, log_command_start, log_command_success};

pub async fn command_handler(
    bot: Bot,
    msg: Message,
    cmd: Command,
    composer: &MessageComposer,
    timezone: Tz,
) -> ResponseResult<()> {
    let chat_id = msg.chat.id.0;
    let user_id = msg.from().map(|u| u.id.0 as i64).unwrap_or(0);
    let username = msg
        .from()
        .and_then(|u| u.username.as_ref())
        .map_or("unknown", |v| v);

    match cmd {
        Command::Help => {
            bot.send_message(msg.chat.id, Command::descriptions().to_string())
                .await?;
        }
        Command::Start => {
            bot.send_message(
                msg.chat.id,
                "আসসালামু আলাইকুম!\n\nUse /today to get today's Bangla date, Hijri date and prayer times.\nUse /help to see all commands.",
            )
            .await?;
        }
        Command::Today => {
            log_command_start("today", username, user_id, chat_id);
            let today = today_in(timezone);
            let text = composer.compose(today).await;
            if let Err(e) = bot.send_message(msg.chat.id, text).await {
                log_command_error("today", username, user_id, chat_id, &e.to_string());
                return Err(e);
            }
            log_command_success("today", username, user_id, chat_id);
        }
    }
    Ok(())
}
