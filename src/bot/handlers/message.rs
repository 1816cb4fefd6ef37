use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

use super::BotContext;
use crate::bot::commands::Command;

pub async fn command_handler(
    bot: Bot,
    msg: Message,
    cmd: Command,
    ctx: BotContext,
) -> ResponseResult<()> {
    match cmd {
        Command::C => {
            crate::bot::commands::course_link::handle_course_link(bot, msg, &ctx).await?;
        }
        Command::Help => {
            bot.send_message(msg.chat.id, Command::descriptions().to_string()).await?;
        }
    }
    Ok(())
}
