use teloxide::prelude::*;

use crate::bot::handlers::BotContext;
use crate::services::course_access::course_link_replies;
use crate::utils::feedback::CommandFeedback;
use crate::utils::logging::{log_command_error, log_command_start, log_command_success};

/// `/c`: refresh this chat's package references and reply with course links.
///
/// Store failures abort before anything is sent except a generic notice, so a
/// student never receives a partial set of links.
pub async fn handle_course_link(
    bot: Bot,
    msg: Message,
    ctx: &BotContext,
) -> ResponseResult<()> {
    let chat_id = msg.chat.id.0.to_string();
    let feedback = CommandFeedback::new(bot, msg.chat.id);

    let (user, user_id) = msg
        .from()
        .map(|u| (u.username.clone().unwrap_or_else(|| "unknown".to_string()), u.id.0))
        .unwrap_or_else(|| ("unknown".to_string(), 0));
    log_command_start("c", &user, user_id, &chat_id);

    let replies = match course_link_replies(ctx.db.as_ref(), &ctx.links, &chat_id).await {
        Ok(replies) => replies,
        Err(e) => {
            log_command_error("c", &chat_id, &format!("{e:#}"));
            feedback.failure().await?;
            return Ok(());
        }
    };

    feedback.deliver_all(&replies).await?;

    let denied = replies.iter().all(|r| r.is_denial());
    let details = if denied {
        "denied".to_string()
    } else {
        format!("{} course links sent", replies.len())
    };
    log_command_success("c", &chat_id, Some(&details));

    Ok(())
}
