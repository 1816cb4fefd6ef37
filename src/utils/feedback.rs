use teloxide::prelude::*;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

use crate::services::reply::{LinkButton, ReplyMessage};

/// Generic notice sent when a lookup fails before any reply was built.
pub const FAILURE_TEXT: &str = "⚠️ Something went wrong while looking up your course. Please try again later.";

/// Delivers reply messages to one chat
pub struct CommandFeedback {
    bot: Bot,
    chat_id: ChatId,
}

impl CommandFeedback {
    pub fn new(bot: Bot, chat_id: ChatId) -> Self {
        Self { bot, chat_id }
    }

    /// Sends one reply, attaching its link as a single URL button
    pub async fn deliver(&self, reply: &ReplyMessage) -> ResponseResult<Message> {
        let request = self.bot.send_message(self.chat_id, reply.text.clone());

        match &reply.link {
            Some(link) => request.reply_markup(link_keyboard(link)).await,
            None => request.await,
        }
    }

    /// Sends every reply in order, stopping at the first Telegram error
    pub async fn deliver_all(&self, replies: &[ReplyMessage]) -> ResponseResult<()> {
        for reply in replies {
            self.deliver(reply).await?;
        }
        Ok(())
    }

    pub async fn failure(&self) -> ResponseResult<Message> {
        self.bot.send_message(self.chat_id, FAILURE_TEXT).await
    }
}

pub fn link_keyboard(link: &LinkButton) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::url(
        link.label.clone(),
        link.url.clone(),
    )]])
}
