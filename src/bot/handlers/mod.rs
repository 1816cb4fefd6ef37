pub mod message;

use std::sync::Arc;

use teloxide::{dispatching::UpdateHandler, prelude::*};

use crate::bot::commands::Command;
use crate::database::connection::DatabaseManager;
use crate::services::reply::DeepLinkBuilder;

/// Collaborators created once at startup and shared by every update.
#[derive(Clone)]
pub struct BotContext {
    pub db: Arc<DatabaseManager>,
    pub links: DeepLinkBuilder,
}

pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

pub struct BotHandler {
    pub ctx: BotContext,
}

impl BotHandler {
    pub fn new(ctx: BotContext) -> Self {
        Self { ctx }
    }

    pub fn schema(&self) -> UpdateHandler<HandlerError> {
        let ctx = self.ctx.clone();

        Update::filter_message()
            .filter_command::<Command>()
            .endpoint(move |bot: Bot, msg: Message, cmd: Command| {
                let ctx = ctx.clone();
                async move {
                    message::command_handler(bot, msg, cmd, ctx)
                        .await
                        .map_err(HandlerError::from)
                }
            })
    }
}
