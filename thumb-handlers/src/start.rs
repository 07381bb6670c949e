//! `/start` command: greets the sender by name.

use async_trait::async_trait;
use std::sync::Arc;
use thumb_core::{parse_command, Bot, Handler, HandlerResponse, Message, MessageKind, Result};
use tracing::{debug, info, instrument};

use crate::messages::BotMessages;

const START_COMMAND: &str = "start";

/// Replies to `/start` (or `/start@<this bot>`) with the welcome text; ignores everything else.
#[derive(Clone)]
pub struct StartHandler {
    messages: Arc<BotMessages>,
    bot: Arc<dyn Bot>,
    /// Filled in by the runner from getMe; `None` until known.
    bot_username: Arc<tokio::sync::RwLock<Option<String>>>,
}

impl StartHandler {
    pub fn new(
        messages: Arc<BotMessages>,
        bot: Arc<dyn Bot>,
        bot_username: Arc<tokio::sync::RwLock<Option<String>>>,
    ) -> Self {
        Self {
            messages,
            bot,
            bot_username,
        }
    }
}

#[async_trait]
impl Handler for StartHandler {
    #[instrument(skip(self, message), fields(chat_id = message.chat.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if message.kind != MessageKind::Command {
            return Ok(HandlerResponse::Ignore);
        }
        let Some(command) = parse_command(&message.content) else {
            return Ok(HandlerResponse::Ignore);
        };
        if !command.name.eq_ignore_ascii_case(START_COMMAND) {
            debug!(command = %command.name, "Unhandled command");
            return Ok(HandlerResponse::Ignore);
        }
        let bot_username = self.bot_username.read().await.clone();
        if !command.is_addressed_to(bot_username.as_deref()) {
            debug!(target_bot = ?command.bot_username, "Command addressed to another bot");
            return Ok(HandlerResponse::Ignore);
        }

        let welcome = self.messages.welcome(message.user.display_name());
        self.bot.reply_to(message, &welcome).await?;
        info!(user_id = message.user.id, "Welcome sent");

        Ok(HandlerResponse::Reply(welcome))
    }
}
