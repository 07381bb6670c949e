//! Wraps teloxide::Bot and implements [`thumb_core::Bot`]. Production code replies via Telegram; tests can substitute another Bot impl.

use async_trait::async_trait;
use teloxide::{
    prelude::*,
    types::{ChatId, InputFile, MessageId, ReplyParameters},
};
use thumb_core::{parse_message_id, Bot as CoreBot, Chat, ChatAction, Message, Result, ThumbError};

/// Thin wrapper around teloxide::Bot that implements thumb-core's Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

fn reply_parameters(message: &Message) -> Result<ReplyParameters> {
    let id = parse_message_id(&message.id)?;
    Ok(ReplyParameters::new(MessageId(id)))
}

fn to_teloxide_action(action: ChatAction) -> teloxide::types::ChatAction {
    match action {
        ChatAction::Typing => teloxide::types::ChatAction::Typing,
        ChatAction::UploadPhoto => teloxide::types::ChatAction::UploadPhoto,
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(|e| ThumbError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(message.chat.id), text.to_string())
            .reply_parameters(reply_parameters(message)?)
            .await
            .map_err(|e| ThumbError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn send_chat_action(&self, chat: &Chat, action: ChatAction) -> Result<()> {
        self.bot
            .send_chat_action(ChatId(chat.id), to_teloxide_action(action))
            .await
            .map_err(|e| ThumbError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn reply_photo(&self, message: &Message, photo_url: &str, caption: &str) -> Result<()> {
        let url = reqwest::Url::parse(photo_url)
            .map_err(|e| ThumbError::Bot(format!("Invalid photo url {}: {}", photo_url, e)))?;
        self.bot
            .send_photo(ChatId(message.chat.id), InputFile::url(url))
            .caption(caption.to_string())
            .reply_parameters(reply_parameters(message)?)
            .await
            .map_err(|e| ThumbError::Bot(e.to_string()))?;
        Ok(())
    }
}
