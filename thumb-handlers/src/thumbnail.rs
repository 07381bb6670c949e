//! Plain text: reply with the thumbnail of the first YouTube link found, or with guidance.

use async_trait::async_trait;
use std::sync::Arc;
use thumb_core::{Bot, ChatAction, Handler, HandlerResponse, Message, MessageKind, Result};
use tracing::{info, instrument, warn};
use youtube_thumbnail::{extract_video_id, thumbnail_url};

use crate::messages::BotMessages;

/// Handles [`MessageKind::Text`] only; commands and non-text messages are ignored.
#[derive(Clone)]
pub struct ThumbnailHandler {
    messages: Arc<BotMessages>,
    bot: Arc<dyn Bot>,
}

impl ThumbnailHandler {
    pub fn new(messages: Arc<BotMessages>, bot: Arc<dyn Bot>) -> Self {
        Self { messages, bot }
    }

    async fn send_thumbnail(&self, message: &Message, url: &str) -> Result<()> {
        // Best effort: a failed presence signal never blocks the photo.
        if let Err(e) = self
            .bot
            .send_chat_action(&message.chat, ChatAction::UploadPhoto)
            .await
        {
            warn!(error = %e, chat_id = message.chat.id, "Failed to send chat action");
        }
        self.bot
            .reply_photo(message, url, &self.messages.photo_caption)
            .await
    }
}

#[async_trait]
impl Handler for ThumbnailHandler {
    #[instrument(skip(self, message), fields(chat_id = message.chat.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if message.kind != MessageKind::Text {
            return Ok(HandlerResponse::Ignore);
        }

        match extract_video_id(&message.content) {
            Some(video_id) => {
                let url = thumbnail_url(&video_id);
                info!(video_id = %video_id, thumbnail_url = %url, "Found video id, sending thumbnail");
                self.send_thumbnail(message, &url).await?;
                Ok(HandlerResponse::Reply(url))
            }
            None => {
                warn!(message_content = %message.content, "Invalid link or text received");
                self.bot.reply_to(message, &self.messages.invalid_link).await?;
                Ok(HandlerResponse::Reply(self.messages.invalid_link.clone()))
            }
        }
    }
}
