//! Outcome logging. Runs first in the chain, so its after() sees the final response of every message.

use async_trait::async_trait;
use thumb_core::{Handler, HandlerResponse, Message, Result};
use tracing::{debug, info};
use youtube_thumbnail::THUMBNAIL_HOST;

/// What the bot ended up doing with a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    ThumbnailSent,
    TextReply,
    NoReply,
}

impl Outcome {
    pub(crate) fn of(response: &HandlerResponse) -> Self {
        match response {
            HandlerResponse::Reply(body) if body.starts_with(THUMBNAIL_HOST) => Outcome::ThumbnailSent,
            HandlerResponse::Reply(_) => Outcome::TextReply,
            _ => Outcome::NoReply,
        }
    }
}

/// Logs how each message was answered; never stops the chain.
pub struct LoggingHandler;

#[async_trait]
impl Handler for LoggingHandler {
    async fn before(&self, message: &Message) -> Result<bool> {
        debug!(message_id = %message.id, kind = ?message.kind, "Routing message");
        Ok(true)
    }

    async fn after(&self, message: &Message, response: &HandlerResponse) -> Result<()> {
        match (Outcome::of(response), response) {
            (Outcome::ThumbnailSent, HandlerResponse::Reply(url)) => {
                info!(chat_id = message.chat.id, message_id = %message.id, thumbnail = %url, "Thumbnail sent")
            }
            (Outcome::TextReply, _) => {
                info!(chat_id = message.chat.id, message_id = %message.id, "Text reply sent")
            }
            _ => debug!(chat_id = message.chat.id, message_id = %message.id, kind = ?message.kind, "No reply"),
        }
        Ok(())
    }
}
