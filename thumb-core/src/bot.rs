//! Outbound operations of the bot.
//!
//! [`Bot`] is transport-agnostic; thumb-telegram implements it over teloxide, tests substitute
//! recording mocks.

use crate::error::{Result, ThumbError};
use crate::types::{Chat, Message};
use async_trait::async_trait;

/// Presence signal shown to the chat while the bot prepares a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatAction {
    Typing,
    UploadPhoto,
}

/// Abstraction for sending replies. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;
    /// Sends a text reply to the given message (same chat).
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()>;
    /// Shows a presence indicator ("uploading photo", ...) in the chat.
    async fn send_chat_action(&self, chat: &Chat, action: ChatAction) -> Result<()>;
    /// Replies to the given message with a photo fetched by the transport from `photo_url`.
    async fn reply_photo(&self, message: &Message, photo_url: &str, caption: &str) -> Result<()>;
}

/// Parses a message id string into an i32. Used when replying to a specific message.
pub fn parse_message_id(s: &str) -> Result<i32> {
    s.parse()
        .map_err(|_| ThumbError::Bot(format!("Invalid message_id for reply: {}", s)))
}
