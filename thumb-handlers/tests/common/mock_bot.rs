//! Mock implementation of [`thumb_core::Bot`] for handler tests.
//!
//! Records every outbound call in order so tests can assert on what would have been sent,
//! without hitting Telegram. Individual operations can be made to fail.

use async_trait::async_trait;
use std::sync::Mutex;
use thumb_core::{Bot, Chat, ChatAction, Message, Result, ThumbError};

/// One recorded outbound call.
#[derive(Debug, Clone, PartialEq)]
pub enum Sent {
    Text { chat_id: i64, text: String },
    Reply { chat_id: i64, reply_to: String, text: String },
    Action { chat_id: i64, action: ChatAction },
    Photo { chat_id: i64, reply_to: String, url: String, caption: String },
}

#[derive(Default)]
pub struct MockBot {
    sent: Mutex<Vec<Sent>>,
    fail_chat_action: bool,
    fail_photo: bool,
}

impl MockBot {
    pub fn new() -> Self {
        Self::default()
    }

    /// send_chat_action returns an error (the call is still recorded).
    pub fn failing_chat_action() -> Self {
        Self {
            fail_chat_action: true,
            ..Self::default()
        }
    }

    /// reply_photo returns an error (the call is still recorded).
    pub fn failing_photo() -> Self {
        Self {
            fail_photo: true,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    fn record(&self, item: Sent) {
        self.sent.lock().unwrap().push(item);
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.record(Sent::Text {
            chat_id: chat.id,
            text: text.to_string(),
        });
        Ok(())
    }

    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.record(Sent::Reply {
            chat_id: message.chat.id,
            reply_to: message.id.clone(),
            text: text.to_string(),
        });
        Ok(())
    }

    async fn send_chat_action(&self, chat: &Chat, action: ChatAction) -> Result<()> {
        self.record(Sent::Action {
            chat_id: chat.id,
            action,
        });
        if self.fail_chat_action {
            return Err(ThumbError::Bot("chat action rejected".to_string()));
        }
        Ok(())
    }

    async fn reply_photo(&self, message: &Message, photo_url: &str, caption: &str) -> Result<()> {
        self.record(Sent::Photo {
            chat_id: message.chat.id,
            reply_to: message.id.clone(),
            url: photo_url.to_string(),
            caption: caption.to_string(),
        });
        if self.fail_photo {
            return Err(ThumbError::Bot("wrong file identifier/HTTP URL specified".to_string()));
        }
        Ok(())
    }
}
