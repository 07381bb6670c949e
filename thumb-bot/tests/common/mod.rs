//! Recording [`thumb_core::Bot`] for end-to-end routing tests.

use async_trait::async_trait;
use std::sync::Mutex;
use thumb_core::{Bot, Chat, ChatAction, Message, Result};

/// Outbound call, flattened to what the user would see.
#[derive(Debug, Clone, PartialEq)]
pub enum Outbound {
    Text(String),
    Action(ChatAction),
    Photo { url: String, caption: String },
}

#[derive(Default)]
pub struct RecordingBot {
    calls: Mutex<Vec<Outbound>>,
}

impl RecordingBot {
    pub fn calls(&self) -> Vec<Outbound> {
        self.calls.lock().unwrap().clone()
    }

    fn push(&self, call: Outbound) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl Bot for RecordingBot {
    async fn send_message(&self, _chat: &Chat, text: &str) -> Result<()> {
        self.push(Outbound::Text(text.to_string()));
        Ok(())
    }

    async fn reply_to(&self, _message: &Message, text: &str) -> Result<()> {
        self.push(Outbound::Text(text.to_string()));
        Ok(())
    }

    async fn send_chat_action(&self, _chat: &Chat, action: ChatAction) -> Result<()> {
        self.push(Outbound::Action(action));
        Ok(())
    }

    async fn reply_photo(&self, _message: &Message, photo_url: &str, caption: &str) -> Result<()> {
        self.push(Outbound::Photo {
            url: photo_url.to_string(),
            caption: caption.to_string(),
        });
        Ok(())
    }
}
