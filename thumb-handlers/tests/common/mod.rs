#![allow(dead_code)]

pub mod mock_bot;

use chrono::Utc;
use thumb_core::{Chat, Message, MessageKind, User};

/// Builds an incoming message from "Alex" in private chat 456.
pub fn make_message(content: &str, kind: MessageKind) -> Message {
    Message {
        id: "7".to_string(),
        user: User {
            id: 123,
            username: Some("alex42".to_string()),
            first_name: Some("Alex".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: 456,
            chat_type: "private".to_string(),
        },
        content: content.to_string(),
        kind,
        created_at: Utc::now(),
    }
}
