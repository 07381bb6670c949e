//! Adapters from Telegram (teloxide) types to thumb_core types.

use teloxide::types::MessageEntityKind;
use thumb_core::{Chat, Message, MessageKind, ToCoreMessage, ToCoreUser, User};

/// Wraps a teloxide User for conversion to core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCoreUser for TelegramUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

/// Wraps a teloxide Message for conversion to core [`Message`].
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> ToCoreMessage for TelegramMessageWrapper<'a> {
    fn to_core(&self) -> Message {
        Message {
            id: self.0.id.to_string(),
            user: self
                .0
                .from
                .as_ref()
                .map(|u| TelegramUserWrapper(u).to_core())
                .unwrap_or_else(|| User {
                    id: 0,
                    username: None,
                    first_name: None,
                    last_name: None,
                }),
            chat: Chat {
                id: self.0.chat.id.0,
                chat_type: format!("{:?}", self.0.chat.kind),
            },
            content: self.0.text().unwrap_or("").to_string(),
            kind: self.kind(),
            created_at: chrono::Utc::now(),
        }
    }
}

impl<'a> TelegramMessageWrapper<'a> {
    /// Command when the text opens with a bot_command entity, as Telegram clients mark it.
    fn kind(&self) -> MessageKind {
        if self.0.text().is_none() {
            return MessageKind::Other;
        }
        let starts_with_command = self
            .0
            .entities()
            .and_then(|entities| entities.first())
            .map(|e| e.offset == 0 && matches!(e.kind, MessageEntityKind::BotCommand))
            .unwrap_or(false);
        if starts_with_command {
            MessageKind::Command
        } else {
            MessageKind::Text
        }
    }
}
