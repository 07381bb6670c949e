//! # thumb-core
//!
//! Core types and traits for the thumbnail bot: [`Bot`], [`Handler`], message and user types,
//! command parsing and tracing initialization. Transport-agnostic; used by thumb-telegram,
//! handler-chain and thumb-handlers.

pub mod bot;
pub mod command;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::{parse_message_id, Bot, ChatAction};
pub use command::{parse_command, Command};
pub use error::{Result, ThumbError};
pub use logger::init_tracing;
pub use types::{
    Chat, Handler, HandlerResponse, Message, MessageKind, ToCoreMessage, ToCoreUser, User,
};
