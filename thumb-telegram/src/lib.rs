//! # thumb-telegram
//!
//! Telegram transport layer: adapters, [`thumb_core::Bot`] implementation, minimal config, REPL runner.
//! Handles only Telegram connectivity and handler-chain execution; routing lives in thumb-handlers.

mod adapters;
mod bot_adapter;
mod config;
mod runner;

pub use adapters::{TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::TelegramBotAdapter;
pub use config::TelegramConfig;
pub use runner::{dispatch_message, fetch_bot_username, run_repl};
