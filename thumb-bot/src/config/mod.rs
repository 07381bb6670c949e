//! Bot configuration: Telegram connection + log file + reply texts, loaded from env.

mod bot_config;
mod messages;

#[cfg(test)]
mod tests;

pub use bot_config::{BotConfig, DEFAULT_LOG_FILE};
pub use messages::messages_from_env;
