//! BotConfig: TelegramConfig + reply texts + log file. Use load() then validate().

use anyhow::Result;
use thumb_handlers::{BotMessages, Language};
use thumb_telegram::TelegramConfig;

use super::messages::messages_from_env;

pub const DEFAULT_LOG_FILE: &str = "logs/thumb-bot.log";

/// Process-wide configuration, built once at startup and read-only afterwards.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub telegram: TelegramConfig,
    pub language: Language,
    pub messages: BotMessages,
    pub log_file: String,
}

impl BotConfig {
    /// Loads from environment variables. If `token` is provided it overrides BOT_TOKEN.
    /// Call validate() afterwards to fail fast before serving.
    pub fn load(token: Option<String>) -> Result<Self> {
        let telegram = TelegramConfig::load(token)?;
        let (language, messages) = messages_from_env()?;
        let log_file = telegram
            .log_file
            .clone()
            .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());
        Ok(Self {
            telegram,
            language,
            messages,
            log_file,
        })
    }

    /// Checks the token, the optional API URL and that no reply text is empty.
    pub fn validate(&self) -> Result<()> {
        self.telegram.validate()?;
        if self.messages.welcome_template.trim().is_empty() {
            anyhow::bail!("Welcome template is empty");
        }
        if self.messages.invalid_link.trim().is_empty() {
            anyhow::bail!("Invalid-link message is empty");
        }
        Ok(())
    }

    pub fn bot_token(&self) -> &str {
        &self.telegram.bot_token
    }
    pub fn telegram_api_url(&self) -> Option<&str> {
        self.telegram.telegram_api_url.as_deref()
    }
    pub fn log_file(&self) -> &str {
        &self.log_file
    }
}
