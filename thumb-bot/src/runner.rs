use anyhow::Result;
use handler_chain::HandlerChain;
use std::sync::Arc;
use thumb_core::{init_tracing, Bot};
use thumb_handlers::{BotMessages, LoggingHandler, StartHandler, ThumbnailHandler};
use thumb_telegram::{run_repl, TelegramBotAdapter};
use tracing::{info, instrument};

use super::config::BotConfig;

/// Handler order: LoggingHandler → StartHandler → ThumbnailHandler.
/// `bot_username` is shared with the runner, which fills it from getMe.
pub fn build_handler_chain(
    messages: Arc<BotMessages>,
    bot: Arc<dyn Bot>,
    bot_username: Arc<tokio::sync::RwLock<Option<String>>>,
) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(StartHandler::new(
            messages.clone(),
            bot.clone(),
            bot_username,
        )))
        .add_handler(Arc::new(ThumbnailHandler::new(messages, bot)))
}

/// Main entry: validate config, init logging, build the chain, then run the REPL until terminated.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(config.log_file())?;

    info!(
        language = ?config.language,
        telegram_api_url = ?config.telegram_api_url(),
        "Initializing bot"
    );

    let teloxide_bot = config.telegram.build_bot()?;
    let bot: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let bot_username = Arc::new(tokio::sync::RwLock::new(None));
    let handler_chain =
        build_handler_chain(Arc::new(config.messages), bot, bot_username.clone());

    info!("Bot started successfully");

    run_repl(teloxide_bot, handler_chain, bot_username).await
}
