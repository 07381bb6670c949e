//! REPL runner: converts teloxide messages to core::Message and passes them to HandlerChain.
//! Calls get_me first; a token the API rejects stops startup before any update is polled.

use anyhow::{anyhow, Result};
use handler_chain::HandlerChain;
use std::sync::Arc;
use teloxide::prelude::*;
use thumb_core::{HandlerResponse, ToCoreMessage};
use tracing::{error, info, instrument};

use super::adapters::TelegramMessageWrapper;

/// Asks the Bot API who we are and stores the username used for `/cmd@bot` addressing.
/// Fails when the API rejects the call (bad token, unreachable server).
pub async fn fetch_bot_username(
    bot: &teloxide::Bot,
    bot_username: &tokio::sync::RwLock<Option<String>>,
) -> Result<()> {
    let me = bot
        .get_me()
        .await
        .map_err(|e| anyhow!("getMe failed, check BOT_TOKEN: {}", e))?;
    if let Some(username) = &me.user.username {
        *bot_username.write().await = Some(username.clone());
        info!(username = %username, "Bot username set before repl");
    }
    Ok(())
}

/// Runs one update through the chain. Errors (e.g. a reply that could not be delivered) are
/// logged here and returned; nothing is retried.
pub async fn dispatch_message(
    chain: &HandlerChain,
    msg: &teloxide::types::Message,
) -> thumb_core::Result<HandlerResponse> {
    let core_msg = TelegramMessageWrapper(msg).to_core();
    info!(
        user_id = core_msg.user.id,
        chat_id = core_msg.chat.id,
        kind = ?core_msg.kind,
        message_content = %core_msg.content,
        "Received message"
    );

    let result = chain.handle(&core_msg).await;
    if let Err(e) = &result {
        error!(error = %e, user_id = core_msg.user.id, chat_id = core_msg.chat.id, "Handler chain failed");
    }
    result
}

/// Starts the REPL with the given teloxide Bot, HandlerChain, and bot_username cache.
/// Returns early with an error if getMe fails; otherwise runs until the process is terminated.
/// Each message is handled in its own task.
#[instrument(skip(bot, handler_chain, bot_username))]
pub async fn run_repl(
    bot: teloxide::Bot,
    handler_chain: HandlerChain,
    bot_username: Arc<tokio::sync::RwLock<Option<String>>>,
) -> Result<()> {
    fetch_bot_username(&bot, &bot_username).await?;

    let chain = handler_chain;
    teloxide::repl(bot, move |_bot: Bot, msg: teloxide::types::Message| {
        let chain = chain.clone();

        async move {
            tokio::spawn(async move {
                let _ = dispatch_message(&chain, &msg).await;
            });
            respond(())
        }
    })
    .await;

    Ok(())
}
