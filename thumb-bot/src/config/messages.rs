//! Reply texts from env: BOT_LANGUAGE picks the preset, individual texts can be overridden.

use anyhow::{Context, Result};
use std::env;
use thumb_handlers::{BotMessages, Language};

/// Reads BOT_LANGUAGE (default `en`) and the optional WELCOME_TEMPLATE, PHOTO_CAPTION and
/// INVALID_LINK_MESSAGE overrides. Blank overrides are ignored.
pub fn messages_from_env() -> Result<(Language, BotMessages)> {
    let language = match env::var("BOT_LANGUAGE") {
        Ok(s) if !s.trim().is_empty() => s
            .parse::<Language>()
            .context("BOT_LANGUAGE is invalid")?,
        _ => Language::default(),
    };

    let mut messages = BotMessages::for_language(language);
    if let Some(s) = non_blank_var("WELCOME_TEMPLATE") {
        messages.welcome_template = s;
    }
    if let Some(s) = non_blank_var("PHOTO_CAPTION") {
        messages.photo_caption = s;
    }
    if let Some(s) = non_blank_var("INVALID_LINK_MESSAGE") {
        messages.invalid_link = s;
    }
    Ok((language, messages))
}

fn non_blank_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.trim().is_empty())
}
