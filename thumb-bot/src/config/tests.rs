//! Config tests. Env-mutating, hence serial.

use crate::config::{BotConfig, DEFAULT_LOG_FILE};
use serial_test::serial;
use std::env;
use thumb_handlers::{BotMessages, Language};

const VARS: &[&str] = &[
    "BOT_TOKEN",
    "TELEGRAM_API_URL",
    "TELOXIDE_API_URL",
    "LOG_FILE",
    "BOT_LANGUAGE",
    "WELCOME_TEMPLATE",
    "PHOTO_CAPTION",
    "INVALID_LINK_MESSAGE",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_load_config_with_defaults() {
    clear_env();
    env::set_var("BOT_TOKEN", "test_token");

    let config = BotConfig::load(None).unwrap();

    assert_eq!(config.bot_token(), "test_token");
    assert!(config.telegram_api_url().is_none());
    assert_eq!(config.log_file(), DEFAULT_LOG_FILE);
    assert_eq!(config.language, Language::English);
    assert_eq!(config.messages, BotMessages::for_language(Language::English));
    assert!(config.validate().is_ok());

    clear_env();
}

#[test]
#[serial]
fn test_load_config_with_custom_values() {
    clear_env();
    env::set_var("BOT_TOKEN", "custom_token");
    env::set_var("TELEGRAM_API_URL", "http://localhost:8081");
    env::set_var("LOG_FILE", "/tmp/thumb.log");
    env::set_var("BOT_LANGUAGE", "ur");
    env::set_var("PHOTO_CAPTION", "Thumbnail");

    let config = BotConfig::load(None).unwrap();

    assert_eq!(config.bot_token(), "custom_token");
    assert_eq!(config.telegram_api_url(), Some("http://localhost:8081"));
    assert_eq!(config.log_file(), "/tmp/thumb.log");
    assert_eq!(config.language, Language::Urdu);
    assert_eq!(config.messages.photo_caption, "Thumbnail");
    assert_eq!(
        config.messages.welcome_template,
        BotMessages::for_language(Language::Urdu).welcome_template
    );
    assert!(config.validate().is_ok());

    clear_env();
}

#[test]
#[serial]
fn test_load_config_with_override_token() {
    clear_env();
    env::set_var("BOT_TOKEN", "env_token");

    let config = BotConfig::load(Some("override_token".to_string())).unwrap();

    assert_eq!(config.bot_token(), "override_token");
    clear_env();
}

#[test]
#[serial]
fn test_missing_token_is_fatal() {
    clear_env();
    assert!(BotConfig::load(None).is_err());
}

#[test]
#[serial]
fn test_unknown_language_is_fatal() {
    clear_env();
    env::set_var("BOT_TOKEN", "test_token");
    env::set_var("BOT_LANGUAGE", "klingon");

    assert!(BotConfig::load(None).is_err());
    clear_env();
}

#[test]
#[serial]
fn test_blank_overrides_are_ignored() {
    clear_env();
    env::set_var("BOT_TOKEN", "test_token");
    env::set_var("WELCOME_TEMPLATE", "   ");
    env::set_var("BOT_LANGUAGE", "");

    let config = BotConfig::load(None).unwrap();

    assert_eq!(config.messages, BotMessages::default());
    clear_env();
}

#[test]
#[serial]
fn test_validate_rejects_invalid_api_url() {
    clear_env();
    env::set_var("BOT_TOKEN", "test_token");
    env::set_var("TELEGRAM_API_URL", "not-a-valid-url");

    let config = BotConfig::load(None).unwrap();
    assert!(config.validate().is_err());
    clear_env();
}

#[test]
#[serial]
fn test_validate_rejects_empty_token() {
    clear_env();

    let config = BotConfig::load(Some(String::new())).unwrap();
    assert!(config.validate().is_err());
}
