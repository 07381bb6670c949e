//! # Thumbnail bot application
//!
//! Loads config from env, wires the handler chain (logging → /start → thumbnail) over the Telegram
//! transport, and runs the REPL.

pub mod cli;
pub mod config;
pub mod runner;

pub use cli::{Cli, Commands};
pub use config::BotConfig;
pub use runner::{build_handler_chain, run_bot};
