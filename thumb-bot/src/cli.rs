//! CLI parser.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "thumb-bot")]
#[command(about = "Telegram bot that replies to YouTube links with their thumbnail", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the Telegram bot (config from env; token can override BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Print the thumbnail URL for a link without contacting Telegram.
    Extract {
        /// Text containing a YouTube link.
        text: String,
    },
}
