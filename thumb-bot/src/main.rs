//! thumb-bot binary: `run` serves Telegram, `extract` checks a link offline.

use anyhow::Result;
use clap::Parser;
use thumb_bot::config::messages_from_env;
use thumb_bot::{run_bot, BotConfig, Cli, Commands};
use youtube_thumbnail::{extract_video_id, thumbnail_url};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = BotConfig::load(token)?;
            run_bot(config).await
        }
        Commands::Extract { text } => {
            let (_, messages) = messages_from_env()?;
            match extract_video_id(&text) {
                Some(id) => {
                    println!("{}", thumbnail_url(&id));
                    Ok(())
                }
                None => anyhow::bail!("{}", messages.invalid_link),
            }
        }
    }
}
