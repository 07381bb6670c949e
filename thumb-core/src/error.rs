use thiserror::Error;

#[derive(Error, Debug)]
pub enum ThumbError {
    /// A Bot API call failed or its arguments could not be built.
    #[error("Bot error: {0}")]
    Bot(String),
}

pub type Result<T> = std::result::Result<T, ThumbError>;
