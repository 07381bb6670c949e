//! # thumb-handlers
//!
//! Handler implementations routing each inbound message: logging, the `/start` welcome, and the
//! link → thumbnail reply. Reply texts come from [`BotMessages`], one preset per [`Language`].

mod logging;
mod messages;
mod start;
mod thumbnail;

pub use logging::LoggingHandler;
pub use messages::{BotMessages, Language, UnknownLanguage, EXAMPLE_LINK};
pub use start::StartHandler;
pub use thumbnail::ThumbnailHandler;
