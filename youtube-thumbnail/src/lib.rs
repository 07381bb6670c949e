//! # youtube-thumbnail
//!
//! Pure helpers behind the bot: find a video id in a chat message ([`extract_video_id`]) and turn
//! it into the URL of its full-resolution thumbnail ([`thumbnail_url`]). No network access.

mod extract;
mod thumbnail;
mod video_id;

pub use extract::extract_video_id;
pub use thumbnail::{thumbnail_url, THUMBNAIL_FILE, THUMBNAIL_HOST};
pub use video_id::{InvalidVideoId, VideoId, VIDEO_ID_LEN};
