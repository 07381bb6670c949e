use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Number of characters in a video id.
pub const VIDEO_ID_LEN: usize = 11;

/// Characters that can never be part of an id: they delimit query strings and escapes.
const EXCLUDED: [char; 4] = ['&', '=', '%', '?'];

#[derive(Error, Debug, PartialEq, Eq)]
pub enum InvalidVideoId {
    #[error("video id must be 11 characters, got {0}")]
    Length(usize),

    #[error("video id contains forbidden character {0:?}")]
    Character(char),
}

/// Opaque 11-character video identifier. Only the shape is checked, never that the video exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VideoId(String);

impl VideoId {
    pub fn parse(s: &str) -> Result<Self, InvalidVideoId> {
        let len = s.chars().count();
        if len != VIDEO_ID_LEN {
            return Err(InvalidVideoId::Length(len));
        }
        if let Some(c) = s.chars().find(|c| EXCLUDED.contains(c)) {
            return Err(InvalidVideoId::Character(c));
        }
        Ok(Self(s.to_string()))
    }

    /// Wraps a capture the extractor pattern already constrained to the id shape.
    pub(crate) fn from_match(s: &str) -> Self {
        debug_assert!(Self::parse(s).is_ok());
        Self(s.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for VideoId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for VideoId {
    type Err = InvalidVideoId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
