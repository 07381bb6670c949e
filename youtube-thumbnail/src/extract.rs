use lazy_static::lazy_static;
use regex::Regex;

use crate::video_id::VideoId;

lazy_static! {
    // scheme and www are optional; the path selector is optional too, in which case the id
    // is the first 11 permitted characters after the host slash.
    static ref VIDEO_LINK_REGEX: Regex = Regex::new(concat!(
        r"(https?://)?(www\.)?",
        r"(youtube|youtu|youtube-nocookie)\.(com|be)/",
        r"(watch\?v=|embed/|v/|.+\?v=)?([^&=%\?]{11})",
    ))
    .expect("Invalid video link regex pattern");
}

/// Capture group holding the id.
const ID_GROUP: usize = 6;

/// Searches `text` for a YouTube link and returns the id of the first one found.
///
/// Recognized shapes include `youtube.com/watch?v=ID`, `youtu.be/ID`, `youtube.com/embed/ID`,
/// `youtube.com/v/ID`, `youtube-nocookie.com/embed/ID` and `<anything>?v=ID`, with or without
/// scheme and `www.`. `None` is the normal outcome for text without a link.
pub fn extract_video_id(text: &str) -> Option<VideoId> {
    VIDEO_LINK_REGEX
        .captures(text)
        .and_then(|cap| cap.get(ID_GROUP))
        .map(|m| VideoId::from_match(m.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(text: &str) -> Option<String> {
        extract_video_id(text).map(|v| v.as_str().to_string())
    }

    #[test]
    fn test_watch_link() {
        assert_eq!(
            id("https://www.youtube.com/watch?v=dQw4w9WgXcQ").as_deref(),
            Some("dQw4w9WgXcQ")
        );
    }

    #[test]
    fn test_short_link() {
        assert_eq!(id("https://youtu.be/dQw4w9WgXcQ").as_deref(), Some("dQw4w9WgXcQ"));
    }

    #[test]
    fn test_embed_and_v_paths() {
        assert_eq!(id("youtube.com/embed/dQw4w9WgXcQ").as_deref(), Some("dQw4w9WgXcQ"));
        assert_eq!(id("http://youtube.com/v/dQw4w9WgXcQ").as_deref(), Some("dQw4w9WgXcQ"));
        assert_eq!(
            id("https://www.youtube-nocookie.com/embed/dQw4w9WgXcQ?rel=0").as_deref(),
            Some("dQw4w9WgXcQ")
        );
    }

    #[test]
    fn test_watch_link_with_extra_params() {
        assert_eq!(
            id("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42s").as_deref(),
            Some("dQw4w9WgXcQ")
        );
    }

    #[test]
    fn test_arbitrary_prefix_query_form() {
        assert_eq!(
            id("https://www.youtube.com/attribution_link?a=x&u=/watch?v=dQw4w9WgXcQ").as_deref(),
            Some("dQw4w9WgXcQ")
        );
    }

    #[test]
    fn test_bare_domain_without_scheme() {
        assert_eq!(id("youtube.com/watch?v=dQw4w9WgXcQ").as_deref(), Some("dQw4w9WgXcQ"));
        assert_eq!(id("youtu.be/dQw4w9WgXcQ").as_deref(), Some("dQw4w9WgXcQ"));
    }

    #[test]
    fn test_link_inside_text() {
        assert_eq!(
            id("check this out: https://youtu.be/dQw4w9WgXcQ it's great").as_deref(),
            Some("dQw4w9WgXcQ")
        );
    }

    #[test]
    fn test_first_link_wins() {
        assert_eq!(
            id("https://youtu.be/AAAAAAAAAAA and https://youtu.be/BBBBBBBBBBB").as_deref(),
            Some("AAAAAAAAAAA")
        );
    }

    #[test]
    fn test_plain_text_has_no_id() {
        assert_eq!(id("hello, how are you?"), None);
        assert_eq!(id(""), None);
        assert_eq!(id("https://vimeo.com/123456789"), None);
    }

    #[test]
    fn test_too_short_id_does_not_match() {
        assert_eq!(id("https://youtu.be/abc"), None);
    }

    #[test]
    fn test_excluded_character_ends_capture() {
        assert_eq!(id("https://www.youtube.com/watch?v=short&id=1"), None);
        assert_eq!(id("youtu.be/abc%20defghij"), None);
    }

    #[test]
    fn test_host_is_case_sensitive() {
        assert_eq!(id("https://YOUTUBE.COM/watch?v=dQw4w9WgXcQ"), None);
    }

    #[test]
    fn test_unknown_path_takes_first_eleven_characters() {
        assert_eq!(
            id("https://www.youtube.com/shorts/dQw4w9WgXcQ").as_deref(),
            Some("shorts/dQw4")
        );
    }
}
