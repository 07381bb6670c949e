use crate::video_id::VideoId;

/// Image host serving video thumbnails.
pub const THUMBNAIL_HOST: &str = "https://img.youtube.com/vi";

/// Full-resolution (1280x720) variant. Not every video has one; the link is not checked.
pub const THUMBNAIL_FILE: &str = "maxresdefault.jpg";

/// URL of the full-resolution thumbnail for `id`. Depends on nothing but the id.
pub fn thumbnail_url(id: &VideoId) -> String {
    format!("{}/{}/{}", THUMBNAIL_HOST, id, THUMBNAIL_FILE)
}
