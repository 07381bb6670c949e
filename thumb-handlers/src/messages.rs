//! User-facing reply texts. Each deployment picks one language; there is no per-user negotiation.

use std::str::FromStr;
use thiserror::Error;

/// Link shown in the rejection message as an example of valid input.
pub const EXAMPLE_LINK: &str = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";

/// Placeholder replaced with the sender's display name in the welcome template.
const NAME_PLACEHOLDER: &str = "{name}";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    Urdu,
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("unknown language {0:?}, expected one of: en, ur")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Language::English),
            "ur" | "urdu" => Ok(Language::Urdu),
            other => Err(UnknownLanguage(other.to_string())),
        }
    }
}

/// Reply texts used by the handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotMessages {
    /// Welcome text; `{name}` is replaced with the sender's display name.
    pub welcome_template: String,
    /// Caption attached to the thumbnail photo.
    pub photo_caption: String,
    /// Reply for text without a recognizable link.
    pub invalid_link: String,
}

impl BotMessages {
    pub fn for_language(language: Language) -> Self {
        match language {
            Language::English => Self {
                welcome_template: "Welcome, {name}!\n\n\
                    I am a YouTube Thumbnail Downloader Bot.\n\n\
                    Send me any YouTube video link, and I will fetch its thumbnail for you."
                    .to_string(),
                photo_caption: "Here is your thumbnail! ✨".to_string(),
                invalid_link: format!(
                    "Sorry, this does not seem to be a valid YouTube link.\n\n\
                     Please send a correct YouTube video link. For example:\n{}",
                    EXAMPLE_LINK
                ),
            },
            Language::Urdu => Self {
                welcome_template: "خوش آمدید, {name}!\n\n\
                    میں ایک یوٹیوب تھمب نیل ڈاؤنلوڈر بوٹ ہوں۔\n\n\
                    مجھے کسی بھی یوٹیوب ویڈیو کا لنک بھیجیں اور میں آپ کو اس کا تھمب نیل بھیج دوں گا۔"
                    .to_string(),
                photo_caption: "یہ رہا آپ کا تھمب نیل! ✨".to_string(),
                invalid_link: format!(
                    "معذرت، یہ ایک درست یوٹیوب لنک نہیں ہے۔\n\n\
                     براہ کرم ایک صحیح یوٹیوب ویڈیو کا لنک بھیجیں۔ مثال کے طور پر:\n{}",
                    EXAMPLE_LINK
                ),
            },
        }
    }

    /// Welcome text addressed to `name`.
    pub fn welcome(&self, name: &str) -> String {
        self.welcome_template.replace(NAME_PLACEHOLDER, name)
    }
}

impl Default for BotMessages {
    fn default() -> Self {
        Self::for_language(Language::default())
    }
}
