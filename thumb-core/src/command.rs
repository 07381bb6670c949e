//! Bot command parsing: `/name`, `/name@bot_username`, `/name trailing text`.

/// A parsed bot command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    /// Command name without the leading slash.
    pub name: String,
    /// Bot the command is addressed to (`/start@my_bot`), if any.
    pub bot_username: Option<String>,
}

impl Command {
    /// Returns true if the command is for `bot_username` or not addressed to any bot.
    /// Comparison is case-insensitive, as Telegram usernames are.
    pub fn is_addressed_to(&self, bot_username: Option<&str>) -> bool {
        match (&self.bot_username, bot_username) {
            (None, _) => true,
            (Some(target), Some(ours)) => target.eq_ignore_ascii_case(ours),
            (Some(_), None) => false,
        }
    }
}

/// Parses `text` as a bot command. Returns `None` unless it starts with `/` followed by a
/// non-empty name made of ASCII letters, digits and underscores. Text after the first
/// whitespace is not part of the command.
pub fn parse_command(text: &str) -> Option<Command> {
    let rest = text.strip_prefix('/')?;
    let head = rest.split(char::is_whitespace).next().unwrap_or(rest);
    let (name, bot_username) = match head.split_once('@') {
        Some((name, bot)) if !bot.is_empty() => (name, Some(bot.to_string())),
        Some(_) => return None,
        None => (head, None),
    };
    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return None;
    }
    Some(Command {
        name: name.to_string(),
        bot_username,
    })
}
