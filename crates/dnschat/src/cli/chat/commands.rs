//! Keywords recognized at the chat prompt.

pub const QUIT_KEYWORDS: [&str; 3] = ["quit", "exit", "bye"];
pub const HELP_KEYWORDS: [&str; 2] = ["help", "?"];

/// A line typed at the prompt, classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplInput {
    Empty,
    Quit,
    Help,
    Question(String),
}

impl ReplInput {
    /// Keywords match case-insensitively after trimming.
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return ReplInput::Empty;
        }

        let lowered = trimmed.to_lowercase();
        if QUIT_KEYWORDS.contains(&lowered.as_str()) {
            ReplInput::Quit
        } else if HELP_KEYWORDS.contains(&lowered.as_str()) {
            ReplInput::Help
        } else {
            ReplInput::Question(trimmed.to_string())
        }
    }
}
