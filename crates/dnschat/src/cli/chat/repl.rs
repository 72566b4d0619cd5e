use std::io::Write;

use anyhow::Result;
use dnschat_core::chat::DnsChat;
use rustyline::completion::{Candidate, Completer};
use rustyline::error::ReadlineError;
use rustyline::hint::Hinter;
use rustyline::{CompletionType, Editor, Helper, Highlighter, Validator};
use tracing::debug;

use super::commands::{HELP_KEYWORDS, QUIT_KEYWORDS, ReplInput};
use crate::cli::interrupt::SignalContext;
use crate::cli::ux::{
    ChatMessageType, GOODBYE, PROMPT, ThinkingSpinner, format_banner, format_help, format_reply,
    style_chat_text,
};

// -------------
// REPL completion
// -------------
#[derive(Helper, Validator, Highlighter)]
struct Repl {
    pub keywords: Vec<String>,
}

impl Repl {
    fn new() -> Self {
        let keywords = QUIT_KEYWORDS
            .iter()
            .chain(HELP_KEYWORDS.iter())
            .filter(|k| k.chars().all(char::is_alphabetic))
            .map(|k| k.to_string())
            .collect();
        Self { keywords }
    }

    /// Keywords extending `line`, which must be a single ASCII word.
    fn matching<'a>(&'a self, line: &str) -> impl Iterator<Item = &'a String> {
        let prefix = line.to_ascii_lowercase();
        let is_word = !line.is_empty() && line.is_ascii() && !line.contains(' ');
        self.keywords
            .iter()
            .filter(move |k| is_word && k.starts_with(&prefix))
    }
}

#[derive(Debug)]
struct CompletionCandidate {
    text: String,
    display_string: String,
}

impl CompletionCandidate {
    pub fn new(text: &str) -> Self {
        let display_string = style_chat_text(text, ChatMessageType::Footer).to_string();
        Self {
            text: text.to_owned(),
            display_string,
        }
    }
}

impl Candidate for CompletionCandidate {
    fn display(&self) -> &str {
        &self.display_string
    }

    fn replacement(&self) -> &str {
        &self.text
    }
}

impl Completer for Repl {
    type Candidate = CompletionCandidate;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> Result<(usize, Vec<Self::Candidate>), ReadlineError> {
        if pos < line.len() {
            return Ok((0, Vec::new()));
        }
        let candidates = self
            .matching(line)
            .map(|k| CompletionCandidate::new(k))
            .collect();
        Ok((0, candidates))
    }
}

impl Hinter for Repl {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &rustyline::Context<'_>) -> Option<Self::Hint> {
        if pos < line.len() {
            return None;
        }
        self.matching(line)
            .find(|k| k.len() > line.len())
            .map(|k| k[line.len()..].to_string())
    }
}

/// Handles one line typed at the prompt.
///
/// Returns `Ok(false)` if the session should end.
pub async fn handle_line(
    chat: &DnsChat,
    signals: &SignalContext,
    line: &str,
    out: &mut impl Write,
) -> Result<bool> {
    match ReplInput::parse(line) {
        ReplInput::Empty => {}
        ReplInput::Quit => {
            writeln!(out, "{GOODBYE}")?;
            return Ok(false);
        }
        ReplInput::Help => {
            write!(out, "{}", format_help(chat.server()))?;
        }
        ReplInput::Question(question) => {
            let spinner = ThinkingSpinner::new("Thinking...");
            let outcome = signals.guard(chat.ask(&question)).await;
            spinner.clear();
            let Some(outcome) = outcome else {
                debug!("Interrupted while waiting for an answer");
                writeln!(out, "\n{GOODBYE}")?;
                return Ok(false);
            };

            writeln!(out, "{}", format_reply(&outcome))?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(true)
}

/// Runs the interactive REPL for the chat session.
pub async fn run(chat: &DnsChat, signals: &SignalContext) -> Result<()> {
    let mut out = std::io::stdout();
    write!(out, "{}", format_banner(chat.server()))?;

    let config = rustyline::Config::builder()
        .history_ignore_dups(true)?
        .history_ignore_space(true)
        .completion_type(CompletionType::List)
        .build();

    let mut rl = Editor::with_config(config)?;
    rl.set_helper(Some(Repl::new()));

    let prompt = style_chat_text(PROMPT, ChatMessageType::Prompt).to_string();
    loop {
        match rl.readline(&prompt) {
            Ok(line) => {
                rl.add_history_entry(&line)?;
                if !handle_line(chat, signals, &line, &mut out).await? {
                    return Ok(());
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                writeln!(out, "\n{GOODBYE}")?;
                return Ok(());
            }
            Err(err) => {
                return Err(err.into());
            }
        }
    }
}
