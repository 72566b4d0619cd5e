mod presenter;
mod progress;

pub use presenter::{
    ChatMessageType, GOODBYE, PROMPT, format_banner, format_help, format_reply,
    format_server_list, style_chat_text,
};
pub use progress::ThinkingSpinner;

/// Prints a formatted error message to stderr.
pub fn present_error(error: anyhow::Error) {
    let error_text = style_chat_text("ERROR:", ChatMessageType::Error);
    eprintln!("\n{error_text} {error:#}");
}
