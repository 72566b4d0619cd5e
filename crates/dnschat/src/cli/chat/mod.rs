use anyhow::Result;
use dnschat_core::chat::DnsChat;

use crate::cli::interrupt::SignalContext;

mod commands;
mod repl;

/// Executes the chat command, starting an interactive REPL session.
pub async fn execute(chat: &DnsChat, signals: &SignalContext) -> Result<()> {
    repl::run(chat, signals).await
}
