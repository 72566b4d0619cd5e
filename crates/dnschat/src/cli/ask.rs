use std::io::Write;

use anyhow::Result;
use dnschat_core::chat::DnsChat;
use tracing::debug;

use crate::cli::interrupt::SignalContext;
use crate::cli::ux::GOODBYE;

/// Asks a single question, prints the reply and returns.
pub async fn execute(
    chat: &DnsChat,
    signals: &SignalContext,
    question: &str,
    out: &mut impl Write,
) -> Result<()> {
    writeln!(out, "🔍 Asking: {question}")?;
    writeln!(out)?;
    out.flush()?;

    let Some(outcome) = signals.guard(chat.ask(question)).await else {
        debug!("Interrupted one-shot query");
        writeln!(out, "\n{GOODBYE}")?;
        return Ok(());
    };

    writeln!(out, "🤖 {outcome}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{MockReply, mock_chat};

    #[tokio::test]
    async fn test_execute_prints_question_and_reply() -> Result<()> {
        let (chat, seen) = mock_chat(MockReply::Stdout("\"Why did the\"\n\"chicken...\"".into()));
        let mut out = Vec::new();

        execute(&chat, &SignalContext::new(), "tell me a joke", &mut out).await?;

        assert_eq!(
            String::from_utf8(out)?,
            "🔍 Asking: tell me a joke\n\n🤖 Why did the chicken...\n"
        );
        assert_eq!(*seen.lock().unwrap(), vec!["tell me a joke".to_string()]);
        Ok(())
    }

    #[tokio::test]
    async fn test_execute_failure_is_not_an_error() -> Result<()> {
        let (chat, seen) = mock_chat(MockReply::Stdout(String::new()));
        let mut out = Vec::new();

        execute(&chat, &SignalContext::new(), "quit", &mut out).await?;

        // Keywords are questions here; exactly one query is made.
        assert!(String::from_utf8(out)?.ends_with("🤖 ❌ No response from DNS server\n"));
        assert_eq!(seen.lock().unwrap().len(), 1);
        Ok(())
    }
}
