use std::fmt;

use tracing::{debug, instrument};

use crate::query::{TxtQuery, parse_txt_answer};
use crate::resolver::{Resolver, ResolverError, ResolverOutput};
use crate::server::ServerConfig;

pub const NO_RESPONSE_MESSAGE: &str = "❌ No response from DNS server";
pub const TIMED_OUT_MESSAGE: &str = "⏰ Query timed out";

/// Result of asking one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    /// The joined TXT strings.
    Answer(String),
    /// Non-zero exit or nothing printed.
    NoResponse,
    TimedOut,
    /// Anything else that went wrong, with its description.
    Failed(String),
}

impl QueryOutcome {
    pub fn from_lookup(result: Result<ResolverOutput, ResolverError>) -> Self {
        match result {
            Ok(output) if output.success => match parse_txt_answer(&output.stdout) {
                Some(answer) => QueryOutcome::Answer(answer),
                None => QueryOutcome::NoResponse,
            },
            Ok(_) => QueryOutcome::NoResponse,
            Err(ResolverError::Timeout(_)) => QueryOutcome::TimedOut,
            Err(e) => QueryOutcome::Failed(e.to_string()),
        }
    }

    pub fn is_answer(&self) -> bool {
        matches!(self, QueryOutcome::Answer(_))
    }
}

impl fmt::Display for QueryOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryOutcome::Answer(text) => f.write_str(text),
            QueryOutcome::NoResponse => f.write_str(NO_RESPONSE_MESSAGE),
            QueryOutcome::TimedOut => f.write_str(TIMED_OUT_MESSAGE),
            QueryOutcome::Failed(e) => write!(f, "❌ Error: {e}"),
        }
    }
}

/// Client that asks questions of one DNS server.
pub struct DnsChat {
    server: ServerConfig,
    program: String,
    resolver: Box<dyn Resolver>,
}

impl DnsChat {
    pub fn new(server: ServerConfig, program: &str, resolver: Box<dyn Resolver>) -> Self {
        Self {
            server,
            program: program.to_string(),
            resolver,
        }
    }

    pub fn server(&self) -> &ServerConfig {
        &self.server
    }

    pub fn query_for(&self, question: &str) -> TxtQuery {
        TxtQuery::for_question(&self.server, &self.program, question)
    }

    /// Sends a question and classifies what came back. Never fails; errors
    /// become [`QueryOutcome::Failed`].
    #[instrument(skip(self), fields(server = %self.server.name))]
    pub async fn ask(&self, question: &str) -> QueryOutcome {
        let query = self.query_for(question);
        let outcome = QueryOutcome::from_lookup(self.resolver.lookup(&query).await);
        debug!(?outcome, "Query finished");
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    /// Replays a canned result and records the queries it saw.
    struct CannedResolver {
        result: fn() -> Result<ResolverOutput, ResolverError>,
        seen: Arc<Mutex<Vec<TxtQuery>>>,
    }

    #[async_trait]
    impl Resolver for CannedResolver {
        async fn lookup(&self, query: &TxtQuery) -> Result<ResolverOutput, ResolverError> {
            self.seen.lock().unwrap().push(query.clone());
            (self.result)()
        }
    }

    fn chat_with(
        result: fn() -> Result<ResolverOutput, ResolverError>,
    ) -> (DnsChat, Arc<Mutex<Vec<TxtQuery>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let resolver = CannedResolver {
            result,
            seen: seen.clone(),
        };
        let chat = DnsChat::new(ServerConfig::new("chat", "ch.at"), "dig", Box::new(resolver));
        (chat, seen)
    }

    fn output(success: bool, stdout: &str) -> ResolverOutput {
        ResolverOutput {
            success,
            stdout: stdout.to_string(),
            stderr: String::new(),
        }
    }

    #[tokio::test]
    async fn test_ask_returns_joined_answer() {
        let (chat, seen) = chat_with(|| Ok(output(true, "\"Hello\"\n\"there\"\n")));

        let outcome = chat.ask("say hi").await;

        assert_eq!(outcome, QueryOutcome::Answer("Hello there".to_string()));
        assert_eq!(outcome.to_string(), "Hello there");
        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].name, "say hi");
        assert_eq!(seen[0].host, "ch.at");
    }

    #[tokio::test]
    async fn test_ask_empty_output_is_no_response() {
        let (chat, _) = chat_with(|| Ok(output(true, "  \n")));
        let outcome = chat.ask("anything").await;
        assert_eq!(outcome, QueryOutcome::NoResponse);
        assert_eq!(outcome.to_string(), NO_RESPONSE_MESSAGE);
    }

    #[tokio::test]
    async fn test_ask_non_zero_exit_is_no_response() {
        let (chat, _) = chat_with(|| Ok(output(false, "\"ignored\"\n")));
        assert_eq!(chat.ask("anything").await, QueryOutcome::NoResponse);
    }

    #[tokio::test]
    async fn test_ask_timeout() {
        let (chat, _) = chat_with(|| Err(ResolverError::Timeout(Duration::from_secs(15))));
        let outcome = chat.ask("slow").await;
        assert_eq!(outcome, QueryOutcome::TimedOut);
        assert_eq!(outcome.to_string(), TIMED_OUT_MESSAGE);
    }

    #[tokio::test]
    async fn test_ask_other_error_includes_text() {
        let (chat, _) = chat_with(|| {
            Err(ResolverError::Spawn {
                program: "dig".to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
            })
        });
        let outcome = chat.ask("hello").await;
        assert!(!outcome.is_answer());
        assert_eq!(
            outcome.to_string(),
            "❌ Error: failed to run 'dig': not found"
        );
    }
}
