//! Test utilities for dnschat crate

use async_trait::async_trait;
use dnschat_core::chat::DnsChat;
use dnschat_core::query::TxtQuery;
use dnschat_core::resolver::{Resolver, ResolverError, ResolverOutput};
use dnschat_core::server::ServerConfig;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Canned behavior for [`MockResolver`].
#[derive(Debug, Clone)]
pub enum MockReply {
    /// Exit 0 with this stdout.
    Stdout(String),
    TimedOut,
    /// Never answers.
    Hang,
}

/// A resolver that never spawns anything and records the query names it saw.
#[derive(Debug)]
pub struct MockResolver {
    reply: MockReply,
    seen: Arc<Mutex<Vec<String>>>,
}

#[async_trait]
impl Resolver for MockResolver {
    async fn lookup(&self, query: &TxtQuery) -> Result<ResolverOutput, ResolverError> {
        self.seen.lock().unwrap().push(query.name.clone());
        match &self.reply {
            MockReply::Stdout(stdout) => Ok(ResolverOutput {
                success: true,
                stdout: stdout.clone(),
                stderr: String::new(),
            }),
            MockReply::TimedOut => Err(ResolverError::Timeout(Duration::from_secs(1))),
            MockReply::Hang => std::future::pending().await,
        }
    }
}

/// Builds a chat client for `ch.at` backed by a [`MockResolver`].
///
/// Returns the client and the list of query names sent so far.
pub fn mock_chat(reply: MockReply) -> (DnsChat, Arc<Mutex<Vec<String>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let resolver = MockResolver {
        reply,
        seen: seen.clone(),
    };
    let server = ServerConfig {
        examples: vec!["what is golang".to_string()],
        ..ServerConfig::new("chat", "ch.at")
    };
    (DnsChat::new(server, "dig", Box::new(resolver)), seen)
}
