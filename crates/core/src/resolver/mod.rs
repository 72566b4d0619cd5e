//! Resolvers run the actual DNS lookup on behalf of the chat client.
mod dig;

pub use dig::DigResolver;

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

use crate::query::TxtQuery;

/// What the resolver program produced for one lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolverOutput {
    /// Program exited with status 0.
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

#[derive(Error, Debug)]
pub enum ResolverError {
    #[error("lookup timed out after {}s", .0.as_secs())]
    Timeout(Duration),
    #[error("failed to run '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

/// Performs a TXT lookup for a prepared query.
#[async_trait]
pub trait Resolver: Send + Sync {
    async fn lookup(&self, query: &TxtQuery) -> Result<ResolverOutput, ResolverError>;
}
