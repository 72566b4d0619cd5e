use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, instrument, warn};

use super::{Resolver, ResolverError, ResolverOutput};
use crate::query::TxtQuery;

/// Runs a dig-compatible program as a subprocess.
///
/// The child is killed when the query's timeout elapses.
#[derive(Debug, Default, Clone)]
pub struct DigResolver;

impl DigResolver {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Resolver for DigResolver {
    #[instrument(skip(self), fields(program = %query.program, name = %query.name))]
    async fn lookup(&self, query: &TxtQuery) -> Result<ResolverOutput, ResolverError> {
        let args = query.args();
        debug!(?args, timeout = ?query.timeout, "Running resolver");

        let child = Command::new(&query.program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| ResolverError::Spawn {
                program: query.program.clone(),
                source,
            })?;

        // Dropping the wait future on timeout drops the child, which kills it.
        let output = match tokio::time::timeout(query.timeout, child.wait_with_output()).await {
            Ok(output) => output?,
            Err(_) => {
                warn!("Resolver did not finish in time");
                return Err(ResolverError::Timeout(query.timeout));
            }
        };

        // Only stderr is decoded lossily; it is never shown to the user.
        let stdout = String::from_utf8(output.stdout)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        let result = ResolverOutput {
            success: output.status.success(),
            stdout,
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };
        debug!(
            status = ?output.status.code(),
            stdout_len = result.stdout.len(),
            stderr = %result.stderr.trim(),
            "Resolver finished"
        );
        Ok(result)
    }
}
