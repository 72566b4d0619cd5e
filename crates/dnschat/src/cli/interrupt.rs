//! Ctrl-C handling for the whole session.
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{Context, Result};
use tokio::sync::Notify;
use tracing::debug;

use crate::cli::ux::GOODBYE;

#[derive(Debug, Default)]
struct SignalState {
    in_query: AtomicBool,
    interrupted: Notify,
}

/// Decides what Ctrl-C does: cancel the running query, or end the session.
#[derive(Debug, Clone, Default)]
pub struct SignalContext {
    state: Arc<SignalState>,
}

impl SignalContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs the process-wide Ctrl-C handler. Call once per process.
    ///
    /// Outside a query the handler prints the farewell and exits with status
    /// 0. This covers prompts read without raw mode, where the terminal
    /// delivers SIGINT instead of a key press.
    pub fn install() -> Result<Self> {
        let ctx = Self::new();
        let handler_ctx = ctx.clone();
        ctrlc::set_handler(move || {
            if !handler_ctx.interrupt() {
                println!("\n{GOODBYE}");
                std::process::exit(0);
            }
        })
        .context("Error setting Ctrl-C handler")?;
        Ok(ctx)
    }

    /// Wakes the running query, if there is one. Returns whether it did.
    pub fn interrupt(&self) -> bool {
        if self.state.in_query.load(Ordering::SeqCst) {
            self.state.interrupted.notify_waiters();
            true
        } else {
            false
        }
    }

    /// Runs `query` to completion, or returns `None` if interrupted first.
    pub async fn guard<F: Future>(&self, query: F) -> Option<F::Output> {
        let interrupted = self.state.interrupted.notified();
        tokio::pin!(interrupted);
        // Register before flagging so a signal in between is not lost.
        interrupted.as_mut().enable();
        self.state.in_query.store(true, Ordering::SeqCst);

        let result = tokio::select! {
            output = query => Some(output),
            _ = interrupted => {
                debug!("Query interrupted");
                None
            }
        };

        self.state.in_query.store(false, Ordering::SeqCst);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_interrupt_outside_query_is_not_consumed() {
        let ctx = SignalContext::new();
        assert!(!ctx.interrupt());
    }

    #[tokio::test]
    async fn test_guard_returns_completed_output() {
        let ctx = SignalContext::new();
        assert_eq!(ctx.guard(async { 42 }).await, Some(42));
        assert!(!ctx.interrupt());
    }

    #[tokio::test]
    async fn test_interrupt_cancels_running_query() {
        let ctx = SignalContext::new();
        let trigger = ctx.clone();
        tokio::spawn(async move {
            while !trigger.interrupt() {
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
        });

        let result = ctx
            .guard(tokio::time::sleep(Duration::from_secs(30)))
            .await;

        assert_eq!(result, None);
        assert!(!ctx.interrupt());
    }
}
