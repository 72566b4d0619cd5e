//! dnschat cli definition and entrypoint.
mod ask;
mod chat;
mod interrupt;
pub mod ux;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use dnschat_core::chat::DnsChat;
use dnschat_core::config::{Config, get_config};
use dnschat_core::resolver::DigResolver;
use dnschat_core::server::ServerConfig;
use tracing::debug;

use crate::cli::interrupt::SignalContext;
use crate::log::setup_logging;

/// dnschat - chat with a large language model over DNS TXT queries.
///
/// With a QUESTION, asks it once and exits. Without one, starts an
/// interactive chat.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Question to ask, words are joined with spaces.
    #[arg(trailing_var_arg = true)]
    question: Vec<String>,

    /// Server preset from the config file.
    #[arg(short, long)]
    server: Option<String>,

    /// DNS server host, overrides the preset.
    #[arg(long)]
    host: Option<String>,

    /// DNS server port, overrides the preset.
    #[arg(short, long)]
    port: Option<u16>,

    /// Seconds to wait for an answer.
    #[arg(short, long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Resolver program to run, must accept dig arguments.
    #[arg(long, value_name = "PROGRAM")]
    resolver: Option<String>,

    /// Path to the config file.
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// List configured servers and exit.
    #[arg(long)]
    list_servers: bool,

    /// Write debug logs to the data directory.
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Picks the server preset and applies command line overrides.
    fn select_server(&self, config: &Config) -> Result<ServerConfig> {
        let mut server = match &self.server {
            Some(name) => config.server(name)?,
            None => config.default.clone(),
        };
        if let Some(host) = &self.host {
            server.host = host.clone();
        }
        if let Some(port) = self.port {
            server.port = Some(port);
        }
        if let Some(timeout) = self.timeout {
            server.timeout_secs = timeout;
        }
        Ok(server)
    }

    fn resolver_program(&self, config: &Config) -> String {
        self.resolver
            .clone()
            .unwrap_or_else(|| config.resolver.clone())
    }

    /// One-shot question, if any words were given.
    fn question(&self) -> Option<String> {
        if self.question.is_empty() {
            None
        } else {
            Some(self.question.join(" "))
        }
    }
}

/// Runs the main CLI application.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        setup_logging().context("Failed to set up logging")?;
    }

    let config = get_config(cli.config.clone()).context("Failed to load configuration")?;

    if cli.list_servers {
        print!("{}", ux::format_server_list(&config));
        return Ok(());
    }

    let server = cli.select_server(&config)?;
    let program = cli.resolver_program(&config);
    debug!(server = %server.name, endpoint = %server.endpoint(), %program, "Starting");
    let chat = DnsChat::new(server, &program, Box::new(DigResolver::new()));
    let signals = SignalContext::install()?;

    match cli.question() {
        Some(question) => {
            ask::execute(&chat, &signals, &question, &mut std::io::stdout()).await
        }
        None => chat::execute(&chat, &signals).await,
    }
}
