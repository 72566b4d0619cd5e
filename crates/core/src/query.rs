//! TXT lookup requests and parsing of the resolver's short output.
use std::time::Duration;

use crate::server::ServerConfig;

/// Record type requested for every question.
pub const RECORD_TYPE: &str = "TXT";

/// A single TXT lookup, ready to hand to a resolver program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxtQuery {
    pub program: String,
    pub host: String,
    pub port: Option<u16>,
    pub name: String,
    pub timeout: Duration,
}

impl TxtQuery {
    pub fn for_question(server: &ServerConfig, program: &str, question: &str) -> Self {
        Self {
            program: program.to_string(),
            host: server.host.clone(),
            port: server.port,
            name: server.query_name(question),
            timeout: server.timeout(),
        }
    }

    /// Resolver arguments: `@host [-p port] name TXT +short`.
    pub fn args(&self) -> Vec<String> {
        let mut args = vec![format!("@{}", self.host)];
        if let Some(port) = self.port {
            args.push("-p".to_string());
            args.push(port.to_string());
        }
        args.push(self.name.clone());
        args.push(RECORD_TYPE.to_string());
        args.push("+short".to_string());
        args
    }
}

/// Joins the quoted TXT strings printed by the resolver into a single reply.
///
/// Blank lines are dropped, quote characters around each remaining line are
/// stripped and the lines are joined with one space, in order. Returns `None`
/// when nothing is left.
pub fn parse_txt_answer(stdout: &str) -> Option<String> {
    let lines: Vec<&str> = stdout
        .trim()
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.trim_matches('"'))
        .collect();

    if lines.is_empty() {
        None
    } else {
        Some(lines.join(" "))
    }
}
