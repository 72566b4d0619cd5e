use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

pub const DEFAULT_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_TITLE: &str = "LLM-over-DNS Chat Interface";

/// A DNS endpoint that answers questions with TXT records.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ServerConfig {
    #[serde(default)]
    pub name: String,
    pub host: String,
    #[serde(default)]
    pub port: Option<u16>,
    #[serde(default)]
    pub domain_suffix: Option<String>,
    #[serde(default)]
    pub encoding: QueryEncoding,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub examples: Vec<String>,
    /// Question shown in the welcome banner, the first example otherwise.
    #[serde(default)]
    pub banner_example: Option<String>,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl ServerConfig {
    pub fn new(name: &str, host: &str) -> Self {
        Self {
            name: name.to_string(),
            host: host.to_string(),
            port: None,
            domain_suffix: None,
            encoding: QueryEncoding::default(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            title: None,
            examples: Vec::new(),
            banner_example: None,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(DEFAULT_TITLE)
    }

    pub fn banner_example(&self) -> Option<&str> {
        self.banner_example
            .as_deref()
            .or_else(|| self.examples.first().map(String::as_str))
    }

    /// Host as shown to the user, with the port only when one is configured.
    pub fn endpoint(&self) -> String {
        match self.port {
            Some(port) => format!("{}:{}", self.host, port),
            None => self.host.clone(),
        }
    }

    /// Turns a question into the DNS name sent to the server.
    pub fn query_name(&self, question: &str) -> String {
        match self.encoding {
            QueryEncoding::Raw => question.to_string(),
            QueryEncoding::Dotted => {
                let dotted = question.replace(' ', ".");
                match self.domain_suffix.as_deref() {
                    Some(suffix) if !suffix.is_empty() => format!("{dotted}.{suffix}"),
                    _ => dotted,
                }
            }
        }
    }
}

/// How a question is placed into the query name.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum QueryEncoding {
    /// Question used verbatim.
    #[default]
    Raw,
    /// Spaces replaced by dots, then the domain suffix appended.
    Dotted,
}

impl QueryEncoding {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryEncoding::Raw => "raw",
            QueryEncoding::Dotted => "dotted",
        }
    }
}

impl fmt::Display for QueryEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
