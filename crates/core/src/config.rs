use std::{
    collections::HashMap,
    fs::{self, File},
    io::Write,
    path::PathBuf,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::instrument;

use crate::{
    assets::{get_config_dir, get_default_config},
    server::ServerConfig,
};

pub const DEFAULT_RESOLVER: &str = "dig";

#[derive(Error, Debug)]
pub enum DnsChatConfigError {
    #[error("File system error: {0}")]
    IO(#[from] std::io::Error),
    #[error("YAML parsing error: {0}")]
    YAMLError(#[from] serde_yaml::Error),
    #[error("Configuration error: {0}")]
    Config(String),
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    /// Program used to run the TXT lookups.
    pub resolver: String,
    pub servers: HashMap<String, ServerConfig>,
    /// Server used when none is chosen on the command line.
    pub default: ServerConfig,
}

impl Config {
    /// Finds a configured server preset by name.
    pub fn server(&self, name: &str) -> Result<ServerConfig, DnsChatConfigError> {
        self.servers.get(name).cloned().ok_or_else(|| {
            DnsChatConfigError::Config(format!(
                "Server '{name}' not found. Available: {}",
                self.server_names().join(", ")
            ))
        })
    }

    /// Server preset names in sorted order.
    pub fn server_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.servers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum StringOrObject<T> {
    String(String),
    Object(T),
}

#[derive(Deserialize, Debug)]
struct RawConfig {
    #[serde(default)]
    resolver: Option<String>,
    #[serde(default)]
    servers: HashMap<String, ServerConfig>,
    default: StringOrObject<ServerConfig>,
}

impl RawConfig {
    #[instrument]
    fn to_config(&self) -> Result<Config, DnsChatConfigError> {
        let mut servers_with_names = HashMap::new();
        for (k, v) in &self.servers {
            // Preset name falls back to its key
            let server_name = if v.name.is_empty() {
                k.clone()
            } else {
                v.name.clone()
            };
            let server = ServerConfig {
                name: server_name,
                ..v.clone()
            };
            servers_with_names.insert(k.clone(), server);
        }

        let default = match &self.default {
            StringOrObject::String(s) => servers_with_names
                .get(s)
                .cloned()
                .ok_or_else(|| DnsChatConfigError::Config(format!("Server '{s}' not found")))?,
            StringOrObject::Object(s) => s.clone(),
        };

        let resolver = match self.resolver.as_deref() {
            Some(r) if !r.trim().is_empty() => shellexpand::tilde(r.trim()).into_owned(),
            _ => DEFAULT_RESOLVER.to_string(),
        };

        Ok(Config {
            resolver,
            servers: servers_with_names,
            default,
        })
    }
}

#[instrument(skip(config_path))]
pub fn create_or_get_config_file(
    config_path: Option<PathBuf>,
) -> Result<(bool, PathBuf), DnsChatConfigError> {
    let actual_path = config_path.unwrap_or_else(|| {
        let config_dir = get_config_dir();
        config_dir.join("dnschat.yml")
    });

    let parent_dir = actual_path.parent().ok_or_else(|| {
        DnsChatConfigError::IO(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "Config path has no parent directory",
        ))
    })?;

    if !parent_dir.exists() {
        fs::create_dir_all(parent_dir)?;
    }

    if actual_path.exists() {
        Ok((true, actual_path))
    } else {
        File::create(&actual_path)?.write_all(get_default_config().as_bytes())?;
        Ok((false, actual_path))
    }
}

#[instrument(skip(config_path))]
pub fn get_config(config_path: Option<PathBuf>) -> Result<Config, DnsChatConfigError> {
    let (_, config_file) = create_or_get_config_file(config_path)?;
    let content = fs::read_to_string(&config_file)?;
    parse_config(&content)
}

/// Parses configuration from YAML text.
pub fn parse_config(content: &str) -> Result<Config, DnsChatConfigError> {
    let raw: RawConfig = serde_yaml::from_str(content)?;
    raw.to_config()
}
