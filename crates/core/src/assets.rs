//! Where dnschat keeps its files, and the config it ships with.
use std::ffi::OsString;
use std::path::PathBuf;

const APP_DIR: &str = "dnschat";

/// Per-user directories dnschat reads from or writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppDir {
    /// `dnschat.yml` lives here.
    Config,
    /// Debug logs live here.
    Data,
}

impl AppDir {
    fn xdg_var(self) -> &'static str {
        match self {
            AppDir::Config => "XDG_CONFIG_HOME",
            AppDir::Data => "XDG_DATA_HOME",
        }
    }

    fn platform_base(self) -> Option<PathBuf> {
        match self {
            AppDir::Config => dirs::config_dir(),
            AppDir::Data => dirs::data_local_dir(),
        }
    }

    fn home_relative(self) -> &'static str {
        match self {
            AppDir::Config => "~/.config",
            AppDir::Data => "~/.local/share",
        }
    }

    /// An explicit XDG base wins over the platform default.
    fn resolve(self, xdg_base: Option<OsString>) -> PathBuf {
        let base = xdg_base
            .filter(|b| !b.is_empty())
            .map(PathBuf::from)
            .or_else(|| self.platform_base())
            .unwrap_or_else(|| PathBuf::from(shellexpand::tilde(self.home_relative()).as_ref()));
        base.join(APP_DIR)
    }

    fn path(self) -> PathBuf {
        self.resolve(std::env::var_os(self.xdg_var()))
    }
}

pub fn get_config_dir() -> PathBuf {
    AppDir::Config.path()
}

/// Returns the data directory, creating it if needed.
pub fn get_data_dir() -> std::io::Result<PathBuf> {
    let path = AppDir::Data.path();
    std::fs::create_dir_all(&path)?;
    Ok(path)
}

pub fn get_default_config() -> &'static str {
    include_str!("../data/config.yml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xdg_base_wins() {
        let dir = AppDir::Config.resolve(Some("/tmp/xdg-config".into()));
        assert_eq!(dir, PathBuf::from("/tmp/xdg-config/dnschat"));

        let dir = AppDir::Data.resolve(Some("/tmp/xdg-data".into()));
        assert_eq!(dir, PathBuf::from("/tmp/xdg-data/dnschat"));
    }

    #[test]
    fn test_empty_xdg_base_is_ignored() {
        assert_eq!(
            AppDir::Config.resolve(Some(OsString::new())),
            AppDir::Config.resolve(None)
        );
    }

    #[test]
    fn test_platform_default_without_xdg_base() {
        let expected = dirs::data_local_dir()
            .map(|p| p.join("dnschat"))
            .unwrap_or_else(|| PathBuf::from(shellexpand::tilde("~/.local/share/dnschat").as_ref()));
        assert_eq!(AppDir::Data.resolve(None), expected);
        assert!(AppDir::Config.resolve(None).ends_with("dnschat"));
    }

    #[test]
    fn test_get_default_config() {
        let config = get_default_config();
        assert!(config.contains("servers:"));
        assert!(config.contains("host: ch.at"));
        assert!(config.contains("host: llm.pieter.com"));
    }
}
