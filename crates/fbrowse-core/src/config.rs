//! Startup configuration loaded from a TOML file.
//!
//! All fields have defaults so the browser works without a config file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub window: WindowConfig,
}

impl Config {
    /// Loads configuration from a TOML file at `path`.
    ///
    /// # Errors
    ///
    /// - [`CoreError::NotFound`] if the file does not exist.
    /// - [`CoreError::PermissionDenied`] if the file is not readable.
    /// - [`CoreError::ConfigParse`] if the TOML is malformed.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => CoreError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => CoreError::PermissionDenied(path.to_path_buf()),
            _ => CoreError::Io(e),
        })?;
        toml::from_str(&content).map_err(|e| CoreError::ConfigParse(e.to_string()))
    }

    /// The directory the browser opens in: the configured `start_path`, or
    /// the user's home directory, or `/` when neither is available.
    pub fn start_path(&self) -> PathBuf {
        if let Some(path) = &self.general.start_path {
            return path.clone();
        }
        dirs::home_dir().unwrap_or_else(|| PathBuf::from("/"))
    }
}

/// General browsing preferences.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Directory to open at startup. Defaults to the home directory.
    #[serde(default)]
    pub start_path: Option<PathBuf>,
}

/// Window presentation hints for the frontend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Start in fullscreen mode instead of windowed.
    #[serde(default)]
    pub fullscreen: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn empty_toml_gives_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.general.start_path.is_none());
        assert!(!config.window.fullscreen);
    }

    #[test]
    fn load_parses_fields() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(
            &path,
            "[general]\nstart_path = \"/var/tmp\"\n\n[window]\nfullscreen = true\n",
        )
        .unwrap();

        let config = Config::load(&path).unwrap();

        assert_eq!(config.general.start_path, Some(PathBuf::from("/var/tmp")));
        assert!(config.window.fullscreen);
    }

    #[test]
    fn load_missing_file_returns_not_found() {
        let tmp = TempDir::new().unwrap();
        let result = Config::load(&tmp.path().join("missing.toml"));
        assert!(matches!(result.unwrap_err(), CoreError::NotFound(_)));
    }

    #[test]
    fn load_malformed_toml_returns_parse_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bad.toml");
        fs::write(&path, "[general\nstart_path = ???").unwrap();

        let result = Config::load(&path);
        assert!(matches!(result.unwrap_err(), CoreError::ConfigParse(_)));
    }

    #[test]
    fn start_path_prefers_configured_value() {
        let config: Config = toml::from_str("[general]\nstart_path = \"/srv\"").unwrap();
        assert_eq!(config.start_path(), PathBuf::from("/srv"));
    }

    #[test]
    fn start_path_default_is_absolute() {
        let config = Config::default();
        assert!(config.start_path().is_absolute());
    }
}
