//! User preferences for the keypad window
//!
//! Only presentation settings live here. Calculator state is never written
//! to disk.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

const CONFIG_FILE: &str = "config.json";

/// Window and keypad preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PadConfig {
    /// Inner window width in points
    pub window_width: f32,
    /// Inner window height in points
    pub window_height: f32,
    /// Font size of the result display
    pub display_font_size: f32,
    /// Height of a single keypad key
    pub key_height: f32,
    /// `tracing` filter directive used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for PadConfig {
    fn default() -> Self {
        Self {
            window_width: 280.0,
            window_height: 380.0,
            display_font_size: 28.0,
            key_height: 44.0,
            log_filter: "info".to_string(),
        }
    }
}

impl PadConfig {
    /// Default location: `<config dir>/padcalc/config.json`
    pub fn default_path() -> PathBuf {
        config_dir("padcalc").join(CONFIG_FILE)
    }

    /// Read preferences from `path`. A missing file is `Ok(None)`.
    pub fn read(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        Self::load_from(path).map(Some)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, contents)?;
        Ok(())
    }
}

/// Get the config directory for an app
pub fn config_dir(app_name: &str) -> PathBuf {
    directories::ProjectDirs::from("org", "padcalc", app_name)
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let found = PadConfig::read(&dir.path().join("absent.json")).unwrap();
        assert_eq!(found, None);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE);
        let config = PadConfig {
            key_height: 52.0,
            log_filter: "padcalc=debug".to_string(),
            ..PadConfig::default()
        };
        config.save_to(&path).unwrap();
        assert_eq!(PadConfig::read(&path).unwrap(), Some(config));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, r#"{ "display_font_size": 40.0 }"#).unwrap();
        let config = PadConfig::load_from(&path).unwrap();
        assert_eq!(config.display_font_size, 40.0);
        assert_eq!(config.window_width, PadConfig::default().window_width);
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(PadConfig::read(&path), Err(ConfigError::Json(_))));
    }
}
