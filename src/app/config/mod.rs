use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub mod user;

pub use user::{LogConfig, UiConfig, UserConfig};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Result of a lenient load. Reported by the caller once tracing is up.
#[derive(Debug)]
pub struct ConfigLoad {
    pub config: UserConfig,
    /// A default file was written because none existed.
    pub created: bool,
    pub error: Option<ConfigError>,
}

pub struct AppConfig;

impl AppConfig {
    pub fn get_config_dir() -> PathBuf {
        dirs::config_dir()
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
            .unwrap_or_else(|| PathBuf::from("."))
            .join("vitrine")
    }

    pub fn get_config_path() -> PathBuf {
        Self::get_config_dir().join("config.toml")
    }

    pub fn default_log_path() -> PathBuf {
        dirs::cache_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("vitrine")
            .join("vitrine.log")
    }

    /// Default config as pretty TOML (`--generate-config`).
    pub fn default_toml() -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(&UserConfig::default())?)
    }

    /// Read `path`, creating it with defaults when missing.
    pub fn load_from(path: &Path) -> Result<UserConfig, ConfigError> {
        if !path.exists() {
            let config = UserConfig::default();
            Self::write_default(path)?;
            return Ok(config);
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load config, falling back to defaults on any error.
    pub fn load_or_default(path: &Path) -> ConfigLoad {
        let missing = !path.exists();
        match Self::load_from(path) {
            Ok(config) => ConfigLoad {
                config,
                created: missing,
                error: None,
            },
            Err(e) => ConfigLoad {
                config: UserConfig::default(),
                created: false,
                error: Some(e),
            },
        }
    }

    fn write_default(path: &Path) -> Result<(), ConfigError> {
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let content = Self::default_toml()?;
        fs::write(path, content).map_err(io_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::ViewMode;
    use tempfile::TempDir;

    #[test]
    fn test_missing_config_is_created() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = AppConfig::load_from(&path).unwrap();

        assert!(path.exists());
        assert_eq!(config.ui.tick_rate_ms, 16);
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("[keys]"));
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[ui]\nstart_view = \"tree\"\nsidebar_open = true\n\n[keys]\nquit = \"x\"\n",
        )
        .unwrap();

        let config = AppConfig::load_from(&path).unwrap();

        assert_eq!(config.ui.start_view, ViewMode::Tree);
        assert!(config.ui.sidebar_open);
        assert_eq!(config.ui.tick_rate_ms, 16);
        assert_eq!(config.keys.quit, "x");
        assert_eq!(config.keys.delete_item, "d");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_invalid_config_reports_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[ui\nstart_view = 3").unwrap();

        let err = AppConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));

        // The lenient loader falls back instead
        let loaded = AppConfig::load_or_default(&path);
        assert_eq!(loaded.config.ui.start_view, ViewMode::default());
        assert!(loaded.error.is_some());
        assert!(!loaded.created);
    }

    #[test]
    fn test_lenient_load_reports_creation() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let first = AppConfig::load_or_default(&path);
        assert!(first.created);
        assert!(first.error.is_none());

        let second = AppConfig::load_or_default(&path);
        assert!(!second.created);
        assert!(second.error.is_none());
    }

    #[test]
    fn test_default_toml_round_trips() {
        let content = AppConfig::default_toml().unwrap();
        let parsed: UserConfig = toml::from_str(&content).unwrap();
        assert_eq!(parsed.keys.grab, "Space");
    }
}
