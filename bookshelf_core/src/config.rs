//! Configuration file support for Bookshelf.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/bookshelf/config.toml`.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Store identity shown in the menu header
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_store_name")]
    pub name: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            name: default_store_name(),
        }
    }
}

/// How books are printed
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
        }
    }
}

/// Default log filter, used when RUST_LOG is unset
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// Default value functions
fn default_store_name() -> String {
    "Online Book Store".into()
}

fn default_currency_symbol() -> String {
    "$".into()
}

fn default_log_level() -> String {
    "warn".into()
}

/// Where a resolved configuration came from
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigSource {
    /// Parsed from this file
    File(PathBuf),
    /// No file at this (default) path, built-in defaults in use
    Defaults(PathBuf),
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::File(path) => write!(f, "Loaded config from {:?}", path),
            ConfigSource::Defaults(path) => {
                write!(f, "No config file found at {:?}, using defaults", path)
            }
        }
    }
}

impl Config {
    /// Load from `explicit` if given, else from the standard path
    ///
    /// An explicit path must exist; a missing default file means defaults.
    /// Nothing is logged here because callers usually resolve the config
    /// before a subscriber is installed; log the returned source instead.
    pub fn resolve(explicit: Option<&Path>) -> Result<(Self, ConfigSource)> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let path = Self::default_config_path();
                if !path.exists() {
                    return Ok((Self::default(), ConfigSource::Defaults(path)));
                }
                path
            }
        };
        let config = Self::load_from(&path)?;
        Ok((config, ConfigSource::File(path)))
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| {
            std::env::var_os("HOME")
                .map(|home| PathBuf::from(home).join(".config"))
                .unwrap_or_else(|| PathBuf::from(".config"))
        });
        base.join("bookshelf").join("config.toml")
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.store.name.trim().is_empty() {
            return Err(Error::Config("store.name must not be empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.store.name, "Online Book Store");
        assert_eq!(config.display.currency_symbol, "$");
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[display]
currency_symbol = "£"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.display.currency_symbol, "£");
        assert_eq!(config.store.name, "Online Book Store"); // default
    }

    #[test]
    fn test_save_and_load_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.store.name = "Corner Shop".into();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.store.name, "Corner Shop");
        assert_eq!(loaded.display.currency_symbol, "$");
    }

    #[test]
    fn test_load_rejects_empty_store_name() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[store]\nname = \"  \"\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let err = Config::load_from(&temp_dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_resolve_explicit_path() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("shop.toml");
        std::fs::write(&path, "[store]\nname = \"Corner Shop\"\n").unwrap();

        let (config, source) = Config::resolve(Some(&path)).unwrap();
        assert_eq!(config.store.name, "Corner Shop");
        assert_eq!(source, ConfigSource::File(path.clone()));
        assert_eq!(source.to_string(), format!("Loaded config from {:?}", path));
    }

    #[test]
    fn test_resolve_explicit_missing_path_fails() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = Config::resolve(Some(&temp_dir.path().join("absent.toml")));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_defaults_source_message() {
        let source = ConfigSource::Defaults(PathBuf::from("/nowhere/config.toml"));
        assert_eq!(
            source.to_string(),
            "No config file found at \"/nowhere/config.toml\", using defaults"
        );
    }

    #[test]
    fn test_load_malformed_toml() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[store\nname = 1").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, Error::Toml(_)));
    }
}
