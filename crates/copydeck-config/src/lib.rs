//! `~/.config/copydeck/config.toml`: where drafts live and which flow kind
//! outlines are parsed as.

use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Flow kind used when the config file does not name one.
pub const DEFAULT_FLOW_KIND: &str = "campaign";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to write config file at {config_path}: {source}")]
    ConfigWriteError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to encode config: {0}")]
    ConfigEncodeError(#[from] toml::ser::Error),
}

fn default_flow_kind() -> String {
    DEFAULT_FLOW_KIND.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Folder holding saved model replies.
    pub drafts_path: PathBuf,
    /// Flow kind passed to the outline parser.
    #[serde(default = "default_flow_kind")]
    pub flow_kind: String,
}

impl Config {
    /// A config for `drafts_path` with the default flow kind.
    pub fn new(drafts_path: impl Into<PathBuf>) -> Self {
        Self {
            drafts_path: drafts_path.into(),
            flow_kind: default_flow_kind(),
        }
    }

    /// Parses TOML text. `~` and `$VARS` in the drafts path are expanded and
    /// a blank flow kind falls back to the default.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        let mut config: Config = toml::from_str(content)?;
        if let Some(expanded) = expand_path(&config.drafts_path) {
            config.drafts_path = expanded;
        }
        let flow_kind = config.flow_kind.trim();
        config.flow_kind = if flow_kind.is_empty() {
            default_flow_kind()
        } else {
            flow_kind.to_string()
        };
        Ok(config)
    }

    /// `Ok(None)` when there is no config file yet.
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        let content = match std::fs::read_to_string(config_path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::ConfigReadError {
                    config_path: config_path.to_path_buf(),
                    source,
                });
            }
        };

        Self::from_toml(&content)
            .map(Some)
            .map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(Self::config_path())
    }

    /// Writes the config, creating its folder if needed.
    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> Result<(), ConfigError> {
        let config_path = config_path.as_ref();
        let write_error = |source| ConfigError::ConfigWriteError {
            config_path: config_path.to_path_buf(),
            source,
        };

        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(write_error)?;
        }
        std::fs::write(config_path, content).map_err(write_error)
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to_path(Self::config_path())
    }

    pub fn config_path() -> PathBuf {
        PathBuf::from(shellexpand::tilde("~/.config/copydeck").as_ref()).join("config.toml")
    }
}

fn expand_path(path: &Path) -> Option<PathBuf> {
    shellexpand::full(&path.to_string_lossy())
        .ok()
        .map(|expanded| PathBuf::from(expanded.as_ref()))
}
