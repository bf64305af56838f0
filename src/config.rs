//! User configuration file
//!
//! Read from `--config <PATH>` or `<config dir>/skiptree/config.toml`.
//! Every field is optional; a missing default file means built-in defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::tree::WalkerConfig;

/// Names skipped when neither the config file nor the command line says otherwise.
pub const DEFAULT_SKIP: &[&str] = &["node_modules", ".git", "__pycache__"];

pub const DEFAULT_OUTPUT: &str = "structure.txt";

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Entry names to skip at every level
    pub skip: Vec<String>,
    /// Glob patterns matched against entry names
    pub skip_patterns: Vec<String>,
    /// Structure file written when `--output` is not given
    pub output: PathBuf,
    /// Maximum depth to descend (unlimited when absent)
    pub max_depth: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            skip: DEFAULT_SKIP.iter().map(|s| s.to_string()).collect(),
            skip_patterns: Vec::new(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            max_depth: None,
        }
    }
}

impl Config {
    /// Default location of the config file, if the platform has a config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("skiptree").join("config.toml"))
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, the default location is tried and
    /// built-in defaults are used when nothing is there.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::from_file(p),
            None => match Self::default_path() {
                Some(p) if p.is_file() => Self::from_file(&p),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Parse a config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Walker configuration for these settings.
    pub fn walker_config(&self) -> WalkerConfig {
        WalkerConfig {
            skip_names: self.skip.iter().cloned().collect(),
            skip_patterns: self.skip_patterns.clone(),
            max_depth: self.max_depth,
            dirs_only: false,
        }
    }
}
