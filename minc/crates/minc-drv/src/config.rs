//! Configuration module for the minc driver.
//!
//! This module handles loading and validating `minc.toml`. Every setting has
//! a default, so the file and each of its tables are optional.
//!
//! ```toml
//! verbose = false
//!
//! [lexer]
//! chunk_capacity = 10
//!
//! [output]
//! show_position = true
//! ```

use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use minc_lex::DEFAULT_CHUNK_CAPACITY;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "minc.toml";

/// Driver configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Global verbose setting.
    #[serde(default)]
    pub verbose: bool,

    /// Lexer settings.
    #[serde(default)]
    pub lexer: LexerConfig,

    /// Token listing settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Lexer configuration options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LexerConfig {
    /// Size in bytes of each of the two input chunks.
    #[serde(default = "default_chunk_capacity")]
    pub chunk_capacity: usize,
}

/// Token listing configuration options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    /// Append `LINE:COLUMN` to every token line.
    #[serde(default = "default_true")]
    pub show_position: bool,
}

fn default_chunk_capacity() -> usize {
    DEFAULT_CHUNK_CAPACITY
}

fn default_true() -> bool {
    true
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            chunk_capacity: default_chunk_capacity(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            show_position: true,
        }
    }
}

impl LexerConfig {
    /// The chunk capacity as the lexer expects it.
    pub fn capacity(&self) -> ConfigResult<NonZeroUsize> {
        NonZeroUsize::new(self.chunk_capacity).ok_or_else(|| {
            ConfigError::Invalid("lexer.chunk_capacity must be at least 1".to_string())
        })
    }
}

impl Config {
    /// Load configuration from `minc.toml` in the current directory.
    ///
    /// Returns the default configuration if there is no such file.
    pub fn load() -> ConfigResult<Self> {
        match Self::check_current_dir_config() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    ///
    /// Unlike [`load`](Self::load), a missing file is an error.
    pub fn load_from_path(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&content)?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Parse and validate configuration text.
    pub fn from_toml(content: &str) -> ConfigResult<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every setting is within its allowed range.
    pub fn validate(&self) -> ConfigResult<()> {
        self.lexer.capacity().map(|_| ())
    }

    /// Check for config in current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }
}
