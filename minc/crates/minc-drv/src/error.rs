//! Error handling module for the minc driver.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the driver. Lexical errors are not errors at
//! this level: they are an ordinary outcome of a run (see
//! [`Outcome`](crate::Outcome)).

use std::path::PathBuf;

use minc_lex::LexError;
use thiserror::Error;

/// Errors raised while loading or validating `minc.toml`.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An explicitly requested configuration file does not exist.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The configuration file could not be read.
    #[error("Failed to read configuration {}: {source}", .path.display())]
    Read {
        /// File that failed to read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for [`Config`](crate::Config).
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// A setting has a value outside its allowed range.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Errors that abort a driver run.
#[derive(Error, Debug)]
pub enum DriverError {
    /// Reading the input stream failed.
    #[error(transparent)]
    Input(LexError),

    /// Writing the token listing failed.
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),

    /// The configuration is unusable.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type alias using ConfigError.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias using DriverError.
pub type Result<T> = std::result::Result<T, DriverError>;

#[cfg(test)]
mod tests {
    use super::*;
    use minc_util::Span;

    #[test]
    fn test_not_found_display() {
        let err = ConfigError::NotFound(PathBuf::from("/etc/minc.toml"));
        assert_eq!(err.to_string(), "Configuration file not found: /etc/minc.toml");
    }

    #[test]
    fn test_invalid_display() {
        let err = ConfigError::Invalid("lexer.chunk_capacity must be at least 1".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid configuration: lexer.chunk_capacity must be at least 1"
        );
    }

    #[test]
    fn test_parse_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("= nope").unwrap_err();
        let err: ConfigError = toml_err.into();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_input_error_is_transparent() {
        let io_err = std::io::Error::new(std::io::ErrorKind::Other, "device lost");
        let lex_err = LexError::io(&io_err, Span::new(3, 4));
        let err = DriverError::Input(lex_err.clone());
        assert_eq!(err.to_string(), lex_err.to_string());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: DriverError = io_err.into();
        assert!(matches!(err, DriverError::Output(_)));
    }
}
