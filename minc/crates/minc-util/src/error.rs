//! Core error types for minc-util crate

use thiserror::Error;

/// Error type for diagnostic operations
#[derive(Debug, Error)]
pub enum DiagnosticError {
    /// Failed to write rendered diagnostics
    #[error("Failed to write diagnostics: {0}")]
    Write(#[from] std::io::Error),
}

/// Result type alias for diagnostic operations
pub type DiagnosticResult<T> = std::result::Result<T, DiagnosticError>;
