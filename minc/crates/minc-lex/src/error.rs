//! Lexer error types.

use std::io;

use minc_util::{DiagnosticCode, Span};
use thiserror::Error;

/// The ways a token can be malformed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum LexicalErrorKind {
    /// A character that starts no token.
    #[error("unexpected character {0:?}")]
    UnexpectedChar(char),
    /// `:` followed by something other than `=` or `:` (`None` at end of input).
    #[error("expected '=' or ':' after ':', found {}", found(.0))]
    MalformedColon(Option<char>),
    /// An identifier spelling that begins with `_`.
    #[error("identifiers must not start with '_'")]
    LeadingUnderscore,
    /// A decimal point with no digit after it.
    #[error("expected a digit after the decimal point")]
    MissingFraction,
    /// An integer literal that does not fit in `i64`.
    #[error("integer literal does not fit in 64 bits")]
    IntegerOverflow,
}

fn found(c: &Option<char>) -> String {
    match c {
        Some(c) => format!("{:?}", c),
        None => "end of input".to_string(),
    }
}

impl LexicalErrorKind {
    /// Diagnostic code reported for this kind of error.
    pub fn code(self) -> DiagnosticCode {
        match self {
            LexicalErrorKind::UnexpectedChar(_) => DiagnosticCode::E_LEXER_UNEXPECTED_CHAR,
            LexicalErrorKind::MalformedColon(_) => DiagnosticCode::E_LEXER_MALFORMED_COLON,
            LexicalErrorKind::LeadingUnderscore => DiagnosticCode::E_LEXER_LEADING_UNDERSCORE,
            LexicalErrorKind::MissingFraction => DiagnosticCode::E_LEXER_MISSING_FRACTION,
            LexicalErrorKind::IntegerOverflow => DiagnosticCode::E_LEXER_INTEGER_OVERFLOW,
        }
    }
}

/// Error returned by [`Lexer::next_token`](crate::Lexer::next_token).
///
/// Cloneable so a lexer can keep returning the same failure once it has
/// stopped.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum LexError {
    /// A malformed token starting at `span`.
    #[error("lexical error at {span}: {kind}")]
    Lexical {
        /// What was wrong with the token
        kind: LexicalErrorKind,
        /// Position of the token's first character
        span: Span,
    },

    /// The underlying stream failed.
    #[error("failed to read input at {span}: {message}")]
    Io {
        /// Kind of the I/O failure
        kind: io::ErrorKind,
        /// Rendered I/O error
        message: String,
        /// Position of the last character read before the failure
        span: Span,
    },
}

impl LexError {
    /// Creates a lexical error.
    pub fn lexical(kind: LexicalErrorKind, span: Span) -> Self {
        LexError::Lexical { kind, span }
    }

    /// Wraps an I/O failure observed at `span`.
    pub fn io(err: &io::Error, span: Span) -> Self {
        LexError::Io {
            kind: err.kind(),
            message: err.to_string(),
            span,
        }
    }

    /// Where the error occurred.
    pub fn span(&self) -> Span {
        match self {
            LexError::Lexical { span, .. } | LexError::Io { span, .. } => *span,
        }
    }

    /// Diagnostic code for this error.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            LexError::Lexical { kind, .. } => kind.code(),
            LexError::Io { .. } => DiagnosticCode::E_LEXER_IO,
        }
    }
}

/// Result type alias for lexer operations
pub type LexResult<T> = std::result::Result<T, LexError>;
