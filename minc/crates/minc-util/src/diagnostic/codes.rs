//! Diagnostic codes for categorizing front-end errors.
//!
//! # Examples
//!
//! ```
//! use minc_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E_LEXER_UNEXPECTED_CHAR;
//! assert_eq!(code.prefix(), "E");
//! assert_eq!(code.number(), 1001);
//! assert_eq!(code.to_string(), "E1001");
//! ```

use std::fmt;

/// A unique code identifying a diagnostic message
///
/// Codes follow the format `{prefix}{number}`, with the number padded to
/// four digits. Lexer errors live in the `E1xxx` range.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    prefix: &'static str,
    number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the prefix ("E" for errors)
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Get the numeric identifier
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// E1001: Lexer - character that starts no token
    pub const E_LEXER_UNEXPECTED_CHAR: Self = Self::new("E", 1001);
    /// E1002: Lexer - `:` not followed by `=` or `:`
    pub const E_LEXER_MALFORMED_COLON: Self = Self::new("E", 1002);
    /// E1003: Lexer - identifier spelled with a leading underscore
    pub const E_LEXER_LEADING_UNDERSCORE: Self = Self::new("E", 1003);
    /// E1004: Lexer - decimal point without fractional digits
    pub const E_LEXER_MISSING_FRACTION: Self = Self::new("E", 1004);
    /// E1005: Lexer - integer literal out of range
    pub const E_LEXER_INTEGER_OVERFLOW: Self = Self::new("E", 1005);
    /// E1006: Lexer - input stream could not be read
    pub const E_LEXER_IO: Self = Self::new("E", 1006);
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:04}", self.prefix, self.number)
    }
}

impl fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DiagnosticCode({})", self)
    }
}
