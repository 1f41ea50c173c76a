//! Span module - Source location tracking.
//!
//! The front end reads its input as a stream, so a location is described by
//! line and column alone; there are no byte offsets into a retained buffer.
//!
//! # Examples
//!
//! ```
//! use minc_util::span::Span;
//!
//! let span = Span::new(2, 7);
//! assert_eq!(span.to_string(), "2:7");
//! ```

use std::fmt;

/// Source location of a single character or of a token's first character.
///
/// Both fields are 1-based once a character has been read. The column counts
/// characters since the last line break.
///
/// # Examples
///
/// ```
/// use minc_util::span::Span;
///
/// let span = Span::new(1, 5);
/// assert_eq!(span.line, 1);
/// assert_eq!(span.column, 5);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based, in characters)
    pub column: u32,
}

impl Span {
    /// Dummy span for testing
    ///
    /// # Examples
    ///
    /// ```
    /// use minc_util::span::Span;
    ///
    /// assert_eq!(Span::DUMMY.line, 0);
    /// assert_eq!(Span::DUMMY.column, 0);
    /// ```
    pub const DUMMY: Span = Span { line: 0, column: 0 };

    /// Position before any character has been read.
    pub const START: Span = Span { line: 1, column: 0 };

    /// Create a new span
    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// Returns true for the placeholder span.
    #[inline]
    pub fn is_dummy(&self) -> bool {
        *self == Self::DUMMY
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
