//! Diagnostic module - Error reporting infrastructure.
//!
//! Front-end phases push diagnostics into a [`Handler`]; the driver renders
//! them once the phase has finished.
//!
//! # Examples
//!
//! ```
//! use minc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
//! use minc_util::span::Span;
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unexpected character '#'")
//!     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
//!     .span(Span::new(1, 3))
//!     .emit(&handler);
//!
//! assert_eq!(handler.error_count(), 1);
//! ```

mod builder;
mod codes;

pub use builder::DiagnosticBuilder;
pub use codes::DiagnosticCode;

use std::cell::RefCell;
use std::fmt;
use std::io::Write;

use crate::error::DiagnosticResult;
use crate::span::Span;

/// A reported error, located at a single source position.
///
/// Every diagnostic stops the phase that raised it, so there is no
/// severity.
#[derive(Clone, Debug, PartialEq)]
pub struct Diagnostic {
    /// One-line description
    pub message: String,
    /// Where the problem is; [`Span::DUMMY`] when it has no position
    pub span: Span,
    /// Stable code for the kind of problem
    pub code: Option<DiagnosticCode>,
    /// Suggested fixes, rendered after the position
    pub helps: Vec<String>,
}

impl Diagnostic {
    /// An error diagnostic with no code or help.
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        DiagnosticBuilder::error(message).span(span).build()
    }
}

/// Renders as
///
/// ```text
/// error[E1003]: identifier starts with '_'
///  --> 1:3
///  = help: start the name with a letter
/// ```
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("error")?;
        if let Some(code) = self.code {
            write!(f, "[{}]", code)?;
        }
        write!(f, ": {}", self.message)?;
        if !self.span.is_dummy() {
            write!(f, "\n --> {}", self.span)?;
        }
        for help in &self.helps {
            write!(f, "\n = help: {}", help)?;
        }
        Ok(())
    }
}

/// Collects the diagnostics of one run.
///
/// Reporting takes `&self` so a phase can hold the handler alongside other
/// borrows of its state.
///
/// # Examples
///
/// ```
/// use minc_util::diagnostic::{Diagnostic, Handler};
/// use minc_util::span::Span;
///
/// let handler = Handler::new();
/// handler.emit_diagnostic(Diagnostic::error("unexpected character", Span::new(1, 1)));
///
/// if handler.has_errors() {
///     eprintln!("lexing failed with {} errors", handler.error_count());
/// }
/// ```
#[derive(Debug, Default)]
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create an empty handler
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.borrow().is_empty()
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.diagnostics.borrow().len()
    }

    /// A snapshot of every diagnostic so far, in report order
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Write every collected diagnostic to `out`, one block per diagnostic.
    ///
    /// # Examples
    ///
    /// ```
    /// use minc_util::diagnostic::{Diagnostic, Handler};
    /// use minc_util::span::Span;
    ///
    /// let handler = Handler::new();
    /// handler.emit_diagnostic(Diagnostic::error("bad", Span::new(2, 1)));
    ///
    /// let mut out = Vec::new();
    /// handler.render(&mut out).unwrap();
    /// assert_eq!(String::from_utf8(out).unwrap(), "error: bad\n --> 2:1\n");
    /// ```
    pub fn render<W: Write>(&self, out: &mut W) -> DiagnosticResult<()> {
        for diagnostic in self.diagnostics.borrow().iter() {
            writeln!(out, "{}", diagnostic)?;
        }
        out.flush()?;
        Ok(())
    }
}
