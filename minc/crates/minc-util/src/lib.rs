//! minc-util - Core Utilities and Foundation Types
//!
//! Types shared by every phase of the minc front end:
//!
//! - [`span`] - line/column source locations
//! - [`diagnostic`] - error collection and rendering
//! - [`error`] - error types for this crate

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler};
pub use error::{DiagnosticError, DiagnosticResult};
pub use span::Span;
