//! Identifier and keyword lexing.

use std::io::Read;

use crate::error::LexicalErrorKind;
use crate::keyword::keyword_from_ident;
use crate::token::{TokenKind, TokenValue};
use crate::Lexer;

use super::core::{State, Step};

/// Returns true if `c` can start an identifier.
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

/// Returns true if `c` can continue an identifier.
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

impl<R: Read> Lexer<'_, R> {
    /// Accumulates an identifier, then classifies the full spelling.
    ///
    /// Spellings that begin with `_` are rejected once complete; the
    /// terminating character is not pushed back in that case.
    pub(super) fn on_identifier(&mut self, c: Option<char>) -> Step {
        match c {
            Some(c) if is_ident_continue(c) => {
                self.lexeme.push(c);
                Step::Next(State::Identifier)
            },
            other => {
                if self.lexeme.starts_with('_') {
                    return Step::Fail(LexicalErrorKind::LeadingUnderscore);
                }
                self.unread(other);
                let kind = keyword_from_ident(&self.lexeme).unwrap_or(TokenKind::Id);
                Step::Emit(kind, TokenValue::Text(std::mem::take(&mut self.lexeme)))
            },
        }
    }
}
