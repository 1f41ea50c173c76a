//! Number literal lexing.
//!
//! Integers are a run of ASCII digits. Decimals are digits, a `.`, and at
//! least one more digit. Signs are never part of a literal; `-` is always an
//! operator token of its own.

use std::io::Read;

use crate::error::LexicalErrorKind;
use crate::token::{TokenKind, TokenValue};
use crate::Lexer;

use super::core::{State, Step};

impl<R: Read> Lexer<'_, R> {
    /// Accumulates integer digits.
    ///
    /// A `.` moves to the fraction state; any other character ends the
    /// literal and is pushed back.
    pub(super) fn on_integer(&mut self, c: Option<char>) -> Step {
        match c {
            Some(d) if d.is_ascii_digit() => {
                self.lexeme.push(d);
                Step::Next(State::Integer)
            },
            Some('.') => {
                self.lexeme.push('.');
                Step::Next(State::Fraction)
            },
            other => {
                self.unread(other);
                match self.lexeme.parse::<i64>() {
                    Ok(value) => Step::Emit(TokenKind::Num, TokenValue::Integer(value)),
                    Err(_) => Step::Fail(LexicalErrorKind::IntegerOverflow),
                }
            },
        }
    }

    /// Accumulates digits after the decimal point.
    pub(super) fn on_fraction(&mut self, c: Option<char>) -> Step {
        match c {
            Some(d) if d.is_ascii_digit() => {
                self.lexeme.push(d);
                Step::Next(State::Fraction)
            },
            other => {
                if self.lexeme.ends_with('.') {
                    return Step::Fail(LexicalErrorKind::MissingFraction);
                }
                self.unread(other);
                match self.lexeme.parse::<f64>() {
                    Ok(value) => Step::Emit(TokenKind::Num, TokenValue::Float(value)),
                    Err(_) => Step::Fail(LexicalErrorKind::MissingFraction),
                }
            },
        }
    }
}
