//! Core lexer implementation.
//!
//! This module contains the main Lexer struct, the DFA state tag and the
//! per-character dispatch loop. The transitions for each non-start state live
//! in the sibling modules.

use std::io::Read;
use std::iter::FusedIterator;
use std::num::NonZeroUsize;

use minc_util::{DiagnosticBuilder, Handler, Span};

use crate::error::{LexError, LexResult, LexicalErrorKind};
use crate::source::CharSource;
use crate::token::{Token, TokenKind, TokenValue};

use super::identifier::is_ident_start;

/// Recognition state of the DFA.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum State {
    /// Between tokens; skips whitespace and picks the next state.
    Start,
    /// Saw `:`; expects `=` or `:`.
    Colon,
    /// Saw `<`; `=` or `>` may follow.
    Less,
    /// Saw `>`; `=` may follow.
    Greater,
    /// Accumulating the digits of an integer.
    Integer,
    /// Accumulating the digits after a decimal point.
    Fraction,
    /// Accumulating an identifier or keyword.
    Identifier,
}

/// Outcome of feeding one character to the current state.
#[derive(Debug, PartialEq)]
pub(super) enum Step {
    /// Move to the given state and read another character.
    Next(State),
    /// The token is complete.
    Emit(TokenKind, TokenValue),
    /// The token is malformed.
    Fail(LexicalErrorKind),
    /// Input ended between tokens.
    EndOfInput,
}

impl Step {
    /// Emits a token whose attribute is its fixed spelling.
    pub(super) fn text(kind: TokenKind, spelling: &str) -> Self {
        Step::Emit(kind, TokenValue::from(spelling))
    }
}

/// How a finished lexer answers further calls.
enum Finished {
    EndOfInput,
    Failed(LexError),
}

/// Lexer for minc source text.
///
/// Pulls characters from a [`CharSource`] and hands out one token per call
/// to [`next_token`](Lexer::next_token). The lexer never reads ahead of the
/// token it is working on by more than the single character it pushes back.
///
/// # Example
///
/// ```
/// use minc_lex::{Lexer, TokenKind, TokenValue};
/// use minc_util::Handler;
///
/// let mut handler = Handler::new();
/// let mut lexer = Lexer::new("x <= 10".as_bytes(), &mut handler);
///
/// let token = lexer.next_token().unwrap().unwrap();
/// assert_eq!(token.kind, TokenKind::Id);
///
/// let token = lexer.next_token().unwrap().unwrap();
/// assert_eq!(token.kind, TokenKind::Relop);
/// assert_eq!(token.value, TokenValue::from("<="));
///
/// let token = lexer.next_token().unwrap().unwrap();
/// assert_eq!(token.value, TokenValue::Integer(10));
///
/// assert_eq!(lexer.next_token(), Ok(None));
/// ```
pub struct Lexer<'a, R> {
    /// Character source for the input stream.
    pub(super) source: CharSource<R>,

    /// Error handler for reporting lexical errors.
    handler: &'a mut Handler,

    /// Characters of the token being recognized.
    pub(super) lexeme: String,

    /// Position of the current token's first character.
    token_start: Span,

    /// Set once end of input or an error has been returned.
    finished: Option<Finished>,
}

impl<'a, R: Read> Lexer<'a, R> {
    /// Creates a lexer reading from `reader` with default-sized chunks.
    pub fn new(reader: R, handler: &'a mut Handler) -> Self {
        Self::from_source(CharSource::new(reader), handler)
    }

    /// Creates a lexer whose character source uses `capacity`-byte chunks.
    pub fn with_capacity(reader: R, capacity: NonZeroUsize, handler: &'a mut Handler) -> Self {
        Self::from_source(CharSource::with_capacity(reader, capacity), handler)
    }

    fn from_source(source: CharSource<R>, handler: &'a mut Handler) -> Self {
        Self {
            source,
            handler,
            lexeme: String::new(),
            token_start: Span::START,
            finished: None,
        }
    }

    /// Returns the next token.
    ///
    /// - `Ok(Some(token))` for a recognized token,
    /// - `Ok(None)` at end of input,
    /// - `Err(LexError::Lexical { .. })` for a malformed token, reported at
    ///   the position of its first character,
    /// - `Err(LexError::Io { .. })` when the input stream fails.
    ///
    /// After end of input or an error, every later call returns the same
    /// outcome without reading more input. Errors are also emitted to the
    /// handler, once.
    pub fn next_token(&mut self) -> LexResult<Option<Token>> {
        match &self.finished {
            Some(Finished::EndOfInput) => return Ok(None),
            Some(Finished::Failed(err)) => return Err(err.clone()),
            None => {},
        }

        let result = self.scan();
        match &result {
            Ok(Some(token)) => {
                tracing::debug!(kind = %token.kind, value = %token.value, at = %token.span, "token");
            },
            Ok(None) => {
                tracing::debug!(at = %self.source.position(), "end of input");
                self.finished = Some(Finished::EndOfInput);
            },
            Err(err) => {
                self.report_error(err);
                self.finished = Some(Finished::Failed(err.clone()));
            },
        }
        result
    }

    /// Runs the DFA from the start state until it emits, fails or hits the
    /// end of input.
    fn scan(&mut self) -> LexResult<Option<Token>> {
        self.lexeme.clear();
        let mut state = State::Start;

        loop {
            let c = match self.source.next_char() {
                Ok(c) => c,
                Err(err) => return Err(LexError::io(&err, self.source.position())),
            };

            let step = match state {
                State::Start => self.on_start(c),
                State::Colon => self.on_colon(c),
                State::Less => self.on_less(c),
                State::Greater => self.on_greater(c),
                State::Integer => self.on_integer(c),
                State::Fraction => self.on_fraction(c),
                State::Identifier => self.on_identifier(c),
            };

            match step {
                Step::Next(next) => state = next,
                Step::Emit(kind, value) => {
                    self.lexeme.clear();
                    return Ok(Some(Token::new(kind, value, self.token_start)));
                },
                Step::Fail(kind) => return Err(LexError::lexical(kind, self.token_start)),
                Step::EndOfInput => return Ok(None),
            }
        }
    }

    /// Transitions out of the start state.
    fn on_start(&mut self, c: Option<char>) -> Step {
        let Some(c) = c else {
            return Step::EndOfInput;
        };

        if c.is_whitespace() {
            return Step::Next(State::Start);
        }

        self.token_start = self.source.position();

        match c {
            ';' => Step::text(TokenKind::Semi, ";"),
            '(' => Step::text(TokenKind::LParen, "("),
            ')' => Step::text(TokenKind::RParen, ")"),
            ',' => Step::text(TokenKind::Comma, ","),
            '+' => Step::text(TokenKind::Op, "+"),
            '-' => Step::text(TokenKind::Op, "-"),
            '*' => Step::text(TokenKind::Op, "*"),
            '/' => Step::text(TokenKind::Op, "/"),
            '=' => Step::text(TokenKind::Relop, "="),
            ':' => Step::Next(State::Colon),
            '<' => Step::Next(State::Less),
            '>' => Step::Next(State::Greater),
            c if c.is_ascii_digit() => {
                self.lexeme.push(c);
                Step::Next(State::Integer)
            },
            c if is_ident_start(c) => {
                self.lexeme.push(c);
                Step::Next(State::Identifier)
            },
            c => Step::Fail(LexicalErrorKind::UnexpectedChar(c)),
        }
    }

    /// Returns the lookahead character to the source; end of input needs no
    /// pushback since the source keeps reporting it.
    pub(super) fn unread(&mut self, c: Option<char>) {
        if let Some(c) = c {
            self.source.push_back(c);
        }
    }

    /// Reports an error to the diagnostic handler.
    fn report_error(&mut self, err: &LexError) {
        tracing::warn!(code = %err.code(), at = %err.span(), "{}", err);

        let message = match err {
            LexError::Lexical { kind, .. } => kind.to_string(),
            LexError::Io { message, .. } => format!("failed to read input: {}", message),
        };
        let mut builder = DiagnosticBuilder::error(message)
            .code(err.code())
            .span(err.span());
        if let LexError::Lexical { kind, .. } = err {
            if let Some(help) = help_for(*kind) {
                builder = builder.help(help);
            }
        }
        builder.emit(&*self.handler);
    }

    /// Position of the most recently read character.
    pub fn position(&self) -> Span {
        self.source.position()
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.source.line()
    }

    /// Returns the current column number.
    pub fn column(&self) -> u32 {
        self.source.column()
    }

    /// Returns true once end of input or an error has been returned.
    pub fn is_finished(&self) -> bool {
        self.finished.is_some()
    }
}

fn help_for(kind: LexicalErrorKind) -> Option<&'static str> {
    match kind {
        LexicalErrorKind::MalformedColon(_) => Some("use `:=` to assign or `::` to declare a type"),
        LexicalErrorKind::LeadingUnderscore => Some("start the name with a letter"),
        LexicalErrorKind::MissingFraction => Some("write the literal as `1.0` or `1`"),
        LexicalErrorKind::UnexpectedChar(_) | LexicalErrorKind::IntegerOverflow => None,
    }
}

/// Yields tokens until end of input, then stops. A failure is yielded once
/// as `Some(Err(_))` and is followed by `None`.
impl<R: Read> Iterator for Lexer<'_, R> {
    type Item = LexResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_finished() {
            return None;
        }
        self.next_token().transpose()
    }
}

impl<R: Read> FusedIterator for Lexer<'_, R> {}
