//! minc-drv - Token listing driver
//!
//! Pulls tokens from the lexer until it reports end of input or an error and
//! prints one line per token:
//!
//! ```text
//! <VAR, token-attr:"var", 1:1>
//! <ID, token-attr:"x", 1:5>
//! Success!
//! ```
//!
//! A lexical error ends the listing with
//! `Error! There is a lexical error at LINE:COLUMN.` instead of `Success!`.

#![warn(missing_docs)]

pub mod config;
pub mod error;

use std::io::{Read, Write};

use minc_lex::{LexError, Lexer, Token};
use minc_util::{Handler, Span};

pub use config::{Config, LexerConfig, OutputConfig, CONFIG_FILE_NAME};
pub use error::{ConfigError, DriverError, Result};

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every token was listed and the input ended cleanly.
    Success {
        /// Number of tokens listed
        tokens: usize,
    },
    /// The listing stopped at a lexical error.
    LexicalError {
        /// Position of the malformed token
        span: Span,
        /// Number of tokens listed before the error
        tokens: usize,
    },
}

impl Outcome {
    /// Process exit status for this outcome.
    pub fn exit_code(&self) -> u8 {
        match self {
            Outcome::Success { .. } => 0,
            Outcome::LexicalError { .. } => 1,
        }
    }

    /// Returns true if the input ended without a lexical error.
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }
}

/// A single token listing run.
///
/// Owns the configuration and the diagnostic handler the lexer reports to.
pub struct Session {
    /// Driver configuration
    pub config: Config,
    /// Diagnostics collected during the run
    pub diagnostics: Handler,
}

impl Session {
    /// Creates a session, rejecting out-of-range settings.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            diagnostics: Handler::new(),
        })
    }

    /// Lists the tokens of `input` on `out`.
    ///
    /// Lexical errors end the listing normally and are reported through the
    /// returned [`Outcome`]; only failures of the streams themselves are
    /// errors.
    pub fn run<R: Read, W: Write>(&mut self, input: R, out: &mut W) -> Result<Outcome> {
        let capacity = self.config.lexer.capacity()?;
        let show_position = self.config.output.show_position;
        let mut lexer = Lexer::with_capacity(input, capacity, &mut self.diagnostics);

        tracing::info!(chunk_capacity = capacity.get(), "lexing input");

        let mut tokens = 0;
        let outcome = loop {
            match lexer.next_token() {
                Ok(Some(token)) => {
                    write_token(out, &token, show_position)?;
                    tokens += 1;
                },
                Ok(None) => {
                    writeln!(out, "Success!")?;
                    break Outcome::Success { tokens };
                },
                Err(LexError::Lexical { span, .. }) => {
                    writeln!(out, "Error! There is a lexical error at {}.", span)?;
                    break Outcome::LexicalError { span, tokens };
                },
                Err(err) => return Err(DriverError::Input(err)),
            }
        };
        out.flush()?;

        tracing::info!(tokens, success = outcome.is_success(), "finished");
        Ok(outcome)
    }
}

fn write_token<W: Write>(out: &mut W, token: &Token, show_position: bool) -> std::io::Result<()> {
    if show_position {
        writeln!(
            out,
            "<{}, token-attr:\"{}\", {}>",
            token.kind, token.value, token.span
        )
    } else {
        writeln!(out, "<{}, token-attr:\"{}\">", token.kind, token.value)
    }
}
