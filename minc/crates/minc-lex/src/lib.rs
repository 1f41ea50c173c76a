//! minc-lex - Lexical Analyzer for the minc language
//!
//! This crate turns a byte stream into a stream of tokens for a small
//! imperative language with `var`/`func` declarations, `begin`/`end` blocks
//! and `if`/`while` control flow.
//!
//! # Overview
//!
//! Input is pulled through a [`CharSource`], which keeps two fixed-size byte
//! chunks and refills one while the other is being consumed, so a source of
//! any length is read in bounded memory. The [`Lexer`] is a deterministic
//! finite automaton on top of it that needs at most one character of
//! lookahead, which it returns to the source with a single pushback slot.
//!
//! # Example Usage
//!
//! ```
//! use minc_lex::{Lexer, TokenKind};
//! use minc_util::Handler;
//!
//! let source = "var x := 12.5;";
//! let mut handler = Handler::new();
//! let lexer = Lexer::new(source.as_bytes(), &mut handler);
//!
//! let kinds: Vec<TokenKind> = lexer.map(|t| t.unwrap().kind).collect();
//! assert_eq!(
//!     kinds,
//!     [TokenKind::Var, TokenKind::Id, TokenKind::Assign, TokenKind::Num, TokenKind::Semi]
//! );
//! ```
//!
//! # Module Structure
//!
//! - [`source`] - Double-buffered character source with pushback
//! - [`lexer`] - The tokenizer
//! - [`token`] - Token type definitions
//! - [`keyword`] - Reserved words
//! - [`error`] - Lexical and input errors
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! `print`, `var`, `func`, `if`, `then`, `else`, `while`, `void`, `begin`,
//! `end`, `int`
//!
//! ## Identifiers
//!
//! A letter followed by letters, digits or underscores. A name may not start
//! with an underscore.
//!
//! ## Numbers
//!
//! - **Integer**: `42`, `007`
//! - **Decimal**: `12.5`, `0.25` (digits are required on both sides of `.`)
//!
//! ## Operators and punctuation
//!
//! - **Arithmetic** (`OP`): `+`, `-`, `*`, `/`
//! - **Relational** (`RELOP`): `=`, `<`, `<=`, `<>`, `>`, `>=`
//! - **Assignment**: `:=`
//! - **Type annotation**: `::`
//! - **Delimiters**: `(`, `)`, `,`, `;`

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod keyword;
pub mod lexer;
pub mod source;
pub mod token;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use error::{LexError, LexResult, LexicalErrorKind};
pub use keyword::{keyword_from_ident, KEYWORDS};
pub use lexer::{is_ident_continue, is_ident_start, Lexer};
pub use source::{CharSource, DEFAULT_CHUNK_CAPACITY};
pub use token::{Token, TokenKind, TokenValue};

#[cfg(test)]
mod tests {
    use super::*;
    use minc_util::Handler;

    /// Helper to collect all tokens from source.
    fn lex_all(source: &str) -> Vec<Token> {
        let mut handler = Handler::new();
        Lexer::new(source.as_bytes(), &mut handler)
            .collect::<LexResult<_>>()
            .unwrap()
    }

    fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
        tokens.iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_function_declaration() {
        let source = r#"
            func area(w :: int, h :: int) :: int
            begin
                var a :: int;
                a := w * h;
                print a;
            end
        "#;
        let tokens = lex_all(source);
        let kinds = kinds(&tokens);

        assert_eq!(kinds[0], TokenKind::Func);
        assert_eq!(tokens[1].value, TokenValue::from("area"));
        assert!(kinds.contains(&TokenKind::TypeOf));
        assert!(kinds.contains(&TokenKind::Int));
        assert!(kinds.contains(&TokenKind::Begin));
        assert!(kinds.contains(&TokenKind::Assign));
        assert!(kinds.contains(&TokenKind::Print));
        assert_eq!(*kinds.last().unwrap(), TokenKind::End);
    }

    #[test]
    fn test_control_flow() {
        let source = "while n > 0 begin if n <> 3 then print n; else print 0; n := n - 1; end";
        let tokens = lex_all(source);
        let kinds = kinds(&tokens);

        assert!(kinds.contains(&TokenKind::While));
        assert!(kinds.contains(&TokenKind::If));
        assert!(kinds.contains(&TokenKind::Then));
        assert!(kinds.contains(&TokenKind::Else));

        let relops: Vec<_> = tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Relop)
            .map(|t| t.value.to_string())
            .collect();
        assert_eq!(relops, [">", "<>"]);
    }

    #[test]
    fn test_void_function_call() {
        let tokens = lex_all("func reset() :: void begin end reset();");
        let kinds = kinds(&tokens);
        assert!(kinds.contains(&TokenKind::Void));
        assert_eq!(
            &kinds[kinds.len() - 4..],
            [TokenKind::Id, TokenKind::LParen, TokenKind::RParen, TokenKind::Semi]
        );
    }

    #[test]
    fn test_line_column_tracking() {
        let tokens = lex_all("var\n  x\n:=\n\t42");
        let spans: Vec<_> = tokens.iter().map(|t| (t.line(), t.column())).collect();
        assert_eq!(spans, [(1, 1), (2, 3), (3, 1), (4, 2)]);
    }

    #[test]
    fn test_empty_source() {
        assert!(lex_all("").is_empty());
    }

    #[test]
    fn test_error_stops_the_stream() {
        let mut handler = Handler::new();
        let results: Vec<_> = Lexer::new("x := 1 @ 2".as_bytes(), &mut handler).collect();
        assert_eq!(results.len(), 4);
        let err = results[3].clone().unwrap_err();
        assert_eq!(
            err,
            LexError::lexical(LexicalErrorKind::UnexpectedChar('@'), minc_util::Span::new(1, 8))
        );
        assert_eq!(handler.error_count(), 1);
    }

    #[test]
    fn test_small_chunks_give_same_tokens() {
        let source = "func f(a, b) begin print a * b + 12.75; end";
        let expected = lex_all(source);
        for capacity in 1..=12 {
            let mut handler = Handler::new();
            let capacity = std::num::NonZeroUsize::new(capacity).unwrap();
            let tokens: Vec<Token> = Lexer::with_capacity(source.as_bytes(), capacity, &mut handler)
                .collect::<LexResult<_>>()
                .unwrap();
            assert_eq!(tokens, expected, "capacity {}", capacity);
        }
    }
}
