//! Multi-character operator lexing.
//!
//! Handles the lookahead states entered from `:`, `<` and `>`.

use std::io::Read;

use crate::error::LexicalErrorKind;
use crate::token::TokenKind;
use crate::Lexer;

use super::core::Step;

impl<R: Read> Lexer<'_, R> {
    /// After `:`.
    ///
    /// Handles: `:=`, `::`. A lone colon is not a token, so any other
    /// follower fails without being pushed back.
    pub(super) fn on_colon(&mut self, c: Option<char>) -> Step {
        match c {
            Some('=') => Step::text(TokenKind::Assign, ":="),
            Some(':') => Step::text(TokenKind::TypeOf, "::"),
            other => Step::Fail(LexicalErrorKind::MalformedColon(other)),
        }
    }

    /// After `<`.
    ///
    /// Handles: `<`, `<=`, `<>`
    pub(super) fn on_less(&mut self, c: Option<char>) -> Step {
        match c {
            Some('=') => Step::text(TokenKind::Relop, "<="),
            Some('>') => Step::text(TokenKind::Relop, "<>"),
            other => {
                self.unread(other);
                Step::text(TokenKind::Relop, "<")
            },
        }
    }

    /// After `>`.
    ///
    /// Handles: `>`, `>=`
    pub(super) fn on_greater(&mut self, c: Option<char>) -> Step {
        match c {
            Some('=') => Step::text(TokenKind::Relop, ">="),
            other => {
                self.unread(other);
                Step::text(TokenKind::Relop, ">")
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::error::{LexError, LexicalErrorKind};
    use crate::token::{Token, TokenKind, TokenValue};
    use crate::Lexer;
    use minc_util::{Handler, Span};

    fn lex_op(source: &str) -> Result<Option<Token>, LexError> {
        let mut handler = Handler::new();
        let mut lexer = Lexer::new(source.as_bytes(), &mut handler);
        lexer.next_token()
    }

    fn lex_all(source: &str) -> Vec<(TokenKind, TokenValue)> {
        let mut handler = Handler::new();
        Lexer::new(source.as_bytes(), &mut handler)
            .map(|t| t.map(|t| (t.kind, t.value)))
            .collect::<Result<_, _>>()
            .unwrap()
    }

    fn relop(text: &str) -> (TokenKind, TokenValue) {
        (TokenKind::Relop, TokenValue::from(text))
    }

    #[test]
    fn test_assign() {
        let token = lex_op(":=").unwrap().unwrap();
        assert_eq!(token.kind, TokenKind::Assign);
        assert_eq!(token.value, TokenValue::from(":="));
    }

    #[test]
    fn test_typeof() {
        let token = lex_op("::").unwrap().unwrap();
        assert_eq!(token.kind, TokenKind::TypeOf);
        assert_eq!(token.value, TokenValue::from("::"));
    }

    #[test]
    fn test_lone_colon() {
        assert_eq!(
            lex_op(":x"),
            Err(LexError::lexical(LexicalErrorKind::MalformedColon(Some('x')), Span::new(1, 1)))
        );
        assert_eq!(
            lex_op(": ="),
            Err(LexError::lexical(LexicalErrorKind::MalformedColon(Some(' ')), Span::new(1, 1)))
        );
        assert_eq!(
            lex_op(":"),
            Err(LexError::lexical(LexicalErrorKind::MalformedColon(None), Span::new(1, 1)))
        );
    }

    #[test]
    fn test_less_family() {
        assert_eq!(lex_all("<"), vec![relop("<")]);
        assert_eq!(lex_all("<="), vec![relop("<=")]);
        assert_eq!(lex_all("<>"), vec![relop("<>")]);
    }

    #[test]
    fn test_greater_family() {
        assert_eq!(lex_all(">"), vec![relop(">")]);
        assert_eq!(lex_all(">="), vec![relop(">=")]);
        // `>>` is two tokens
        assert_eq!(lex_all(">>"), vec![relop(">"), relop(">")]);
    }

    #[test]
    fn test_less_pushes_back_follower() {
        assert_eq!(
            lex_all("<x"),
            vec![relop("<"), (TokenKind::Id, TokenValue::from("x"))]
        );
        assert_eq!(
            lex_all("<<="),
            vec![relop("<"), relop("<=")]
        );
        assert_eq!(
            lex_all(">5"),
            vec![relop(">"), (TokenKind::Num, TokenValue::Integer(5))]
        );
    }

    #[test]
    fn test_equals_is_single_relop() {
        assert_eq!(lex_all("=="), vec![relop("="), relop("=")]);
        assert_eq!(lex_all("=<"), vec![relop("="), relop("<")]);
    }

    #[test]
    fn test_pushed_back_newline_keeps_lines() {
        let mut handler = Handler::new();
        let tokens: Vec<_> = Lexer::new("<\n>".as_bytes(), &mut handler)
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(tokens[0].span, Span::new(1, 1));
        assert_eq!(tokens[1].span, Span::new(2, 1));
    }
}
