//! Edge case tests for minc-lex

use crate::{LexError, LexResult, Lexer, LexicalErrorKind, Token, TokenKind, TokenValue};
use minc_util::{Handler, Span};
use proptest::prelude::*;

fn lex_all(source: &str) -> LexResult<Vec<Token>> {
    let mut handler = Handler::new();
    Lexer::new(source.as_bytes(), &mut handler).collect()
}

fn first_token(source: &str) -> LexResult<Option<Token>> {
    let mut handler = Handler::new();
    let mut lexer = Lexer::new(source.as_bytes(), &mut handler);
    lexer.next_token()
}

fn tok(kind: TokenKind, value: TokenValue, line: u32, column: u32) -> Token {
    Token::new(kind, value, Span::new(line, column))
}

// ==================== WHOLE STATEMENTS ====================

#[test]
fn test_edge_declaration_with_decimal() {
    let mut handler = Handler::new();
    let mut lexer = Lexer::new("var x := 12.5; print x;".as_bytes(), &mut handler);

    let expected = [
        tok(TokenKind::Var, "var".into(), 1, 1),
        tok(TokenKind::Id, "x".into(), 1, 5),
        tok(TokenKind::Assign, ":=".into(), 1, 7),
        tok(TokenKind::Num, TokenValue::Float(12.5), 1, 10),
        tok(TokenKind::Semi, ";".into(), 1, 14),
        tok(TokenKind::Print, "print".into(), 1, 16),
        tok(TokenKind::Id, "x".into(), 1, 22),
        tok(TokenKind::Semi, ";".into(), 1, 23),
    ];
    for token in expected {
        assert_eq!(lexer.next_token(), Ok(Some(token)));
    }
    assert_eq!(lexer.next_token(), Ok(None));
}

#[test]
fn test_edge_newline_resets_column() {
    assert_eq!(
        lex_all("a\nb"),
        Ok(vec![
            tok(TokenKind::Id, "a".into(), 1, 1),
            tok(TokenKind::Id, "b".into(), 2, 1),
        ])
    );
}

#[test]
fn test_edge_blank_lines() {
    let tokens = lex_all("\n\n\n   end").unwrap();
    assert_eq!(tokens[0].span, Span::new(4, 4));
}

#[test]
fn test_edge_no_whitespace_between_tokens() {
    let tokens = lex_all("if(a<=b)then print(a);").unwrap();
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        [
            TokenKind::If,
            TokenKind::LParen,
            TokenKind::Id,
            TokenKind::Relop,
            TokenKind::Id,
            TokenKind::RParen,
            TokenKind::Then,
            TokenKind::Print,
            TokenKind::LParen,
            TokenKind::Id,
            TokenKind::RParen,
            TokenKind::Semi,
        ]
    );
}

#[test]
fn test_edge_tokens_split_across_every_chunk_boundary() {
    let source = "begin total := total + 1024.75 ; end";
    let expected = lex_all(source).unwrap();
    for capacity in 1..=source.len() + 1 {
        let mut handler = Handler::new();
        let capacity = std::num::NonZeroUsize::new(capacity).unwrap();
        let tokens: Vec<Token> = Lexer::with_capacity(source.as_bytes(), capacity, &mut handler)
            .collect::<LexResult<_>>()
            .unwrap();
        assert_eq!(tokens, expected, "capacity {}", capacity);
    }
}

// ==================== TERMINAL STATES ====================

#[test]
fn test_edge_end_of_input_is_idempotent() {
    let mut handler = Handler::new();
    let mut lexer = Lexer::new("x".as_bytes(), &mut handler);
    assert!(lexer.next_token().unwrap().is_some());
    for _ in 0..5 {
        assert_eq!(lexer.next_token(), Ok(None));
    }
}

#[test]
fn test_edge_error_is_idempotent() {
    let mut handler = Handler::new();
    {
        let mut lexer = Lexer::new("a ! b".as_bytes(), &mut handler);
        assert!(lexer.next_token().unwrap().is_some());
        let expected = LexError::lexical(LexicalErrorKind::UnexpectedChar('!'), Span::new(1, 3));
        for _ in 0..5 {
            assert_eq!(lexer.next_token(), Err(expected.clone()));
        }
    }
    assert_eq!(handler.error_count(), 1);
}

#[test]
fn test_edge_error_on_later_line() {
    assert_eq!(
        first_token("\n\n  $"),
        Err(LexError::lexical(LexicalErrorKind::UnexpectedChar('$'), Span::new(3, 3)))
    );
}

#[test]
fn test_edge_error_position_is_token_start() {
    let result = lex_all("x :=  _long_name");
    assert_eq!(
        result,
        Err(LexError::lexical(LexicalErrorKind::LeadingUnderscore, Span::new(1, 7)))
    );
}

#[test]
fn test_edge_non_ascii_unexpected_char() {
    assert_eq!(
        first_token("€"),
        Err(LexError::lexical(LexicalErrorKind::UnexpectedChar('€'), Span::new(1, 1)))
    );
}

#[test]
fn test_edge_invalid_utf8_is_unexpected() {
    let mut handler = Handler::new();
    let mut lexer = Lexer::new(&b"x \xFF"[..], &mut handler);
    assert!(lexer.next_token().unwrap().is_some());
    assert_eq!(
        lexer.next_token(),
        Err(LexError::lexical(
            LexicalErrorKind::UnexpectedChar(char::REPLACEMENT_CHARACTER),
            Span::new(1, 3)
        ))
    );
}

// ==================== PROPERTIES ====================

#[test]
fn test_property_digit_strings_are_integers() {
    proptest!(|(digits in "[0-9]{1,18}")| {
        let token = first_token(&digits).unwrap().unwrap();
        assert_eq!(token.kind, TokenKind::Num);
        assert_eq!(token.value, TokenValue::Integer(digits.parse().unwrap()));
        assert_eq!(token.span, Span::new(1, 1));
    });
}

#[test]
fn test_property_decimals_are_floats() {
    proptest!(|(whole in "[0-9]{1,8}", frac in "[0-9]{1,8}")| {
        let source = format!("{}.{}", whole, frac);
        let token = first_token(&source).unwrap().unwrap();
        assert_eq!(token.kind, TokenKind::Num);
        assert_eq!(token.value, TokenValue::Float(source.parse().unwrap()));
    });
}

#[test]
fn test_property_trailing_point_fails() {
    proptest!(|(whole in "[0-9]{1,8}", rest in "[ ;a-z]{0,3}")| {
        let source = format!("{}.{}", whole, rest);
        assert_eq!(
            first_token(&source),
            Err(LexError::lexical(LexicalErrorKind::MissingFraction, Span::new(1, 1)))
        );
    });
}

#[test]
fn test_property_identifiers_or_keywords() {
    proptest!(|(name in "[a-zA-Z][a-zA-Z0-9_]{0,30}")| {
        let tokens = lex_all(&name).unwrap();
        assert_eq!(tokens.len(), 1);
        let expected = crate::keyword_from_ident(&name).unwrap_or(TokenKind::Id);
        assert_eq!(tokens[0].kind, expected);
        assert_eq!(&tokens[0].value, &TokenValue::Text(name.clone()));
    });
}

#[test]
fn test_property_leading_underscore_fails() {
    proptest!(|(name in "_[a-zA-Z0-9_]{0,30}")| {
        assert_eq!(
            first_token(&name),
            Err(LexError::lexical(LexicalErrorKind::LeadingUnderscore, Span::new(1, 1)))
        );
    });
}

#[test]
fn test_property_whitespace_only_is_end_of_input() {
    proptest!(|(blank in "[ \t\r\n]{0,40}")| {
        assert_eq!(lex_all(&blank), Ok(vec![]));
    });
}
