//! Reserved-word table.
//!
//! Consulted once an identifier's full spelling is known; matching is exact
//! and case-sensitive.

use crate::token::TokenKind;

/// Every reserved spelling with the kind it lexes to.
pub const KEYWORDS: [(&str, TokenKind); 11] = [
    ("print", TokenKind::Print),
    ("var", TokenKind::Var),
    ("func", TokenKind::Func),
    ("if", TokenKind::If),
    ("then", TokenKind::Then),
    ("else", TokenKind::Else),
    ("while", TokenKind::While),
    ("void", TokenKind::Void),
    ("begin", TokenKind::Begin),
    ("end", TokenKind::End),
    ("int", TokenKind::Int),
];

/// Looks up the keyword kind for an identifier spelling.
///
/// # Example
///
/// ```
/// use minc_lex::{keyword_from_ident, TokenKind};
///
/// assert_eq!(keyword_from_ident("while"), Some(TokenKind::While));
/// assert_eq!(keyword_from_ident("While"), None);
/// assert_eq!(keyword_from_ident("counter"), None);
/// ```
pub fn keyword_from_ident(ident: &str) -> Option<TokenKind> {
    KEYWORDS
        .iter()
        .find(|(spelling, _)| *spelling == ident)
        .map(|&(_, kind)| kind)
}
