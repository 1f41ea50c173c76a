//! Token definitions.
//!
//! A [`Token`] pairs a [`TokenKind`] with a typed [`TokenValue`] and the
//! position of the token's first character.

use std::fmt;

use minc_util::Span;

/// The closed set of token categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Arithmetic operator: `+`, `-`, `*`, `/`
    Op,
    /// Relational operator: `=`, `<`, `>`, `<=`, `>=`, `<>`
    Relop,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `;`
    Semi,
    /// `,`
    Comma,
    /// `:=`
    Assign,
    /// `::`
    TypeOf,
    /// Integer or decimal literal
    Num,
    /// Identifier
    Id,

    // Reserved words
    /// `print`
    Print,
    /// `var`
    Var,
    /// `func`
    Func,
    /// `if`
    If,
    /// `then`
    Then,
    /// `else`
    Else,
    /// `while`
    While,
    /// `void`
    Void,
    /// `begin`
    Begin,
    /// `end`
    End,
    /// `int`
    Int,
}

impl TokenKind {
    /// Upper-case name of the kind, as printed by the driver.
    ///
    /// # Example
    ///
    /// ```
    /// use minc_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::Relop.name(), "RELOP");
    /// assert_eq!(TokenKind::TypeOf.name(), "TYPEOF");
    /// ```
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Op => "OP",
            TokenKind::Relop => "RELOP",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::Semi => "SEMI",
            TokenKind::Comma => "COMMA",
            TokenKind::Assign => "ASSIGN",
            TokenKind::TypeOf => "TYPEOF",
            TokenKind::Num => "NUM",
            TokenKind::Id => "ID",
            TokenKind::Print => "PRINT",
            TokenKind::Var => "VAR",
            TokenKind::Func => "FUNC",
            TokenKind::If => "IF",
            TokenKind::Then => "THEN",
            TokenKind::Else => "ELSE",
            TokenKind::While => "WHILE",
            TokenKind::Void => "VOID",
            TokenKind::Begin => "BEGIN",
            TokenKind::End => "END",
            TokenKind::Int => "INT",
        }
    }

    /// Returns true for the reserved-word kinds.
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::Print
                | TokenKind::Var
                | TokenKind::Func
                | TokenKind::If
                | TokenKind::Then
                | TokenKind::Else
                | TokenKind::While
                | TokenKind::Void
                | TokenKind::Begin
                | TokenKind::End
                | TokenKind::Int
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Kind-dependent attribute of a token.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenValue {
    /// Lexeme of punctuation, operators, keywords and identifiers
    Text(String),
    /// Value of an integer literal
    Integer(i64),
    /// Value of a decimal literal
    Float(f64),
}

impl From<&str> for TokenValue {
    fn from(text: &str) -> Self {
        TokenValue::Text(text.to_owned())
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenValue::Text(text) => f.write_str(text),
            TokenValue::Integer(value) => write!(f, "{}", value),
            // `{:?}` keeps the fractional part of whole values ("3.0", not "3")
            TokenValue::Float(value) => write!(f, "{:?}", value),
        }
    }
}

/// A lexed token.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    /// Token category
    pub kind: TokenKind,
    /// Kind-dependent attribute
    pub value: TokenValue,
    /// Position of the token's first character
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    pub fn new(kind: TokenKind, value: TokenValue, span: Span) -> Self {
        Self { kind, value, span }
    }

    /// Line of the token's first character.
    pub fn line(&self) -> u32 {
        self.span.line
    }

    /// Column of the token's first character.
    pub fn column(&self) -> u32 {
        self.span.column
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}) at {}", self.kind, self.value, self.span)
    }
}
