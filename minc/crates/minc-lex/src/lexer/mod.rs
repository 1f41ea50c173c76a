//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct, DFA state tag and dispatch loop
//! - `identifier` - Identifier and keyword lexing
//! - `number` - Integer and decimal literal lexing
//! - `operator` - Lookahead states for `:`, `<` and `>`

mod core;
mod identifier;
mod number;
mod operator;

pub use self::core::Lexer;
pub use identifier::{is_ident_continue, is_ident_start};
