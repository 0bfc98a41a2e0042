//! Lexer for the Lark grammar notation
//!
//! This module turns grammar source text into the flat token stream the
//! reformatter, validator and round-trip verifier operate on.
//!
//! Structure:
//!     Tokenization is done with the logos lexer library over the token kinds
//!     in [tokens]. There is no parse tree anywhere in this crate: layout
//!     decisions are made from the token stream alone, so the lexer keeps the
//!     stream deliberately flat and faithful (every token carries its literal
//!     source text and position).

pub mod base_tokenization;
pub mod cursor;
pub mod tokens;

pub use base_tokenization::tokenize;
pub use cursor::TokenCursor;
pub use tokens::{Token, TokenKind};
