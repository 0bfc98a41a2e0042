//! Token definitions for the Lark grammar notation
//!
//! This module defines all the tokens that can be produced by the grammar lexer.
//! The tokens are defined using the logos derive macro for efficient tokenization.
//!
//! Token kinds mirror the lexical structure of a .lark file: rule and terminal
//! names (distinguished by case of the leading letter), literals (strings,
//! regexps, numbers), the bracket pairs, the alternation bar, and a shared
//! `Special` kind for the multi-character pseudo-tokens that are dispatched on
//! their literal text (`->`, `..` and the `%`-directive keywords).
use logos::Logos;

/// Lexical kind of a token in the grammar notation.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Multi-character pseudo-tokens, resolved by literal text during dispatch
    #[token("->")]
    #[token("..")]
    #[token("%import")]
    #[token("%ignore")]
    #[token("%override")]
    #[token("%declare")]
    Special,

    // Rule names start with a lowercase letter, optionally prefixed by the
    // keep-all-tokens (!) and inline (?/_) markers
    #[regex(r"!?[_?]?[a-z][_a-z0-9]*")]
    Rule,

    // Terminal names start with an uppercase letter
    #[regex(r"_?[A-Z][_A-Z0-9]*")]
    Terminal,

    #[regex(r"[+-]?[0-9]+")]
    Number,

    // Double-quoted string, optional case-insensitive suffix
    #[regex(r#""(\\.|[^"\\])*"i?"#)]
    String,

    // Slash-delimited regexp with optional flags
    #[regex(r"/(\\.|[^/\\\n])+/[imslux]*")]
    Regexp,

    #[regex(r"[+*~!?]")]
    Operator,

    #[token(":")]
    Colon,
    #[token(".")]
    Dot,
    #[token(",")]
    Comma,
    #[token("(")]
    Lpar,
    #[token(")")]
    Rpar,
    #[token("[")]
    Lsqb,
    #[token("]")]
    Rsqb,
    #[token("{")]
    Lbrace,
    #[token("}")]
    Rbrace,
    #[token("|")]
    Vbar,

    // A run of newlines together with any indentation that follows, like
    // Lark's _NL terminal; the reformatter re-derives all line layout
    #[regex(r"(\r?\n)[ \t\r\n]*")]
    Newline,

    #[regex(r"[ \t]+")]
    Whitespace,

    #[regex(r"//[^\n]*")]
    Comment,

    // Produced for input the lexer has no rule for; never matched by logos
    Unknown,
}

/// A lexed token: kind, literal text and 1-based source position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: usize,
    pub column: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize, column: usize) -> Self {
        Token {
            kind,
            text: text.into(),
            line,
            column,
        }
    }

    /// Check if this token is inline whitespace (spaces and tabs, not newlines)
    pub fn is_inline_whitespace(&self) -> bool {
        self.kind == TokenKind::Whitespace
    }
}
