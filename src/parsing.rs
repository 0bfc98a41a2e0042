//! Validity checking for grammar source text
//!
//! The reformatter is lexical, not syntactic, so it refuses to run on input
//! it cannot trust: the validator in this module is the gate. It is built
//! with chumsky parser combinators over the same token stream the formatter
//! consumes.

pub mod validator;

pub use validator::{validate, GrammarError};
