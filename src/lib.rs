//! # larkfmt
//!
//! A reformatter for Lark grammars.
//!
//! The reformatter is a single-pass transducer over the grammar's token
//! stream: it never builds a parse tree, yet reproduces the notation's
//! formatting conventions (header-width alternation alignment, tight-binding
//! quantifiers, directive grouping) and guarantees the result is lexically
//! equivalent to the input via an optional round-trip check.
//!
//! Pipeline: source text -> [lexing] -> [formatting] (validated first by
//! [parsing]) -> reformatted text -> optional [verifying] round trip.

pub mod formatting;
pub mod lexing;
pub mod parsing;
pub mod verifying;

pub use formatting::FormatError;

/// Reformat the provided grammar.
///
/// The input is validated first; reformatting does not proceed on input that
/// is not a syntactically valid grammar.
pub fn reformat(source: &str) -> Result<String, FormatError> {
    parsing::validate(source).map_err(FormatError::InvalidGrammar)?;
    let tokens = lexing::tokenize(source, true);
    formatting::Reformatter::new(tokens).run()
}

/// Reformat the provided grammar and round-trip check the result.
///
/// The boolean reports whether the reformatted text is lexically equivalent
/// to the input; a failed check is advisory (mismatches are logged as
/// warnings) and the formatted text is returned either way.
pub fn reformat_checked(source: &str) -> Result<(String, bool), FormatError> {
    let formatted = reformat(source)?;
    let clean = verifying::compare(source, &formatted);
    Ok((formatted, clean))
}
