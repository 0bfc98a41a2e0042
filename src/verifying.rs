//! Round-trip verifier: trust, but re-lex
//!
//! After reformatting, both the original and the produced text are
//! re-tokenized and compared pairwise. Whitespace, comments and line breaks
//! are excluded from the comparison: reformatting is allowed to move those,
//! and nothing else. Mismatches are reported as warnings and make the check
//! fail, but never abort or alter the already-produced output.
use crate::lexing::{tokenize, Token, TokenKind};

fn significant_tokens(source: &str) -> Vec<Token> {
    tokenize(source, false)
        .into_iter()
        .filter(|t| t.kind != TokenKind::Newline)
        .collect()
}

/// The mismatching token pairs between the original and reformatted text.
///
/// Tokens are equivalent when identical or equal after trimming surrounding
/// whitespace. A length difference surfaces the unpaired tail on one side.
pub fn token_mismatches(original: &str, formatted: &str) -> Vec<(Option<Token>, Option<Token>)> {
    let mut source = significant_tokens(original).into_iter();
    let mut result = significant_tokens(formatted).into_iter();
    let mut mismatches = Vec::new();

    loop {
        match (source.next(), result.next()) {
            (None, None) => break,
            (left, right) => {
                let equivalent = match (&left, &right) {
                    (Some(a), Some(b)) => {
                        a.text == b.text || a.text.trim() == b.text.trim()
                    }
                    _ => false,
                };
                if !equivalent {
                    mismatches.push((left, right));
                }
            }
        }
    }

    mismatches
}

/// Compare grammar tokens of the original and reformatted text, warning on
/// every mismatch. Returns whether the round trip is clean.
pub fn compare(original: &str, formatted: &str) -> bool {
    let mismatches = token_mismatches(original, formatted);
    for (source, result) in &mismatches {
        log::warn!(
            "token mismatch? source={:?} formatted={:?}",
            source.as_ref().map(|t| t.text.as_str()),
            result.as_ref().map(|t| t.text.as_str()),
        );
    }
    mismatches.is_empty()
}
