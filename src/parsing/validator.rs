//! Token-level validity check for grammar source text
//!
//! Reformatting must not proceed on input that is not a syntactically valid
//! grammar, so the formatter runs this parser first. It recognizes statement
//! structure only: definitions (header, optional priority or template
//! parameters, colon, alternation body with balanced groups) and directive
//! lines. It deliberately knows nothing about grammar semantics; undefined
//! references and the like are out of scope.
use chumsky::prelude::*;

use crate::lexing::{tokenize, Token, TokenKind};

/// A syntax error found while checking the input grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrammarError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

impl std::fmt::Display for GrammarError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.line > 0 {
            write!(
                f,
                "{} on line {} column {}",
                self.message, self.line, self.column
            )
        } else {
            write!(f, "{}", self.message)
        }
    }
}

impl std::error::Error for GrammarError {}

fn kind(kind: TokenKind) -> impl Parser<Token, Token, Error = Simple<Token>> + Clone {
    filter(move |t: &Token| t.kind == kind)
}

fn special(text: &'static str) -> impl Parser<Token, Token, Error = Simple<Token>> + Clone {
    filter(move |t: &Token| t.kind == TokenKind::Special && t.text == text)
}

fn grammar() -> impl Parser<Token, (), Error = Simple<Token>> {
    let name = kind(TokenKind::Rule).or(kind(TokenKind::Terminal));

    let body = recursive(|body| {
        let group = choice((
            body.clone()
                .delimited_by(kind(TokenKind::Lpar), kind(TokenKind::Rpar)),
            body.clone()
                .delimited_by(kind(TokenKind::Lsqb), kind(TokenKind::Rsqb)),
            body.clone()
                .delimited_by(kind(TokenKind::Lbrace), kind(TokenKind::Rbrace)),
        ));

        let atom = choice((
            kind(TokenKind::Rule).ignored(),
            kind(TokenKind::Terminal).ignored(),
            kind(TokenKind::String).ignored(),
            kind(TokenKind::Regexp).ignored(),
            kind(TokenKind::Number).ignored(),
            kind(TokenKind::Comma).ignored(),
            special("..").ignored(),
            group,
        ));

        let item = atom.then_ignore(kind(TokenKind::Operator).repeated());
        let alias = special("->").ignore_then(name.clone()).ignored();
        let alternative = item
            .repeated()
            .at_least(1)
            .ignored()
            .then_ignore(alias.or_not());

        // Alternatives may continue past line breaks before their bar; a
        // dropped comment line leaves two newline tokens, so accept a run
        let bar = kind(TokenKind::Newline)
            .repeated()
            .then(kind(TokenKind::Vbar))
            .ignored();
        alternative.separated_by(bar).at_least(1).ignored()
    });

    let priority = kind(TokenKind::Dot).then(kind(TokenKind::Number)).ignored();
    let template_params = kind(TokenKind::Rule)
        .separated_by(kind(TokenKind::Comma))
        .at_least(1)
        .delimited_by(kind(TokenKind::Lbrace), kind(TokenKind::Rbrace))
        .ignored();

    let definition = name
        .ignored()
        .then_ignore(template_params.or_not())
        .then_ignore(priority.or_not())
        .then_ignore(kind(TokenKind::Colon))
        .then_ignore(body);

    // Directive payloads are free-form to end of line; only the four
    // %-keywords may head a statement, not the other pseudo-tokens
    let directive = choice((
        special("%import"),
        special("%ignore"),
        special("%override"),
        special("%declare"),
    ))
    .then_ignore(filter(|t: &Token| t.kind != TokenKind::Newline).repeated())
    .ignored();

    let statement = directive.or(definition);
    let line_sep = kind(TokenKind::Newline).repeated().at_least(1).ignored();

    statement
        .separated_by(line_sep)
        .allow_leading()
        .allow_trailing()
        .ignored()
        .then_ignore(end())
}

/// Check that `source` is a syntactically valid grammar.
pub fn validate(source: &str) -> Result<(), GrammarError> {
    let tokens = tokenize(source, false);
    let len = tokens.len();
    let stream = chumsky::Stream::from_iter(
        len..len + 1,
        tokens.into_iter().enumerate().map(|(i, t)| (t, i..i + 1)),
    );

    match grammar().parse(stream) {
        Ok(()) => Ok(()),
        Err(errors) => {
            let first = errors.into_iter().next().expect("parse failed with no error");
            let (message, line, column) = match first.found() {
                Some(token) => (
                    format!("unexpected token {:?}", token.text),
                    token.line,
                    token.column,
                ),
                None => ("unexpected end of input".to_string(), 0, 0),
            };
            Err(GrammarError {
                message,
                line,
                column,
            })
        }
    }
}
