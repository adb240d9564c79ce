//! Parsing of textual node and relationship patterns.
//!
//! Patterns such as `(p:Person {name: $name})-[:ACTED_IN]->(m:Movie)` are
//! turned into the same [`Pattern`] values the builder produces. Property
//! values are restricted to parameters and constants.

mod base;
mod patterns;

use std::str::FromStr;

use tracing::trace;

use crate::ast::Pattern;
use crate::error::PatternSyntaxError;
use crate::lexer::tokenize;
use patterns::PatternParser;

/// Parses a comma separated list of pattern elements.
///
/// ```
/// use cypher_dsl::parser::parse_pattern;
///
/// let pattern = parse_pattern("(p:Person)-[:KNOWS]->(q:Person)").unwrap();
/// assert_eq!(pattern.elements().len(), 1);
/// ```
pub fn parse_pattern(source: &str) -> Result<Pattern, PatternSyntaxError> {
    let lexed = tokenize(source);
    if let Some(span) = lexed.errors.first() {
        let text = source.get(span.clone()).unwrap_or_default();
        if !text.is_empty() && text.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(PatternSyntaxError::new(
                format!("integer literal `{text}` is out of range"),
                source,
                span.clone(),
            )
            .with_help("integers must fit in a signed 64-bit value; use a parameter instead"));
        }
        return Err(PatternSyntaxError::new(
            format!("unexpected input `{text}`"),
            source,
            span.clone(),
        ));
    }
    if lexed.tokens.is_empty() {
        return Err(
            PatternSyntaxError::new("pattern is empty", source, 0..source.len())
                .with_help("a pattern starts with a node, e.g. `(n:Label)`"),
        );
    }

    let pattern = PatternParser::new(source, &lexed.tokens)
        .parse_pattern()
        .map_err(|err| *err)?;
    trace!(
        tokens = lexed.tokens.len(),
        elements = pattern.elements().len(),
        "parsed pattern"
    );
    Ok(pattern)
}

impl Pattern {
    /// See [`parse_pattern`].
    pub fn parse(source: &str) -> Result<Self, PatternSyntaxError> {
        parse_pattern(source)
    }
}

impl FromStr for Pattern {
    type Err = PatternSyntaxError;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        parse_pattern(source)
    }
}
