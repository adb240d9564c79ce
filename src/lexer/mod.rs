//! Lexical analysis for Cypher pattern text.
//!
//! The tokenizer is generated by `logos`. Besides feeding the pattern parser it
//! decides whether a symbolic name can be written bare or must be back-quoted.

pub mod keywords;
pub mod token;

use crate::ast::Span;
use logos::Logos;
use token::{Token, TokenKind};

/// Result of lexical analysis.
///
/// Scanning continues past invalid input so that every bad span is reported.
#[derive(Debug, Clone, PartialEq)]
pub struct LexerResult {
    /// The tokens produced, in source order.
    pub tokens: Vec<Token>,
    /// Spans of input that did not form a valid token.
    pub errors: Vec<Span>,
}

impl LexerResult {
    /// Returns `true` when no invalid input was found.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Tokenizes `source`.
pub fn tokenize(source: &str) -> LexerResult {
    let mut tokens = Vec::new();
    let mut errors = Vec::new();

    for (result, span) in TokenKind::lexer(source).spanned() {
        match result {
            Ok(kind) => tokens.push(Token::new(kind, span)),
            Err(()) => errors.push(span),
        }
    }

    LexerResult { tokens, errors }
}

/// Returns `true` if `name` can be written without back-quotes.
///
/// That is the case when the whole name lexes as a single plain identifier
/// that is not a reserved word.
pub fn is_plain_identifier(name: &str) -> bool {
    is_identifier(name) && !keywords::is_reserved(name)
}

/// Returns `true` if the whole of `name` lexes as one identifier token.
/// Reserved words count; parameter names may use them.
pub fn is_identifier(name: &str) -> bool {
    let mut lexer = TokenKind::lexer(name);
    let first_is_identifier = matches!(lexer.next(), Some(Ok(TokenKind::Identifier(_))))
        && lexer.span() == (0..name.len());
    first_is_identifier && lexer.next().is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_reports_invalid_spans() {
        let result = tokenize("(n:Person) # oops");
        assert!(!result.is_clean());
        assert_eq!(result.errors, vec![11..12]);
        assert_eq!(result.tokens.len(), 6);
    }

    #[test]
    fn plain_identifiers() {
        assert!(is_plain_identifier("Person"));
        assert!(is_plain_identifier("_private1"));
        assert!(!is_plain_identifier("first name"));
        assert!(!is_plain_identifier("1st"));
        assert!(!is_plain_identifier("order"));
        assert!(!is_plain_identifier(""));
        assert!(!is_plain_identifier(" n"));
        assert!(is_identifier("order"));
        assert!(!is_identifier("a.b"));
    }
}
