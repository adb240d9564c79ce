//! Token stream navigation shared by the pattern parser.

use crate::ast::Span;
use crate::error::PatternSyntaxError;
use crate::lexer::token::{Token, TokenKind};

/// Errors are boxed to keep `Result` small on the hot path.
pub(crate) type ParseError = Box<PatternSyntaxError>;

pub(crate) type ParseResult<T> = Result<T, ParseError>;

/// Cursor over a token slice plus the text it was read from.
pub(crate) struct TokenStream<'a> {
    source: &'a str,
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> TokenStream<'a> {
    pub(crate) fn new(source: &'a str, tokens: &'a [Token]) -> Self {
        Self {
            source,
            tokens,
            pos: 0,
        }
    }

    /// The current token, or `None` at end of input.
    pub(crate) fn current(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    pub(crate) fn current_kind(&self) -> Option<&'a TokenKind> {
        self.current().map(|token| &token.node)
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    pub(crate) fn advance(&mut self) {
        if !self.is_at_end() {
            self.pos += 1;
        }
    }

    pub(crate) fn check(&self, kind: &TokenKind) -> bool {
        self.current_kind() == Some(kind)
    }

    /// Consumes the current token if it is `kind`.
    pub(crate) fn consume(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes `kind` and returns its span, or fails at the current token.
    pub(crate) fn expect(&mut self, kind: TokenKind) -> ParseResult<Span> {
        if self.check(&kind) {
            let span = self.current_span();
            self.advance();
            Ok(span)
        } else {
            Err(self.error_here(format!("expected `{kind}`, found {}", self.describe_current())))
        }
    }

    /// Span of the current token; an empty span at the end of input.
    pub(crate) fn current_span(&self) -> Span {
        match self.current() {
            Some(token) => token.span.clone(),
            None => self.source.len()..self.source.len(),
        }
    }

    pub(crate) fn previous_span(&self) -> Span {
        match self.pos.checked_sub(1).and_then(|pos| self.tokens.get(pos)) {
            Some(token) => token.span.clone(),
            None => 0..0,
        }
    }

    pub(crate) fn describe_current(&self) -> String {
        match self.current_kind() {
            Some(kind) => format!("`{kind}`"),
            None => "end of input".to_string(),
        }
    }

    pub(crate) fn error_here(&self, message: impl Into<String>) -> ParseError {
        self.error_at(message, self.current_span())
    }

    pub(crate) fn error_at(&self, message: impl Into<String>, span: Span) -> ParseError {
        Box::new(PatternSyntaxError::new(message, self.source, span))
    }
}
