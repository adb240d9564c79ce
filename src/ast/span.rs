//! Byte spans into pattern source text.

use std::ops::Range;

/// A byte range in source text.
pub type Span = Range<usize>;

/// A value paired with the span it was read from.
///
/// Tokens produced by the lexer are spanned so that pattern syntax errors can
/// point at the offending input.
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    /// The wrapped value.
    pub node: T,
    /// Where the value appears in the source.
    pub span: Span,
}

impl<T> Spanned<T> {
    /// Creates a new spanned value.
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }

    /// Maps the inner value while preserving the span.
    pub fn map<U, F>(self, f: F) -> Spanned<U>
    where
        F: FnOnce(T) -> U,
    {
        Spanned {
            node: f(self.node),
            span: self.span,
        }
    }

    /// Extracts the inner value, discarding the span.
    pub fn into_inner(self) -> T {
        self.node
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spanned_map_keeps_span() {
        let spanned = Spanned::new(5, 10..15);
        let mapped = spanned.map(|x| x * 2);
        assert_eq!(mapped.node, 10);
        assert_eq!(mapped.span, 10..15);
    }

    #[test]
    fn spanned_into_inner() {
        let spanned = Spanned::new("person", 0..6);
        assert_eq!(spanned.into_inner(), "person");
    }
}
