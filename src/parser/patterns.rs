//! Recursive descent over pattern tokens.
//!
//! ```text
//! pattern      := element (',' element)*
//! element      := node (relationship node)*
//! node         := '(' name? (':' label)* properties? ')'
//! relationship := ('<-' | '-') ('[' name? types? properties? ']')? ('->' | '-')
//! types        := ':' type ('|' ':'? type)*
//! properties   := '{' (key ':' value (',' key ':' value)*)? '}'
//! value        := parameter | string | '-'? number | true | false | null
//! ```

use super::base::{ParseResult, TokenStream};
use crate::ast::{
    Direction, Expression, Hop, Literal, NodePattern, Pattern, PatternElement, Properties,
    PropertyEntry, RelationshipChain, RelationshipPattern, SymbolicName,
};
use crate::lexer::keywords::{LiteralKeyword, lookup_literal_keyword};
use crate::lexer::token::{Token, TokenKind};

pub(crate) struct PatternParser<'a> {
    stream: TokenStream<'a>,
}

impl<'a> PatternParser<'a> {
    pub(crate) fn new(source: &'a str, tokens: &'a [Token]) -> Self {
        Self {
            stream: TokenStream::new(source, tokens),
        }
    }

    pub(crate) fn parse_pattern(&mut self) -> ParseResult<Pattern> {
        let mut elements = vec![self.parse_element()?];
        while self.stream.consume(&TokenKind::Comma) {
            elements.push(self.parse_element()?);
        }
        if !self.stream.is_at_end() {
            return Err(self.stream.error_here(format!(
                "unexpected {} after pattern",
                self.stream.describe_current()
            )));
        }
        Ok(Pattern::new(elements))
    }

    fn parse_element(&mut self) -> ParseResult<PatternElement> {
        let start = self.parse_node()?;
        let mut hops = Vec::new();
        while self.stream.check(&TokenKind::Dash) || self.stream.check(&TokenKind::LeftArrow) {
            let relationship = self.parse_relationship()?;
            let node = self.parse_node()?;
            hops.push(Hop { relationship, node });
        }
        if hops.is_empty() {
            Ok(PatternElement::Node(start))
        } else {
            Ok(PatternElement::Chain(RelationshipChain { start, hops }))
        }
    }

    fn parse_node(&mut self) -> ParseResult<NodePattern> {
        self.stream.expect(TokenKind::LParen)?;
        let name = self.parse_optional_name();
        let mut labels = Vec::new();
        while self.stream.consume(&TokenKind::Colon) {
            labels.push(self.expect_name("label")?);
        }
        let properties = self.parse_optional_properties()?;
        self.stream.expect(TokenKind::RParen)?;
        Ok(NodePattern {
            name,
            labels,
            properties,
        })
    }

    fn parse_relationship(&mut self) -> ParseResult<RelationshipPattern> {
        let start = self.stream.current_span().start;
        let incoming = if self.stream.consume(&TokenKind::LeftArrow) {
            true
        } else {
            self.stream.expect(TokenKind::Dash)?;
            false
        };

        let mut name = None;
        let mut types = Vec::new();
        let mut properties = None;
        if self.stream.consume(&TokenKind::LBracket) {
            name = self.parse_optional_name();
            if self.stream.consume(&TokenKind::Colon) {
                types.push(self.expect_name("relationship type")?);
                while self.stream.consume(&TokenKind::Pipe) {
                    self.stream.consume(&TokenKind::Colon);
                    types.push(self.expect_name("relationship type")?);
                }
            }
            properties = self.parse_optional_properties()?;
            self.stream.expect(TokenKind::RBracket)?;
        }

        let outgoing = if self.stream.consume(&TokenKind::RightArrow) {
            true
        } else if self.stream.consume(&TokenKind::Dash) {
            false
        } else {
            return Err(self.stream.error_here(format!(
                "expected `-` or `->` to close the relationship, found {}",
                self.stream.describe_current()
            )));
        };

        let direction = match (incoming, outgoing) {
            (false, false) => Direction::Undirected,
            (false, true) => Direction::Outgoing,
            (true, false) => Direction::Incoming,
            (true, true) => {
                let span = start..self.stream.previous_span().end;
                return Err(Box::new(
                    (*self
                        .stream
                        .error_at("a relationship cannot point in both directions", span))
                    .with_help("use `-[...]-` for an undirected relationship"),
                ));
            }
        };

        Ok(RelationshipPattern {
            name,
            types,
            properties,
            direction,
        })
    }

    fn parse_optional_properties(&mut self) -> ParseResult<Option<Properties>> {
        if !self.stream.check(&TokenKind::LBrace) {
            return Ok(None);
        }
        self.stream.advance();
        let mut entries = Vec::new();
        if !self.stream.check(&TokenKind::RBrace) {
            loop {
                let key = self.expect_name("property key")?;
                self.stream.expect(TokenKind::Colon)?;
                let value = self.parse_value()?;
                entries.push(PropertyEntry::new(key, value));
                if !self.stream.consume(&TokenKind::Comma) {
                    break;
                }
            }
        }
        self.stream.expect(TokenKind::RBrace)?;
        Ok(Some(Properties::new(entries)))
    }

    fn parse_value(&mut self) -> ParseResult<Expression> {
        let value = match self.stream.current_kind() {
            Some(TokenKind::Parameter(name)) => Expression::Parameter(SymbolicName::new(name.clone())),
            Some(TokenKind::StringLiteral(value)) => {
                Expression::Literal(Literal::String(value.clone()))
            }
            Some(TokenKind::IntegerLiteral(value)) => Expression::Literal(Literal::Integer(*value)),
            Some(TokenKind::FloatLiteral(value)) => Expression::Literal(Literal::Float(*value)),
            Some(TokenKind::Dash) => {
                self.stream.advance();
                return match self.stream.current_kind() {
                    Some(TokenKind::IntegerLiteral(value)) => {
                        let literal = Literal::Integer(-*value);
                        self.stream.advance();
                        Ok(Expression::Literal(literal))
                    }
                    Some(TokenKind::FloatLiteral(value)) => {
                        let literal = Literal::Float(-*value);
                        self.stream.advance();
                        Ok(Expression::Literal(literal))
                    }
                    _ => Err(self.stream.error_here(format!(
                        "expected a number after `-`, found {}",
                        self.stream.describe_current()
                    ))),
                };
            }
            Some(TokenKind::Identifier(word)) => match lookup_literal_keyword(word) {
                Some(LiteralKeyword::True) => Expression::Literal(Literal::Boolean(true)),
                Some(LiteralKeyword::False) => Expression::Literal(Literal::Boolean(false)),
                Some(LiteralKeyword::Null) => Expression::Literal(Literal::Null),
                None => {
                    return Err(Box::new(
                        (*self
                            .stream
                            .error_here(format!("`{word}` is not a property value")))
                        .with_help(format!("use a parameter such as `${word}` for dynamic values")),
                    ));
                }
            },
            _ => {
                return Err(self.stream.error_here(format!(
                    "expected a property value, found {}",
                    self.stream.describe_current()
                )));
            }
        };
        self.stream.advance();
        Ok(value)
    }

    fn parse_optional_name(&mut self) -> Option<SymbolicName> {
        let name = self.stream.current_kind()?.identifier()?.clone();
        self.stream.advance();
        Some(SymbolicName::new(name))
    }

    fn expect_name(&mut self, what: &str) -> ParseResult<SymbolicName> {
        match self.parse_optional_name() {
            Some(name) => Ok(name),
            None => Err(self.stream.error_here(format!(
                "expected a {what}, found {}",
                self.stream.describe_current()
            ))),
        }
    }
}
