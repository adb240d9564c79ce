//! Token types for Cypher pattern text.

use crate::ast::Spanned;
use logos::{Lexer, Logos};
use smol_str::SmolStr;
use std::fmt;

/// The kind of a lexical token in a Cypher pattern.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum TokenKind {
    // Delimiters
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,

    // Punctuation
    #[token(":")]
    Colon,
    #[token(",")]
    Comma,
    #[token("|")]
    Pipe,
    #[token(".")]
    Dot,
    #[token("*")]
    Star,

    // Relationship arrows
    #[token("-")]
    Dash,
    #[token("->")]
    RightArrow,
    #[token("<-")]
    LeftArrow,

    // Parameters
    #[regex(r"\$[A-Za-z_][A-Za-z0-9_]*", |lex| SmolStr::new(&lex.slice()[1..]))]
    Parameter(SmolStr),

    // Identifiers
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| SmolStr::new(lex.slice()))]
    Identifier(SmolStr),
    #[regex(r"`([^`]|``)*`", delimited_identifier)]
    DelimitedIdentifier(SmolStr),

    // Literals
    #[regex(r"'([^'\\]|\\.)*'", quoted_string)]
    #[regex(r#""([^"\\]|\\.)*""#, quoted_string)]
    StringLiteral(SmolStr),
    #[regex(r"[0-9]+", |lex| lex.slice().parse::<i64>().ok())]
    IntegerLiteral(i64),
    #[regex(r"[0-9]+\.[0-9]+", |lex| lex.slice().parse::<f64>().ok())]
    FloatLiteral(f64),
}

/// A token with its source span.
pub type Token = Spanned<TokenKind>;

fn delimited_identifier(lex: &mut Lexer<'_, TokenKind>) -> SmolStr {
    let slice = lex.slice();
    SmolStr::new(slice[1..slice.len() - 1].replace("``", "`"))
}

fn quoted_string(lex: &mut Lexer<'_, TokenKind>) -> SmolStr {
    let slice = lex.slice();
    let body = &slice[1..slice.len() - 1];
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    SmolStr::new(out)
}

impl TokenKind {
    /// Returns the identifier text for plain and delimited identifiers.
    pub fn identifier(&self) -> Option<&SmolStr> {
        match self {
            TokenKind::Identifier(name) | TokenKind::DelimitedIdentifier(name) => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::LParen => write!(f, "("),
            TokenKind::RParen => write!(f, ")"),
            TokenKind::LBracket => write!(f, "["),
            TokenKind::RBracket => write!(f, "]"),
            TokenKind::LBrace => write!(f, "{{"),
            TokenKind::RBrace => write!(f, "}}"),
            TokenKind::Colon => write!(f, ":"),
            TokenKind::Comma => write!(f, ","),
            TokenKind::Pipe => write!(f, "|"),
            TokenKind::Dot => write!(f, "."),
            TokenKind::Star => write!(f, "*"),
            TokenKind::Dash => write!(f, "-"),
            TokenKind::RightArrow => write!(f, "->"),
            TokenKind::LeftArrow => write!(f, "<-"),
            TokenKind::Parameter(name) => write!(f, "${name}"),
            TokenKind::Identifier(name) => write!(f, "{name}"),
            TokenKind::DelimitedIdentifier(name) => write!(f, "`{name}`"),
            TokenKind::StringLiteral(s) => write!(f, "'{s}'"),
            TokenKind::IntegerLiteral(n) => write!(f, "{n}"),
            TokenKind::FloatLiteral(n) => write!(f, "{n:?}"),
        }
    }
}
