use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("fn", TokenKind::Fn);
        map.insert("mut", TokenKind::Mut);
        map
    };
}

/// The closed set of token classifications the grammar dispatches on.
///
/// The tokenizer assigns exactly one kind to every token it emits; the
/// parser matches on kinds exhaustively, so adding a kind here forces
/// every dispatch site to be revisited.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Int,
    Decimal,
    String,
    Identifier,

    Colon,
    Assignment, // =
    Comma,

    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,

    // Reserved
    Fn,
    Mut,
}

impl TokenKind {
    /// Looks up the reserved-word kind for an identifier-shaped lexeme.
    ///
    /// Returns `None` when the text is an ordinary identifier.
    pub fn reserved(text: &str) -> Option<TokenKind> {
        RESERVED_LOOKUP.get(text).copied()
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// One classified lexical unit: kind, exact matched source text and span.
#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>, span: Span) -> Self {
        Token {
            kind,
            value: value.into(),
            span,
        }
    }

    /// The EOF sentinel the stream hands out once the cursor runs past the
    /// last real token.
    pub fn eof() -> Self {
        Token::new(TokenKind::EOF, "", Span::null())
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\nvalue: {}}}", self.kind, self.value)
    }
}
