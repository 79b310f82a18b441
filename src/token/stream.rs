//! Single-pass cursor over a finite token sequence.
//!
//! The stream is the only mutable state a parse carries: every grammar rule
//! takes `&mut TokenStream` and either consumes exactly the tokens of its
//! construct or fails without recovery. The cursor moves strictly left to
//! right; the one permitted lookahead is [`TokenStream::peek`].

use std::rc::Rc;

use crate::{
    errors::errors::{Error, ErrorImpl},
    token::tokens::{Token, TokenKind},
    Position,
};

/// Cursor over the token sequence of one source file.
///
/// `current` and `peek` are total: past the end of the real tokens the
/// stream hands out an EOF sentinel, so the grammar rules can always
/// inspect `current().kind` before deciding whether to advance.
pub struct TokenStream {
    tokens: Vec<Token>,
    pos: usize,
    file: Rc<String>,
    eof: Token,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>, file: Rc<String>) -> Self {
        TokenStream {
            tokens,
            pos: 0,
            file,
            eof: Token::eof(),
        }
    }

    /// Returns the current token without advancing.
    pub fn current(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or(&self.eof)
    }

    /// Returns the kind of the current token.
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    /// Returns the token one position ahead of the cursor without moving it.
    pub fn peek(&self) -> &Token {
        self.tokens.get(self.pos + 1).unwrap_or(&self.eof)
    }

    /// Moves the cursor forward by one token and returns the token passed
    /// over. Saturates at the end of the sequence.
    pub fn advance(&mut self) -> &Token {
        let previous = self.pos;
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        self.tokens.get(previous).unwrap_or(&self.eof)
    }

    /// Returns the current token if its kind matches, without advancing.
    pub fn expect_kind(&self, expected: TokenKind) -> Result<&Token, Error> {
        let token = self.current();
        if token.kind != expected {
            Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected,
                    found: token.value.clone(),
                },
                self.position(),
            ))
        } else {
            Ok(token)
        }
    }

    /// Validates the current token's kind and advances past it.
    pub fn skip_over(&mut self, expected: TokenKind) -> Result<Token, Error> {
        let token = self.expect_kind(expected)?.clone();
        self.advance();
        Ok(token)
    }

    /// Returns true while the cursor is on a real, non-EOF token.
    pub fn has_tokens(&self) -> bool {
        self.pos < self.tokens.len() && self.current_kind() != TokenKind::EOF
    }

    /// The source position of the current token, for error construction.
    pub fn position(&self) -> Position {
        match self.tokens.get(self.pos) {
            Some(token) => token.span.start.clone(),
            None => match self.tokens.last() {
                Some(token) => token.span.end.clone(),
                None => Position(0, Rc::clone(&self.file)),
            },
        }
    }
}
