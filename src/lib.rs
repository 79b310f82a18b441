//! Syntactic front end for the language.
//!
//! This crate turns a stream of classified tokens into an Abstract Syntax
//! Tree (AST). Tokenization happens upstream: the tokenizer hands over a
//! finite token sequence and this crate never looks at raw source text.
//! Everything downstream of syntax (name resolution, type checking, code
//! generation) consumes the AST produced here and lives elsewhere.
//!
//! The parser is a fail-fast recursive descent: each grammar rule either
//! consumes exactly the tokens of its construct or aborts the whole parse
//! with the first violation found in left-to-right order.

use std::rc::Rc;

pub mod ast;
pub mod errors;
pub mod parser;
pub mod token;

/// A byte offset into a named source file.
#[derive(Debug, Clone)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

/// A source region between two positions.
#[derive(Debug, Clone)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn null() -> Self {
        Span {
            start: Position::null(),
            end: Position::null(),
        }
    }
}
