//! Top-level grammar rules: programs, items, functions and prototypes.

use std::rc::Rc;

use crate::{
    ast::ast::{Arg, Function, Item, Program, Prototype},
    errors::errors::{Error, ErrorImpl},
    token::{
        stream::TokenStream,
        tokens::{Token, TokenKind},
    },
};

use super::{stmt::parse_block, types::parse_type};

/// Parses a full token sequence into a [`Program`].
///
/// This is the main entry point: it wraps the tokens in a stream cursor
/// and parses top-level items until the input is exhausted. The first
/// syntax error anywhere aborts the parse.
pub fn parse(tokens: Vec<Token>, file: Rc<String>) -> Result<Program, Error> {
    let mut ts = TokenStream::new(tokens, file);

    let mut items = Vec::new();
    while ts.has_tokens() {
        items.push(parse_item(&mut ts)?);
    }

    Ok(Program { items })
}

/// Dispatches on the current token to a top-level declaration rule.
///
/// `fn` is the only recognized opener today; the match is the single place
/// to extend when imports or type declarations are added.
pub fn parse_item(ts: &mut TokenStream) -> Result<Item, Error> {
    match ts.current_kind() {
        TokenKind::Fn => Ok(Item::Function(parse_function(ts)?)),

        _ => Err(Error::new(
            ErrorImpl::UnexpectedTopLevel {
                token: ts.current().value.clone(),
            },
            ts.position(),
        )),
    }
}

/// Parses `fn <prototype> <block>`.
pub fn parse_function(ts: &mut TokenStream) -> Result<Function, Error> {
    ts.skip_over(TokenKind::Fn)?;
    let prototype = parse_prototype(ts)?;
    let body = parse_block(ts)?;
    Ok(Function { prototype, body })
}

/// Parses a function signature: `hello(world: mut string) string`.
///
/// Arguments are comma separated, zero or more; a trailing comma is a
/// syntax error (after a comma another argument is required).
pub fn parse_prototype(ts: &mut TokenStream) -> Result<Prototype, Error> {
    let name = ts.skip_over(TokenKind::Identifier)?.value;
    ts.skip_over(TokenKind::OpenParen)?;

    let mut args = Vec::new();
    if ts.current_kind() != TokenKind::CloseParen {
        args.push(parse_arg(ts)?);
        while ts.current_kind() == TokenKind::Comma {
            ts.advance();
            args.push(parse_arg(ts)?);
        }
    }

    ts.skip_over(TokenKind::CloseParen)?;
    let return_type = parse_type(ts)?;

    Ok(Prototype {
        name,
        args,
        return_type,
    })
}

/// Parses one formal parameter: `world: mut string`.
pub fn parse_arg(ts: &mut TokenStream) -> Result<Arg, Error> {
    let name = ts.skip_over(TokenKind::Identifier)?.value;
    ts.skip_over(TokenKind::Colon)?;
    let ty = parse_type(ts)?;
    Ok(Arg { name, ty })
}
