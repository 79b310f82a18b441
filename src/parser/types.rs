//! Type annotation parsing.

use crate::{
    ast::types::Type,
    errors::errors::Error,
    token::{stream::TokenStream, tokens::TokenKind},
};

/// Parses `mut string` or `string`.
///
/// Consumes exactly two tokens with the mutability qualifier, exactly one
/// without.
pub fn parse_type(ts: &mut TokenStream) -> Result<Type, Error> {
    if ts.current_kind() == TokenKind::Mut {
        ts.advance();
        let name = ts.skip_over(TokenKind::Identifier)?.value;
        Ok(Type {
            mutable: true,
            name,
        })
    } else {
        let name = ts.skip_over(TokenKind::Identifier)?.value;
        Ok(Type {
            mutable: false,
            name,
        })
    }
}
