//! Statement grammar rules.

use crate::{
    ast::{
        ast::Block,
        statements::{Stmt, VarDeclStmt},
    },
    errors::errors::{Error, ErrorImpl},
    token::{stream::TokenStream, tokens::TokenKind},
};

use super::{types::parse_type, values::parse_value};

/// Parses `{ <statements> }`; zero statements is a valid block.
pub fn parse_block(ts: &mut TokenStream) -> Result<Block, Error> {
    ts.skip_over(TokenKind::OpenCurly)?;

    let mut statements = Vec::new();
    while ts.current_kind() != TokenKind::CloseCurly {
        statements.push(parse_stmt(ts)?);
    }

    ts.skip_over(TokenKind::CloseCurly)?;
    Ok(Block { statements })
}

/// Dispatches to a statement rule.
///
/// The only multi-token lookahead in the grammar lives here: an identifier
/// directly followed by another identifier reads as `typeName varName`,
/// which selects the variable-declaration rule. On failure no token has
/// been consumed.
pub fn parse_stmt(ts: &mut TokenStream) -> Result<Stmt, Error> {
    match ts.current_kind() {
        TokenKind::Identifier if ts.peek().kind == TokenKind::Identifier => {
            Ok(Stmt::VarDecl(parse_var_decl_stmt(ts)?))
        }

        _ => Err(Error::new(
            ErrorImpl::UnknownStatement {
                token: ts.current().value.clone(),
            },
            ts.position(),
        )),
    }
}

/// Parses `int foobar = 123`.
///
/// The initializer is mandatory: the v1 grammar has no uninitialized
/// declaration form.
pub fn parse_var_decl_stmt(ts: &mut TokenStream) -> Result<VarDeclStmt, Error> {
    let ty = parse_type(ts)?;
    let name = ts.skip_over(TokenKind::Identifier)?.value;
    ts.skip_over(TokenKind::Assignment)?;
    let value = parse_value(ts)?;

    Ok(VarDeclStmt { name, ty, value })
}
