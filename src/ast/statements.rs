use super::{types::Type, values::Value};

/// The closed set of statement forms.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    VarDecl(VarDeclStmt),
}

/// A variable declaration with a mandatory initializer.
///
/// Uninitialized declarations are not part of the v1 grammar; the `=` and
/// initializer are always present.
#[derive(Debug, Clone, PartialEq)]
pub struct VarDeclStmt {
    pub name: String,
    pub ty: Type,
    pub value: Value,
}
