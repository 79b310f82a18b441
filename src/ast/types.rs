//! Referenced-type representation.
//!
//! A type in the AST is just the identifier the source named plus an
//! optional mutability qualifier. Resolving the name to an actual declared
//! type is deferred to the checking phase; the parser records exactly what
//! was written.

/// A referenced type name with its mutability qualifier.
///
/// Terminal node: holds no relationship to other types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Type {
    pub mutable: bool,
    pub name: String,
}

impl Type {
    pub fn new(mutable: bool, name: impl Into<String>) -> Self {
        Type {
            mutable,
            name: name.into(),
        }
    }
}
