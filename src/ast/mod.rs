/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Top-level node set, functions, prototypes and blocks
/// - statements: Definitions for the statement variants
/// - types: Referenced-type representation
/// - values: Literal value variants
pub mod ast;
pub mod statements;
pub mod types;
pub mod values;
