//! Core AST definitions.
//!
//! Every node here is a plain immutable value: once a constructor returns,
//! the tree is never mutated, so a finished AST can be shared freely
//! between threads without synchronization. Nodes hold no references back
//! into the token stream they were parsed from.

use std::slice::Iter;

use super::{statements::Stmt, types::Type};

/// The parsed contents of one source file: every top-level declaration in
/// source order.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub items: Vec<Item>,
}

impl Program {
    pub fn iter(&self) -> Iter<'_, Item> {
        self.items.iter()
    }
}

/// The closed set of declarations that can appear at the top level.
///
/// Function declarations are the only variant today; imports and type
/// declarations slot in here without touching the rest of the grammar.
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    Function(Function),
}

/// A top-level function declaration: its signature plus its body.
///
/// Owns both children exclusively.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub prototype: Prototype,
    pub body: Block,
}

/// A function's external signature, independent of its body.
///
/// Argument order is significant: declaration order is the call-site order
/// contract for every later pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Prototype {
    pub name: String,
    pub args: Vec<Arg>,
    pub return_type: Type,
}

/// One formal parameter, owned by the prototype that declares it.
#[derive(Debug, Clone, PartialEq)]
pub struct Arg {
    pub name: String,
    pub ty: Type,
}

impl Arg {
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Arg {
            name: name.into(),
            ty,
        }
    }
}

/// A brace-delimited statement list; order is execution order.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub statements: Vec<Stmt>,
}

impl Block {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.statements.iter()
    }
}
