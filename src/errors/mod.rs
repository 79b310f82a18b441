//! Error types for the syntactic front end.
//!
//! This module defines the failure conditions a parse can end in. It
//! includes:
//!
//! - Error structures with source position information
//! - Specific error variants for each way a grammar rule can reject
//! - Error naming and suggestion text for a driver to render
//!
//! A parse never recovers: the first error produced anywhere in the rule
//! stack propagates unchanged to the caller.

pub mod errors;

#[cfg(test)]
mod tests;
