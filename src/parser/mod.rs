//! Recursive descent parser producing the AST.
//!
//! Each grammar rule is a free function over the shared token-stream
//! cursor: positioned at the start of its construct, it consumes exactly
//! the tokens belonging to that construct and leaves the cursor just after
//! it. Rules hold no state of their own, so independent parses over
//! distinct streams can run concurrently with nothing shared.
//!
//! Dispatch is a closed match over token kinds everywhere except
//! statements, where one token of lookahead (identifier followed by
//! identifier) picks the variable-declaration rule. Any failure aborts the
//! whole parse; there is no resynchronization.

pub mod parser;
pub mod stmt;
pub mod types;
pub mod values;
