//! Token data model and stream cursor.
//!
//! Tokens are produced by the tokenizer upstream of this crate; the parser
//! only ever sees them through the [`stream::TokenStream`] cursor defined
//! here. This module owns:
//!
//! - The closed token classification ([`tokens::TokenKind`])
//! - The token value itself (kind + matched source text + span)
//! - The reserved-word lookup the tokenizer classifies keywords with
//! - The single-pass cursor the grammar rules consume tokens through

pub mod stream;
pub mod tokens;
