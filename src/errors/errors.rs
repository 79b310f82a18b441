use std::fmt::Display;

use thiserror::Error;

use crate::{token::tokens::TokenKind, Position};

/// A syntax error: what went wrong and where.
///
/// The variants live in [`ErrorImpl`]; this wrapper pins the error to the
/// source position of the offending token so a driver can point at it.
#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedTopLevel { .. } => "UnexpectedTopLevel",
            ErrorImpl::UnknownStatement { .. } => "UnknownStatement",
            ErrorImpl::UnknownValue { .. } => "UnknownValue",
            ErrorImpl::UnsupportedLiteral { .. } => "UnsupportedLiteral",
            ErrorImpl::NumberParse { .. } => "NumberParse",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { expected, found } => ErrorTip::Suggestion(format!(
                "Expected `{}` here, found `{}`",
                expected, found
            )),
            ErrorImpl::UnexpectedTopLevel { token } => ErrorTip::Suggestion(format!(
                "`{}` cannot start a top-level declaration, only `fn` can",
                token
            )),
            ErrorImpl::UnknownStatement { token } => ErrorTip::Suggestion(format!(
                "`{}` does not start a statement, did you mean a variable declaration?",
                token
            )),
            ErrorImpl::UnknownValue { .. } => ErrorTip::None,
            ErrorImpl::UnsupportedLiteral { token } => ErrorTip::Suggestion(format!(
                "Fractional literal `{}` is not supported, use a whole number",
                token
            )),
            ErrorImpl::NumberParse { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("expected {expected}, found {found:?}")]
    UnexpectedToken { expected: TokenKind, found: String },
    #[error("token {token:?} is of an unexpected kind for the top level")]
    UnexpectedTopLevel { token: String },
    #[error("unknown statement type at {token:?}")]
    UnknownStatement { token: String },
    #[error("unknown value type at {token:?}")]
    UnknownValue { token: String },
    #[error("unsupported literal form: {token:?}")]
    UnsupportedLiteral { token: String },
    #[error("error parsing number: {token:?}")]
    NumberParse { token: String },
}
