//! Unit tests for error handling.

use std::rc::Rc;

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::token::tokens::TokenKind;
use crate::Position;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::Colon,
            found: "=".to_string(),
        },
        Position(10, Rc::new("test.lang".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnexpectedToken");
}

#[test]
fn test_error_position() {
    let pos = Position(42, Rc::new("test.lang".to_string()));
    let error = Error::new(
        ErrorImpl::UnknownStatement {
            token: "42".to_string(),
        },
        pos.clone(),
    );

    assert_eq!(error.get_position().0, 42);
}

#[test]
fn test_unexpected_token_tip() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::Identifier,
            found: "{".to_string(),
        },
        Position::null(),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => {
            assert!(tip.contains("Identifier"));
            assert!(tip.contains("{"));
        }
        ErrorTip::None => panic!("expected a suggestion"),
    }
}

#[test]
fn test_unsupported_literal_error() {
    let error = Error::new(
        ErrorImpl::UnsupportedLiteral {
            token: "3.14".to_string(),
        },
        Position::null(),
    );

    assert_eq!(error.get_error_name(), "UnsupportedLiteral");
    assert_eq!(format!("{}", error), "unsupported literal form: \"3.14\"");
}

#[test]
fn test_unknown_value_has_no_tip() {
    let error = Error::new(
        ErrorImpl::UnknownValue {
            token: "(".to_string(),
        },
        Position::null(),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}
