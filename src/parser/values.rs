//! Literal value parsing.

use crate::{
    ast::values::{IntValue, StrValue, Value},
    errors::errors::{Error, ErrorImpl},
    token::{stream::TokenStream, tokens::TokenKind},
};

/// Dispatches on the current token to a literal rule.
///
/// Fractional literals are classified by the tokenizer but have no value
/// form yet; they are rejected here rather than truncated. On failure the
/// cursor has not moved.
pub fn parse_value(ts: &mut TokenStream) -> Result<Value, Error> {
    match ts.current_kind() {
        TokenKind::Int => Ok(Value::Int(parse_int(ts)?)),
        TokenKind::String => Ok(Value::Str(parse_string(ts)?)),

        TokenKind::Decimal => Err(Error::new(
            ErrorImpl::UnsupportedLiteral {
                token: ts.current().value.clone(),
            },
            ts.position(),
        )),

        _ => Err(Error::new(
            ErrorImpl::UnknownValue {
                token: ts.current().value.clone(),
            },
            ts.position(),
        )),
    }
}

/// Parses a decimal integer literal such as `1337`.
pub fn parse_int(ts: &mut TokenStream) -> Result<IntValue, Error> {
    let token = ts.expect_kind(TokenKind::Int)?;

    let value = match token.value.parse::<i64>() {
        Ok(value) => value,
        Err(_) => {
            return Err(Error::new(
                ErrorImpl::NumberParse {
                    token: token.value.clone(),
                },
                ts.position(),
            ))
        }
    };

    ts.advance();
    Ok(IntValue::new(value))
}

/// Parses a string literal token, stripping the closing delimiter the
/// tokenizer left on the matched text.
pub fn parse_string(ts: &mut TokenStream) -> Result<StrValue, Error> {
    let token = ts.expect_kind(TokenKind::String)?;

    let mut text = token.value.clone();
    text.pop();

    ts.advance();
    Ok(StrValue { value: text })
}
