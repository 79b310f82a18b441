//! Literal value leaf nodes.

/// The closed set of literal value forms the grammar recognizes.
///
/// Fractional literals have a token classification but no variant here:
/// the value grammar rejects them outright rather than guessing at
/// rounding semantics.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(IntValue),
    Str(StrValue),
}

/// Bit widths an integer literal can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitWidth {
    B8,
    B16,
    B32,
    B64,
}

/// An integer literal with its width and signedness tag.
///
/// A bare decimal literal defaults to 64-bit unsigned; suffixed forms are
/// expected to select other widths once the tokenizer emits them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntValue {
    pub width: BitWidth,
    pub signed: bool,
    pub value: i64,
}

impl IntValue {
    pub fn new(value: i64) -> Self {
        IntValue {
            width: BitWidth::B64,
            signed: false,
            value,
        }
    }
}

/// A string literal with the closing delimiter already stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrValue {
    pub value: String,
}

impl StrValue {
    pub fn new(value: impl Into<String>) -> Self {
        StrValue {
            value: value.into(),
        }
    }
}
