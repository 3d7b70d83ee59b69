//! Predicates shared by the validators

use crate::expression::{ExpressionParser, Value};

/// Names must contain something other than whitespace
pub(crate) fn has_valid_name(name: &str) -> bool {
    !name.trim().is_empty()
}

/// An `isPresent` expression is valid when it is empty or evaluates to 0 or 1
pub(crate) fn is_valid_is_present(parser: &dyn ExpressionParser, text: &str) -> bool {
    text.trim().is_empty() || matches!(parser.parse_expression(text), Ok(Value::Int(0 | 1)))
}

/// Returns true if `text` evaluates to an integer of at least `min`
pub(crate) fn is_int_at_least(parser: &dyn ExpressionParser, text: &str, min: i128) -> bool {
    matches!(parser.parse_int(text), Ok(value) if value >= min)
}

/// Optional integer expression: empty or an integer of at least `min`
pub(crate) fn is_optional_int_at_least(
    parser: &dyn ExpressionParser,
    text: &str,
    min: i128,
) -> bool {
    text.trim().is_empty() || is_int_at_least(parser, text, min)
}
