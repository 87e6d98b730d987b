//! Raw Attribute Text
//!
//! Predicates over the attribute as written in the template source
//! (`name="value"`), before the tokenizer unwrapped its value.

use crate::chars;
use crate::config::ExpressionConfig;
use super::expression::DEFAULT_EXPRESSION_MATCHER;

/// Everything after the first `=`, `None` for a bare attribute
pub fn raw_attribute_value(raw: &str) -> Option<&str> {
    raw.split_once(chars::EQ).map(|(_, value)| value)
}

/// `name="value"`
pub fn is_quoted_attribute(raw: &str) -> bool {
    match raw_attribute_value(raw) {
        Some(value) if !value.is_empty() => {
            value.starts_with(chars::DQ) && value.ends_with(chars::DQ)
        }
        _ => false,
    }
}

/// The source text holds no `{`...`}` pair, so the tokenizer's reading of the
/// value is already final
pub fn is_escaped_attribute(raw: &str) -> bool {
    is_escaped_attribute_with(raw, DEFAULT_EXPRESSION_MATCHER.config())
}

pub fn is_escaped_attribute_with(raw: &str, symbols: &ExpressionConfig) -> bool {
    match raw_attribute_value(raw) {
        Some(value) if !value.is_empty() => {
            !(value.contains(symbols.start.as_str()) && value.contains(symbols.end.as_str()))
        }
        _ => true,
    }
}
