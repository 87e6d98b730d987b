//! Attribute Values
//!
//! Resolves whether an attribute value is a string literal, a bound expression
//! or an escaped literal, then pairs it with its classification for code
//! generation.
//!
//! Expression delimiters are legal inside plain string values, so the parsed
//! value alone cannot tell `{x}` the binding from `{x}` the three character
//! string. The only signals are the quotes around the raw value and a leading
//! backslash:
//!
//! ```text
//! <input value={myValue} />      binding
//! <input value="\{myValue}" />   string literal "{myValue}"
//! <input value="{myValue}" />    ambiguous, rejected
//! <input value={myValue}/>       binding, the `/` belongs to the tag
//! ```

use super::classifier::{AttributeClassifier, AttributeTarget, ElementContext};
use super::expression::{ExpressionMatcher, DEFAULT_EXPRESSION_MATCHER};
use super::raw_attribute::{is_escaped_attribute_with, is_quoted_attribute};
use crate::chars;
use crate::error::{Result, TemplateSyntaxError};
use crate::ml_parser::ast::{Element, RawAttribute};
use serde::{Deserialize, Serialize};

/// Resolved attribute value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedValue {
    pub value: String,
    /// The author escaped the expression delimiter to force a literal
    pub escaped_expression: bool,
}

impl NormalizedValue {
    fn unescaped(value: impl Into<String>) -> Self {
        NormalizedValue {
            value: value.into(),
            escaped_expression: false,
        }
    }

    fn escaped(value: impl Into<String>) -> Self {
        NormalizedValue {
            value: value.into(),
            escaped_expression: true,
        }
    }
}

/// What a normalized value stands for; exactly one holds for any value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AttributeValueKind {
    Literal,
    Expression,
    EscapedLiteral,
}

impl AttributeValueKind {
    pub fn of(normalized: &NormalizedValue, matcher: &ExpressionMatcher) -> Self {
        if normalized.escaped_expression {
            AttributeValueKind::EscapedLiteral
        } else if matcher.is_full_expression(&normalized.value) {
            AttributeValueKind::Expression
        } else {
            AttributeValueKind::Literal
        }
    }
}

/// Attribute ready for code generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedAttribute {
    /// Qualified (`prefix:name`) attribute name as written
    pub name: String,
    pub target: AttributeTarget,
    pub value: String,
    pub kind: AttributeValueKind,
}

impl ProcessedAttribute {
    pub fn is_expression(&self) -> bool {
        self.kind == AttributeValueKind::Expression
    }

    pub fn escaped_expression(&self) -> bool {
        self.kind == AttributeValueKind::EscapedLiteral
    }
}

pub fn normalize_attribute_value(attr: &RawAttribute, raw: &str) -> Result<NormalizedValue> {
    normalize_attribute_value_with(attr, raw, &DEFAULT_EXPRESSION_MATCHER)
}

pub fn normalize_attribute_value_with(
    attr: &RawAttribute,
    raw: &str,
    matcher: &ExpressionMatcher,
) -> Result<NormalizedValue> {
    let value = attr.value.as_str();
    let is_quoted = is_quoted_attribute(raw);
    let is_escaped = is_escaped_attribute_with(raw, matcher.config());

    if !is_escaped && matcher.is_full_expression(value) {
        if is_quoted {
            // <input value="{myValue}" />
            // identifier or string literal, can't tell
            let err = ambiguous_quoted_expression(raw, matcher);
            log::debug!("rejecting attribute {}: {}", attr.name, err);
            return Err(err);
        }

        // <input value={myValue} />
        log::trace!("attribute {} is bound to {}", attr.name, value);
        return Ok(NormalizedValue::unescaped(value));
    }

    if !is_escaped && matcher.is_potential_expression(value) {
        let start = matcher.start_symbol();
        let escaped_start = format!("{}{}", chars::BACKSLASH, start);
        let self_closing_end = format!("{}{}", matcher.end_symbol(), chars::SLASH);

        if value.starts_with(&escaped_start) {
            // <input value="\{myValue}"/>
            log::trace!("attribute {} is an escaped literal", attr.name);
            return Ok(NormalizedValue::escaped(&value[chars::BACKSLASH.len_utf8()..]));
        }

        if value.starts_with(start) && value.ends_with(&self_closing_end) && !is_quoted {
            // <input value={myValue}/>
            // the tokenizer keeps the self-closing `/` in the unquoted value
            log::trace!(
                "attribute {} sits next to a self-closing tag end, dropping the trailing /",
                attr.name
            );
            let stripped = &value[..value.len() - chars::SLASH.len_utf8()];
            return Ok(NormalizedValue::unescaped(stripped));
        }

        let err = unresolved_expression(raw);
        log::debug!("rejecting attribute {}: {}", attr.name, err);
        return Err(err);
    }

    // <input value="myValue"/>
    Ok(NormalizedValue::unescaped(value))
}

fn ambiguous_quoted_expression(raw: &str, matcher: &ExpressionMatcher) -> TemplateSyntaxError {
    let quote = chars::DQ.to_string();
    let quoted_start = format!("{}{}", chars::DQ, matcher.start_symbol());
    let escaped_start = format!("{}{}{}", chars::DQ, chars::BACKSLASH, matcher.start_symbol());

    TemplateSyntaxError::AmbiguousQuotedExpression {
        raw: raw.to_string(),
        unquoted: raw.replace(&quote, ""),
        escaped: raw.replacen(&quoted_start, &escaped_start, 1),
    }
}

/// `name={a}b` -> `name="\{a}b"`
fn unresolved_expression(raw: &str) -> TemplateSyntaxError {
    let mut escaped = match raw.split_once(chars::EQ) {
        Some((name, value)) => {
            let value = value.strip_prefix(chars::DQ).unwrap_or(value);
            format!("{}{}{}{}{}", name, chars::EQ, chars::DQ, chars::BACKSLASH, value)
        }
        None => raw.to_string(),
    };
    if !escaped.ends_with(chars::DQ) {
        escaped.push(chars::DQ);
    }

    TemplateSyntaxError::UnresolvedExpression {
        raw: raw.to_string(),
        escaped,
    }
}

/// Normalize and classify one attribute of `element`
pub fn process_attribute(element: &Element, attr: &RawAttribute) -> Result<ProcessedAttribute> {
    let classifier = AttributeClassifier::default();
    let context = classifier.context(element);
    process_attribute_in(&classifier, &context, attr, &DEFAULT_EXPRESSION_MATCHER)
}

pub fn process_attribute_in(
    classifier: &AttributeClassifier<'_>,
    context: &ElementContext<'_>,
    attr: &RawAttribute,
    matcher: &ExpressionMatcher,
) -> Result<ProcessedAttribute> {
    let name = attr.qualified_name();
    let normalized = normalize_attribute_value_with(attr, &attr.raw, matcher)?;
    let kind = AttributeValueKind::of(&normalized, matcher);
    let target = classifier.classify_in(context, &name);

    log::trace!("<{}> {} -> {:?} ({:?})", context.tag_name, name, target, kind);

    Ok(ProcessedAttribute {
        name,
        target,
        value: normalized.value,
        kind,
    })
}

/// Normalize and classify every attribute of `element`, stopping at the first error
pub fn process_element_attributes(element: &Element) -> Result<Vec<ProcessedAttribute>> {
    process_element_attributes_with(
        element,
        &AttributeClassifier::default(),
        &DEFAULT_EXPRESSION_MATCHER,
    )
}

pub fn process_element_attributes_with(
    element: &Element,
    classifier: &AttributeClassifier<'_>,
    matcher: &ExpressionMatcher,
) -> Result<Vec<ProcessedAttribute>> {
    // `is` has to be seen before any other attribute is classified
    let context = classifier.context(element);

    element
        .attributes
        .iter()
        .map(|attr| process_attribute_in(classifier, &context, attr, matcher))
        .collect()
}
