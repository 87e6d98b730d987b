//! Compiler Errors
//!
//! `TemplateSyntaxError` is the only error a template author ever sees from this
//! crate. Each variant keeps the offending raw attribute text together with the
//! rewrites that would make the intent unambiguous.

use serde::Serialize;
use thiserror::Error;

/// Fatal, user-facing error raised while normalizing an attribute value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TemplateSyntaxError {
    /// `value="{myValue}"`: a quoted value that is also a complete expression
    #[error(
        "Ambiguous attribute value {raw}. \
         If you want to make it a valid identifier you should remove the surrounding quotes {unquoted}. \
         If you want to make it a string you should escape it {escaped}."
    )]
    AmbiguousQuotedExpression {
        raw: String,
        unquoted: String,
        escaped: String,
    },

    /// A value that looks like an expression but cannot be resolved as one
    #[error(
        "Ambiguous attribute value {raw}. \
         If you want to make it a string you should escape it {escaped}"
    )]
    UnresolvedExpression { raw: String, escaped: String },
}

impl TemplateSyntaxError {
    /// The raw attribute source text the error is attached to
    pub fn raw(&self) -> &str {
        match self {
            TemplateSyntaxError::AmbiguousQuotedExpression { raw, .. }
            | TemplateSyntaxError::UnresolvedExpression { raw, .. } => raw,
        }
    }

    /// Rewrites the author can apply, in the order they appear in the message
    pub fn suggestions(&self) -> Vec<&str> {
        match self {
            TemplateSyntaxError::AmbiguousQuotedExpression {
                unquoted, escaped, ..
            } => vec![unquoted.as_str(), escaped.as_str()],
            TemplateSyntaxError::UnresolvedExpression { escaped, .. } => vec![escaped.as_str()],
        }
    }
}

/// Invalid compiler configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Expected '{identifier}' to be an array, [start, end].")]
    InvalidSymbolPair { identifier: String },

    #[error("['{start}', '{end}'] contains unusable expression symbol.")]
    UnusableSymbol { start: String, end: String },

    #[error("Malformed compiler configuration: {0}")]
    Malformed(String),
}

pub type Result<T, E = TemplateSyntaxError> = std::result::Result<T, E>;
