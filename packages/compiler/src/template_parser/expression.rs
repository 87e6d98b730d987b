//! Expression Shape
//!
//! Predicates over the parsed attribute value: is it exactly one expression, or
//! does it merely contain something that looks like one.

use crate::config::ExpressionConfig;
use crate::error::ConfigError;
use crate::util::escape_regex;
use once_cell::sync::Lazy;
use regex::Regex;

/// Any character but a line terminator, the way `.` behaves in the expression grammar
const NON_TERMINATOR: &str = r"[^\n\r\x{2028}\x{2029}]";

/// Matcher for the configured expression delimiters
#[derive(Debug, Clone)]
pub struct ExpressionMatcher {
    config: ExpressionConfig,
    full_expression: Regex,
    potential_expression: Regex,
}

pub static DEFAULT_EXPRESSION_MATCHER: Lazy<ExpressionMatcher> = Lazy::new(|| {
    ExpressionMatcher::build(ExpressionConfig::default())
        .expect("default expression symbols are valid")
});

impl ExpressionMatcher {
    pub fn new(config: ExpressionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        ExpressionMatcher::build(config)
    }

    fn build(config: ExpressionConfig) -> Result<Self, ConfigError> {
        let start = escape_regex(&config.start);
        let end = escape_regex(&config.end);

        let compile = |pattern: String| {
            Regex::new(&pattern).map_err(|e| ConfigError::Malformed(e.to_string()))
        };

        // {x}
        let full_expression = compile(format!("^{start}{NON_TERMINATOR}+{end}$"))?;
        // \{x}, {x}/, {x} and more
        let potential_expression = compile(format!(
            "^{NON_TERMINATOR}?{start}{NON_TERMINATOR}+{end}{NON_TERMINATOR}*$"
        ))?;

        Ok(ExpressionMatcher {
            config,
            full_expression,
            potential_expression,
        })
    }

    pub fn config(&self) -> &ExpressionConfig {
        &self.config
    }

    pub fn start_symbol(&self) -> &str {
        &self.config.start
    }

    pub fn end_symbol(&self) -> &str {
        &self.config.end
    }

    /// The whole value is a single expression: `{x}`
    pub fn is_full_expression(&self, value: &str) -> bool {
        self.full_expression.is_match(value)
    }

    /// The value opens an expression (after at most one leading character) and
    /// closes it, possibly followed by more text: `\{x}`, `{x}/`, `{x}y`
    pub fn is_potential_expression(&self, value: &str) -> bool {
        self.potential_expression.is_match(value)
    }
}

impl Default for ExpressionMatcher {
    fn default() -> Self {
        DEFAULT_EXPRESSION_MATCHER.clone()
    }
}

pub fn is_full_expression(value: &str) -> bool {
    DEFAULT_EXPRESSION_MATCHER.is_full_expression(value)
}

pub fn is_potential_expression(value: &str) -> bool {
    DEFAULT_EXPRESSION_MATCHER.is_potential_expression(value)
}
