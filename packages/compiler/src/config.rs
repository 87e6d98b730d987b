//! Compiler Configuration
//!
//! Settings the template driver hands to the attribute stage. Everything has a
//! default so an empty JSON object is a valid configuration.

use crate::assertions::assert_expression_symbols;
use crate::chars;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Expression delimiters, `{` and `}` unless configured otherwise
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpressionConfig {
    pub start: String,
    pub end: String,
}

impl ExpressionConfig {
    pub fn new(start: String, end: String) -> Self {
        ExpressionConfig { start, end }
    }

    pub fn from_array(markers: Option<&[String]>) -> Result<Self, ConfigError> {
        match markers {
            None => Ok(ExpressionConfig::default()),
            Some(m) => {
                assert_expression_symbols("expression", Some(m))?;
                Ok(ExpressionConfig::new(m[0].clone(), m[1].clone()))
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        assert_expression_symbols("expression", Some(&[self.start.clone(), self.end.clone()]))
    }
}

impl Default for ExpressionConfig {
    fn default() -> Self {
        ExpressionConfig::new(chars::LBRACE.to_string(), chars::RBRACE.to_string())
    }
}

/// Compiler configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompilerConfig {
    /// Expression delimiters recognized in attribute values
    pub expression: ExpressionConfig,
}

impl CompilerConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        let config: CompilerConfig =
            serde_json::from_str(source).map_err(|e| ConfigError::Malformed(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.expression.validate()
    }
}
