//! Assertions Module
//!
//! Validation of user-supplied expression symbols.

use crate::chars;
use crate::error::ConfigError;
use once_cell::sync::Lazy;
use regex::Regex;

static UNUSABLE_EXPRESSION_REGEXPS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"^\s*$").unwrap(),     // empty
        Regex::new(r"\s").unwrap(),        // whitespace splits attributes
        Regex::new(r"&(#|[a-z])").unwrap(), // character reference
    ]
});

/// Characters that already mean something in attribute syntax
const RESERVED_CHARS: [char; 6] = [
    chars::DQ,
    chars::SQ,
    chars::EQ,
    chars::LT,
    chars::GT,
    chars::BACKSLASH,
];

pub fn assert_expression_symbols(
    identifier: &str,
    value: Option<&[String]>,
) -> Result<(), ConfigError> {
    if let Some(val) = value {
        if val.len() != 2 {
            return Err(ConfigError::InvalidSymbolPair {
                identifier: identifier.to_string(),
            });
        }

        let start = &val[0];
        let end = &val[1];

        let unusable = |symbol: &str| {
            UNUSABLE_EXPRESSION_REGEXPS
                .iter()
                .any(|regexp| regexp.is_match(symbol))
                || symbol.chars().any(|c| RESERVED_CHARS.contains(&c))
        };

        if unusable(start) || unusable(end) || start == end {
            return Err(ConfigError::UnusableSymbol {
                start: start.clone(),
                end: end.clone(),
            });
        }
    }

    Ok(())
}
