//! Utility Functions
//!
//! Case conversion and regex helpers shared by the attribute classifier and the
//! expression matcher.

use crate::chars;
use once_cell::sync::Lazy;
use regex::Regex;

/// Leading separators are dropped entirely
static LEADING_SEPARATORS_REGEXP: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[_.\- ]+").unwrap());

/// A separator run followed by a word character (or the end of input)
static SEPARATOR_REGEXP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[_.\- ]+([A-Za-z0-9_]|$)").unwrap());

/// A digit run followed by a word character (or the end of input)
static DIGITS_REGEXP: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+([A-Za-z0-9_]|$)").unwrap());

/// Convert an attribute name to camelCase
///
/// Follows the `camelcase` npm package so generated property names line up with
/// what the runtime expects:
///
/// - `-`, `_`, `.` and space separators are removed and the following character is upper-cased
/// - existing lower-to-upper boundaries (`tabIndex`) are preserved
/// - every other character is lower-cased
/// - a character following a run of digits is upper-cased
pub fn camel_case(input: &str) -> String {
    let input = input.trim();
    let mut chars_iter = input.chars();
    match (chars_iter.next(), chars_iter.next()) {
        (None, _) => return String::new(),
        (Some(single), None) => return single.to_lowercase().collect(),
        _ => {}
    }

    let has_upper_case = input != input.to_lowercase();
    let prepared = if has_upper_case {
        preserve_camel_case(input)
    } else {
        input.to_string()
    };

    let stripped = LEADING_SEPARATORS_REGEXP.replace(&prepared, "");
    let lowered = stripped.to_lowercase();
    let joined = SEPARATOR_REGEXP.replace_all(&lowered, |caps: &regex::Captures| {
        caps.get(1)
            .map(|m| m.as_str().to_uppercase())
            .unwrap_or_default()
    });
    DIGITS_REGEXP
        .replace_all(&joined, |caps: &regex::Captures| caps[0].to_uppercase())
        .into_owned()
}

/// Insert a `-` at every camel-case boundary so the boundary survives lower-casing
fn preserve_camel_case(input: &str) -> String {
    let mut out: Vec<char> = input.chars().collect();
    let mut is_last_char_lower = false;
    let mut is_last_char_upper = false;
    let mut is_last_last_char_upper = false;

    let mut i = 0;
    while i < out.len() {
        let c = out[i];
        let is_letter = c.is_ascii_alphabetic();

        if is_last_char_lower && is_letter && is_upper(c) {
            out.insert(i, chars::MINUS);
            is_last_char_lower = false;
            is_last_last_char_upper = is_last_char_upper;
            is_last_char_upper = true;
            i += 1;
        } else if is_last_char_upper && is_last_last_char_upper && is_letter && is_lower(c) {
            // `ABc` -> `A-Bc`: the last upper-case letter starts a new word
            out.insert(i - 1, chars::MINUS);
            is_last_last_char_upper = is_last_char_upper;
            is_last_char_upper = false;
            is_last_char_lower = true;
        } else {
            is_last_char_lower = is_lower(c) && !is_upper(c);
            is_last_last_char_upper = is_last_char_upper;
            is_last_char_upper = is_upper(c) && !is_lower(c);
        }
        i += 1;
    }

    out.into_iter().collect()
}

fn is_upper(c: char) -> bool {
    c.to_uppercase().eq(std::iter::once(c))
}

fn is_lower(c: char) -> bool {
    c.to_lowercase().eq(std::iter::once(c))
}

/// Escape characters that have special meaning in Regular Expressions
pub fn escape_regex(s: &str) -> String {
    let mut result = String::new();
    for ch in s.chars() {
        if matches!(
            ch,
            '.' | '*'
                | '+'
                | '?'
                | '^'
                | '='
                | '!'
                | ':'
                | '$'
                | '{'
                | '}'
                | '('
                | ')'
                | '|'
                | '['
                | ']'
                | '/'
                | '\\'
                | '-'
        ) {
            result.push('\\');
        }
        result.push(ch);
    }
    result
}
