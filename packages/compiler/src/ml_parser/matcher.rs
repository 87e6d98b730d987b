//! Attribute Matcher
//!
//! Attribute lookup and removal by exact name or by pattern

use regex::Regex;

/// Selects attributes by their qualified (`prefix:name`) name
#[derive(Debug, Clone)]
pub enum AttributeMatcher {
    Exact(String),
    Pattern(Regex),
}

impl AttributeMatcher {
    pub fn exact(name: impl Into<String>) -> Self {
        AttributeMatcher::Exact(name.into())
    }

    pub fn pattern(pattern: &str) -> Result<Self, regex::Error> {
        Ok(AttributeMatcher::Pattern(Regex::new(pattern)?))
    }

    /// A pattern matches anywhere in the name unless it is anchored
    pub fn matches(&self, name: &str) -> bool {
        match self {
            AttributeMatcher::Exact(expected) => expected == name,
            AttributeMatcher::Pattern(re) => re.is_match(name),
        }
    }
}

impl From<&str> for AttributeMatcher {
    fn from(name: &str) -> Self {
        AttributeMatcher::exact(name)
    }
}

impl From<String> for AttributeMatcher {
    fn from(name: String) -> Self {
        AttributeMatcher::Exact(name)
    }
}

impl From<Regex> for AttributeMatcher {
    fn from(re: Regex) -> Self {
        AttributeMatcher::Pattern(re)
    }
}
