//! ML Parser AST
//!
//! The slice of the template tree the attribute stage reads: an element with
//! its tag name, namespace and raw attributes, as produced by the tokenizer.

use super::matcher::AttributeMatcher;
use super::tags::merge_ns_and_name;
use serde::{Deserialize, Serialize};

/// Attribute as captured from the template source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAttribute {
    /// Local name, without namespace prefix
    pub name: String,
    /// Value as unwrapped by the tokenizer (quotes removed, entities decoded)
    pub value: String,
    /// Source text of the whole attribute, `name="value"`
    pub raw: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
}

impl RawAttribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>, raw: impl Into<String>) -> Self {
        RawAttribute {
            name: name.into(),
            value: value.into(),
            raw: raw.into(),
            prefix: None,
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// `prefix:name` for namespaced attributes, the bare name otherwise
    pub fn qualified_name(&self) -> String {
        merge_ns_and_name(self.prefix.as_deref(), &self.name)
    }
}

/// Element node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    pub tag_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(default)]
    pub attributes: Vec<RawAttribute>,
}

impl Element {
    pub fn new(tag_name: impl Into<String>) -> Self {
        Element {
            tag_name: tag_name.into(),
            namespace: None,
            attributes: Vec::new(),
        }
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn with_attribute(mut self, attribute: RawAttribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// First attribute whose qualified name matches
    pub fn get_attribute(&self, matcher: &AttributeMatcher) -> Option<&RawAttribute> {
        self.attributes
            .iter()
            .find(|attr| matcher.matches(&attr.qualified_name()))
    }

    /// Drop every attribute whose qualified name matches
    pub fn remove_attribute(&mut self, matcher: &AttributeMatcher) {
        self.attributes
            .retain(|attr| !matcher.matches(&attr.qualified_name()));
    }

    /// Element subclasses a built-in through `is=""`
    pub fn has_is_directive(&self) -> bool {
        self.get_attribute(&AttributeMatcher::exact("is")).is_some()
    }
}
