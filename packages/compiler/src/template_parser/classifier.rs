//! Attribute Classifier
//!
//! Decides whether an attribute is emitted with `setAttribute`, assigned as a
//! DOM property, or consumed by the compiler itself, and computes the property
//! name for the second case.

use crate::ml_parser::ast::Element;
use crate::ml_parser::tags::{is_dashed_tag_name, is_foreign_namespace};
use crate::schema::{ElementSchemaRegistry, DOM_ELEMENT_SCHEMA_REGISTRY};
use crate::util::camel_case;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Directives the compiler strips before code generation
const DIRECTIVE_ATTRIBUTES: [&str; 2] = ["is", "key"];

/// `if:true`, `for:each`, `iterator:it`
static DIRECTIVE_PREFIX_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(if|for|iterator):").unwrap());

/// Where an attribute ends up in the generated code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "name", rename_all = "camelCase")]
pub enum AttributeTarget {
    /// Set through `setAttribute(name, value)`
    DomAttribute(String),
    /// Assigned as `element[name] = value`
    DomProperty(String),
    /// Consumed by the compiler, never emitted
    Reserved,
}

/// Everything about an element the classification depends on
///
/// Captured once per element so that stripping `is` later does not change how
/// the remaining attributes are classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementContext<'a> {
    pub tag_name: &'a str,
    pub has_is_directive: bool,
    pub is_custom_element: bool,
    pub is_foreign: bool,
}

pub struct AttributeClassifier<'r> {
    registry: &'r dyn ElementSchemaRegistry,
}

impl<'r> AttributeClassifier<'r> {
    pub fn new(registry: &'r dyn ElementSchemaRegistry) -> Self {
        AttributeClassifier { registry }
    }

    pub fn context<'a>(&self, element: &'a Element) -> ElementContext<'a> {
        ElementContext {
            tag_name: &element.tag_name,
            has_is_directive: element.has_is_directive(),
            is_custom_element: self.is_custom_element(element),
            is_foreign: self.is_foreign_element(element),
        }
    }

    /// Dash-cased tag that is not one of the built-in dashed SVG/MathML names
    pub fn is_custom_element(&self, element: &Element) -> bool {
        is_dashed_tag_name(&element.tag_name)
            && !self.registry.is_dashed_builtin_tag(&element.tag_name)
    }

    pub fn is_foreign_element(&self, element: &Element) -> bool {
        is_foreign_namespace(element.namespace.as_deref())
            || self.registry.is_svg_tag(&element.tag_name)
    }

    pub fn is_aria_or_data_or_framework_attribute(&self, attr_name: &str) -> bool {
        self.registry.is_aria_or_data_or_framework_attribute(attr_name)
    }

    /// `<input value>` and `<input checked>` only seed the initial state;
    /// `setAttribute` would not update the live control
    pub fn is_input_state_attribute(&self, tag_name: &str, attr_name: &str) -> bool {
        tag_name == "input" && (attr_name == "value" || attr_name == "checked")
    }

    pub fn is_attribute(&self, element: &Element, attr_name: &str) -> bool {
        self.is_attribute_in(&self.context(element), attr_name)
    }

    pub fn is_attribute_in(&self, context: &ElementContext<'_>, attr_name: &str) -> bool {
        // Global attributes and special ones (role, aria-, data-, key, is, slot)
        if self.registry.is_global_attribute(attr_name)
            || self.is_aria_or_data_or_framework_attribute(attr_name)
        {
            return true;
        }

        if self.is_input_state_attribute(context.tag_name, attr_name) {
            return false;
        }

        // A subclassed built-in keeps the attributes of its base element
        if context.has_is_directive {
            return self.is_valid_html_attribute(context.tag_name, attr_name);
        }

        !context.is_custom_element
    }

    pub fn is_valid_html_attribute(&self, tag_name: &str, attr_name: &str) -> bool {
        if self.registry.is_global_attribute(attr_name)
            || self.is_aria_or_data_or_framework_attribute(attr_name)
            || self.registry.is_svg_tag(tag_name)
            || self.registry.is_dashed_builtin_tag(tag_name)
        {
            return true;
        }

        match self.registry.valid_elements_of_attribute(attr_name) {
            Some(tags) => tags.is_empty() || tags.contains(&tag_name),
            None => false,
        }
    }

    pub fn attribute_to_property_name(&self, element: &Element, attr_name: &str) -> String {
        self.attribute_to_property_name_in(&self.context(element), attr_name)
    }

    pub fn attribute_to_property_name_in(
        &self,
        context: &ElementContext<'_>,
        attr_name: &str,
    ) -> String {
        // Foreign elements, framework names and custom element fields keep their casing
        if context.is_foreign
            || context.is_custom_element
            || self.is_aria_or_data_or_framework_attribute(attr_name)
        {
            return attr_name.to_string();
        }

        let prop_name = self
            .registry
            .get_mapped_prop_name(attr_name)
            .unwrap_or(attr_name);
        camel_case(prop_name)
    }

    /// Directive names the compiler consumes itself
    pub fn is_reserved_attribute(&self, attr_name: &str) -> bool {
        DIRECTIVE_ATTRIBUTES.contains(&attr_name) || DIRECTIVE_PREFIX_RE.is_match(attr_name)
    }

    pub fn classify(&self, element: &Element, attr_name: &str) -> AttributeTarget {
        self.classify_in(&self.context(element), attr_name)
    }

    pub fn classify_in(&self, context: &ElementContext<'_>, attr_name: &str) -> AttributeTarget {
        if self.is_reserved_attribute(attr_name) {
            AttributeTarget::Reserved
        } else if self.is_attribute_in(context, attr_name) {
            AttributeTarget::DomAttribute(attr_name.to_string())
        } else {
            AttributeTarget::DomProperty(self.attribute_to_property_name_in(context, attr_name))
        }
    }
}

impl Default for AttributeClassifier<'static> {
    fn default() -> Self {
        AttributeClassifier::new(&DOM_ELEMENT_SCHEMA_REGISTRY)
    }
}

pub fn is_aria_or_data_or_framework_attribute(attr_name: &str) -> bool {
    AttributeClassifier::default().is_aria_or_data_or_framework_attribute(attr_name)
}

pub fn is_attribute(element: &Element, attr_name: &str) -> bool {
    AttributeClassifier::default().is_attribute(element, attr_name)
}

pub fn is_valid_html_attribute(tag_name: &str, attr_name: &str) -> bool {
    AttributeClassifier::default().is_valid_html_attribute(tag_name, attr_name)
}

pub fn attribute_to_property_name(element: &Element, attr_name: &str) -> String {
    AttributeClassifier::default().attribute_to_property_name(element, attr_name)
}

pub fn classify_attribute(element: &Element, attr_name: &str) -> AttributeTarget {
    AttributeClassifier::default().classify(element, attr_name)
}
