#![deny(clippy::all)]

use napi::{Error, Result, Status};
use napi_derive::napi;
use serde::Serialize;
use template_compiler::ml_parser::{Element, RawAttribute};
use template_compiler::template_parser::{
    normalize_attribute_value_with, process_element_attributes_with, AttributeClassifier,
    ExpressionMatcher,
};
use template_compiler::{CompilerConfig, TemplateSyntaxError};

fn parse_json<'de, T: serde::Deserialize<'de>>(what: &str, source: &'de str) -> Result<T> {
    serde_json::from_str(source)
        .map_err(|e| Error::new(Status::InvalidArg, format!("Invalid {}: {}", what, e)))
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(|e| Error::new(Status::GenericFailure, e.to_string()))
}

fn syntax_error(err: TemplateSyntaxError) -> Error {
    Error::new(Status::InvalidArg, err.to_string())
}

/// Attribute stage of the template compiler
///
/// Elements and attributes cross the boundary as JSON, in the camelCase shape
/// of `Element` and `RawAttribute`.
#[napi]
pub struct Compiler {
    matcher: ExpressionMatcher,
}

#[napi]
impl Compiler {
    #[napi(constructor)]
    pub fn new(config: Option<String>) -> Result<Self> {
        let config = match config {
            Some(source) => CompilerConfig::from_json(&source)
                .map_err(|e| Error::new(Status::InvalidArg, e.to_string()))?,
            None => CompilerConfig::default(),
        };
        let matcher = ExpressionMatcher::new(config.expression)
            .map_err(|e| Error::new(Status::InvalidArg, e.to_string()))?;
        Ok(Compiler { matcher })
    }

    /// Returns `{ value, escapedExpression }` or throws the template syntax error
    #[napi]
    pub fn normalize_attribute_value(&self, attribute: String) -> Result<String> {
        let attr: RawAttribute = parse_json("attribute", &attribute)?;
        let normalized =
            normalize_attribute_value_with(&attr, &attr.raw, &self.matcher).map_err(syntax_error)?;
        to_json(&normalized)
    }

    #[napi]
    pub fn is_attribute(&self, element: String, attr_name: String) -> Result<bool> {
        let element: Element = parse_json("element", &element)?;
        Ok(AttributeClassifier::default().is_attribute(&element, &attr_name))
    }

    #[napi]
    pub fn is_valid_html_attribute(&self, tag_name: String, attr_name: String) -> bool {
        AttributeClassifier::default().is_valid_html_attribute(&tag_name, &attr_name)
    }

    #[napi]
    pub fn attribute_to_property_name(&self, element: String, attr_name: String) -> Result<String> {
        let element: Element = parse_json("element", &element)?;
        Ok(AttributeClassifier::default().attribute_to_property_name(&element, &attr_name))
    }

    #[napi]
    pub fn classify_attribute(&self, element: String, attr_name: String) -> Result<String> {
        let element: Element = parse_json("element", &element)?;
        to_json(&AttributeClassifier::default().classify(&element, &attr_name))
    }

    /// Normalizes and classifies every attribute of the element, in source order
    #[napi]
    pub fn process_element(&self, element: String) -> Result<String> {
        let element: Element = parse_json("element", &element)?;
        let attrs = process_element_attributes_with(
            &element,
            &AttributeClassifier::default(),
            &self.matcher,
        )
        .map_err(syntax_error)?;
        to_json(&attrs)
    }
}
