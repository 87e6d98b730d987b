#![deny(clippy::all)]

//! Template Compiler - attribute stage
//!
//! Normalizes raw template attributes into literals, bindings or escaped
//! literals, and classifies them as DOM attributes, DOM properties or compiler
//! directives for the code generator.
//!
//! ```
//! use template_compiler::ml_parser::{Element, RawAttribute};
//! use template_compiler::template_parser::{process_element_attributes, AttributeTarget};
//!
//! let element = Element::new("input")
//!     .with_attribute(RawAttribute::new("value", "{name}", "value={name}"))
//!     .with_attribute(RawAttribute::new("class", "big", r#"class="big""#));
//!
//! let attrs = process_element_attributes(&element).unwrap();
//! assert!(attrs[0].is_expression());
//! assert_eq!(attrs[0].target, AttributeTarget::DomProperty("value".to_string()));
//! assert_eq!(attrs[1].target, AttributeTarget::DomAttribute("class".to_string()));
//! ```

mod assertions;
pub mod chars;
mod config;
mod error;
pub mod util;

pub mod ml_parser;
pub mod schema;
pub mod template_parser;

// Re-exports
pub use config::{CompilerConfig, ExpressionConfig};
pub use error::{ConfigError, Result, TemplateSyntaxError};
pub use ml_parser::{AttributeMatcher, Element, RawAttribute};
pub use template_parser::{
    attribute_to_property_name, classify_attribute, is_attribute, is_valid_html_attribute,
    normalize_attribute_value, AttributeTarget, NormalizedValue, ProcessedAttribute,
};
