//! ML Parser Tags
//!
//! Namespace and tag name helpers for the element view

use crate::chars;

pub const HTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";
pub const MATHML_NAMESPACE: &str = "http://www.w3.org/1998/Math/MathML";

/// Merge namespace prefix and local name
///
/// Attribute names are compared in their joined `prefix:name` form.
pub fn merge_ns_and_name(prefix: Option<&str>, local_name: &str) -> String {
    match prefix {
        Some(p) if !p.is_empty() => format!("{}{}{}", p, chars::COLON, local_name),
        _ => local_name.to_string(),
    }
}

/// Element living in a foreign (SVG or MathML) namespace
pub fn is_foreign_namespace(namespace: Option<&str>) -> bool {
    matches!(namespace, Some(SVG_NAMESPACE) | Some(MATHML_NAMESPACE))
}

/// Tag name shaped like a custom element name (`x-foo`)
pub fn is_dashed_tag_name(tag_name: &str) -> bool {
    tag_name.contains(chars::MINUS)
}
