//! Element Schema Registry
//!
//! The lookups the attribute classifier needs, behind a trait so a driver can
//! swap in its own HTML semantics.

/// Read-only view over the HTML semantics tables
pub trait ElementSchemaRegistry: Sync {
    /// Attribute valid on every HTML element
    fn is_global_attribute(&self, attr_name: &str) -> bool;

    /// `data-*`, `aria-*` and the framework names `role`, `is`, `key`, `slot`
    fn is_aria_or_data_or_framework_attribute(&self, attr_name: &str) -> bool;

    /// SVG element names, which keep their attribute casing
    fn is_svg_tag(&self, tag_name: &str) -> bool;

    /// Built-in element names that contain a dash but are not custom elements
    fn is_dashed_builtin_tag(&self, tag_name: &str) -> bool;

    /// Tags an attribute is valid on
    ///
    /// `None` when the attribute is unknown, an empty slice when it is valid everywhere.
    fn valid_elements_of_attribute(&self, attr_name: &str) -> Option<&[&'static str]>;

    /// Irregular attribute to property renames (`for` -> `htmlFor`)
    fn get_mapped_prop_name(&self, attr_name: &str) -> Option<&'static str>;
}
