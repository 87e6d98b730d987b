//! Schema Module
//!
//! HTML semantics tables and the registry the attribute classifier consults

pub mod dom_element_schema_registry;
pub mod element_schema_registry;
pub mod html_attributes;

pub use dom_element_schema_registry::*;
pub use element_schema_registry::*;
pub use html_attributes::*;
