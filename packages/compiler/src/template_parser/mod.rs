//! Template Parser Module
//!
//! Attribute stage of the template compiler: value normalization and
//! attribute/property classification

pub mod attribute;
pub mod classifier;
pub mod expression;
pub mod raw_attribute;

pub use attribute::*;
pub use classifier::*;
pub use expression::*;
pub use raw_attribute::*;
