//! ML (Markup Language) Parser Module
//!
//! Element and attribute model handed over by the HTML tokenizer

pub mod ast;
pub mod matcher;
pub mod tags;

pub use ast::*;
pub use matcher::*;
pub use tags::*;
