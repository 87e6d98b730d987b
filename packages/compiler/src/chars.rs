//! Character constants
//!
//! Characters the attribute stage inspects in raw source text.

// Quotes
pub const DQ: char = '"';
pub const SQ: char = '\'';

// Punctuation
pub const MINUS: char = '-';
pub const SLASH: char = '/';
pub const COLON: char = ':';
pub const LT: char = '<';
pub const EQ: char = '=';
pub const GT: char = '>';
pub const BACKSLASH: char = '\\';

// Default expression delimiters
pub const LBRACE: char = '{';
pub const RBRACE: char = '}';
