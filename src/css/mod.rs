//! CSS text input: tokenizer and value/declaration parser.

pub mod parser;
pub mod tokenizer;

pub use parser::{parse_declarations, parse_value, ParseError};
