//! Placeholder tokenizer for template sources and stored template text.

pub mod ast;
pub mod error;
mod template;

pub use ast::*;
pub use error::ParseError;
pub use template::{escape_literal, parse_slots, parse_source};
