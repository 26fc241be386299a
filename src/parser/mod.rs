mod ast;
mod error;
mod grammar;
mod locations;
pub mod reader;
pub mod tokenizer;

pub use ast::*;
pub use error::{ConfigError, LexError, ParseError};
pub use grammar::{parse, parse_all, Parser, MAX_DEPTH};
pub use locations::{Locatable, Span};
pub use tokenizer::{tokenize_string, tokenize_with};
