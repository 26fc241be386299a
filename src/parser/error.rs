use thiserror::Error;

use super::locations::Span;
use super::tokenizer::TokenKind;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LexError {
    #[error("unrecognized token at offset {position}: '{rest}'")]
    UnrecognizedToken { position: usize, rest: String },
    #[error("invalid integer literal '{literal}' in {span}")]
    InvalidInteger { literal: String, span: Span },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("parse error: closing paren missing? (no token at lookahead {offset})")]
    MissingToken { offset: usize },
    #[error("syntax error in {span}: expected '{expected}' but got '{found}'")]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
        span: Span,
    },
    #[error("syntax error in {span}: unexpected input after expression")]
    TrailingTokens { span: Span },
    #[error("syntax error in {span}: expression nested deeper than {limit} lists")]
    TooDeep { span: Span, limit: usize },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown token kind '{0}'")]
    UnknownTokenKind(String),
    #[error("invalid pattern for token kind '{kind}': {source}")]
    Regex {
        kind: TokenKind,
        #[source]
        source: regex::Error,
    },
}
