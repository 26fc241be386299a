use super::error::{ConfigError, LexError};
use super::locations::Span;
use super::reader::Cursor;
use const_format::concatcp;
use log::{debug, trace};
use once_cell::sync::Lazy;
use regex::Regex;
use std::str::FromStr;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum TokenKind {
    OpenParen,
    CloseParen,
    Integer,
    String,
    Symbol,
}

impl TokenKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::OpenParen => "open-paren",
            Self::CloseParen => "close-paren",
            Self::Integer => "integer",
            Self::String => "string",
            Self::Symbol => "symbol",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TokenKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open-paren" | "oparen" => Ok(Self::OpenParen),
            "close-paren" | "cparen" => Ok(Self::CloseParen),
            "integer" => Ok(Self::Integer),
            "string" => Ok(Self::String),
            "symbol" => Ok(Self::Symbol),
            _ => Err(ConfigError::UnknownTokenKind(s.to_string())),
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum TokenValue {
    Integer(i64),
    Text(String),
}

impl std::fmt::Display for TokenValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub value: TokenValue,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, value: TokenValue, span: Span) -> Self {
        Self { kind, value, span }
    }

    /// Text of the token as it is written back out.
    pub fn text(&self) -> String {
        self.value.to_string()
    }

    pub(crate) fn is_symbol(&self, name: &str) -> bool {
        self.kind == TokenKind::Symbol && matches!(&self.value, TokenValue::Text(s) if s == name)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}('{}')", self.kind, self.value)
    }
}

macro_rules! alternative {
    ($t:expr) => {{
        $t
    }};
    ($t:expr, $($ts:expr),+) => {{
        concatcp!($t, "|", alternative!($($ts),+))
    }}
}

macro_rules! group {
    ($($ts:expr),+) => {{
        concatcp!(r"(?:", alternative!($($ts),+), ")")
    }}
}

macro_rules! maybe {
    ($($ts:expr),+) => {
        concatcp!(group!($($ts),+), r"?")
    }
}

const S_OPEN_PAREN: &str = r"\(";
const S_CLOSE_PAREN: &str = r"\)";
const S_DIGITS: &str = r"[0-9]+";
const S_INTEGER: &str = concatcp!(r"-?", S_DIGITS, maybe!(concatcp!(r"\.", S_DIGITS)));
const S_STRING: &str = r"'[^']*'";
const S_SYMBOL: &str = r"[a-zA-Z0-9+*]+";

/// Default table. Order matters: `symbol` overlaps digits, so `integer`
/// must come first.
pub const STANDARD_PATTERNS: [(TokenKind, &str); 5] = [
    (TokenKind::OpenParen, S_OPEN_PAREN),
    (TokenKind::CloseParen, S_CLOSE_PAREN),
    (TokenKind::Integer, S_INTEGER),
    (TokenKind::String, S_STRING),
    (TokenKind::Symbol, S_SYMBOL),
];

static STANDARD: Lazy<TokenPatterns> =
    Lazy::new(|| TokenPatterns::new(&STANDARD_PATTERNS).expect("Error compiling regex."));

/// Ordered `(kind, pattern)` table; the first pattern that matches wins.
#[derive(Clone, Debug)]
pub struct TokenPatterns {
    patterns: Vec<(TokenKind, Regex)>,
}

impl TokenPatterns {
    pub fn new(table: &[(TokenKind, &str)]) -> Result<Self, ConfigError> {
        let patterns = table
            .iter()
            .map(|&(kind, pattern)| {
                Regex::new(&format!("^(?:{pattern})"))
                    .map(|regex| (kind, regex))
                    .map_err(|source| ConfigError::Regex { kind, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    pub fn from_names(table: &[(&str, &str)]) -> Result<Self, ConfigError> {
        let kinds = table
            .iter()
            .map(|&(name, pattern)| Ok((name.parse::<TokenKind>()?, pattern)))
            .collect::<Result<Vec<_>, ConfigError>>()?;
        Self::new(&kinds)
    }

    pub fn standard() -> &'static Self {
        &STANDARD
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

pub struct Tokenizer<'a, 'p> {
    reader: Cursor<'a>,
    patterns: &'p TokenPatterns,
    tokens: Vec<Token>,
}

impl<'a, 'p> Tokenizer<'a, 'p> {
    pub fn new(reader: Cursor<'a>, patterns: &'p TokenPatterns) -> Self {
        Self {
            reader,
            patterns,
            tokens: vec![],
        }
    }

    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        while !self.reader.eof() {
            let code = self.reader.top();
            if code.is_empty() {
                break;
            }
            if !self.find_by_regex(code)? {
                return Err(LexError::UnrecognizedToken {
                    position: self.reader.position(),
                    rest: code.to_string(),
                });
            }
        }
        debug!("tokenized {} tokens", self.tokens.len());
        Ok(self.tokens)
    }

    fn find_by_regex(&mut self, code: &str) -> Result<bool, LexError> {
        let patterns = self.patterns;
        for (kind, regex) in patterns.patterns.iter() {
            let Some(m) = regex.find(code) else {
                continue;
            };
            // A zero-width match would never advance the reader.
            if m.as_str().is_empty() {
                continue;
            }
            let start = self.reader.position();
            let span = Span::new(start, start + m.end());
            let value = match kind {
                TokenKind::Integer => {
                    TokenValue::Integer(m.as_str().parse().map_err(|_| LexError::InvalidInteger {
                        literal: m.as_str().to_string(),
                        span,
                    })?)
                }
                _ => TokenValue::Text(m.as_str().to_string()),
            };
            self.reader.advance_bytes(m.end());
            let token = Token::new(*kind, value, span);
            trace!("token {token} at {span}");
            self.tokens.push(token);
            return Ok(true);
        }
        Ok(false)
    }
}

/// Tokenizes `input` with the standard pattern table.
pub fn tokenize_string(input: &str) -> Result<Vec<Token>, LexError> {
    tokenize_with(input, TokenPatterns::standard())
}

pub fn tokenize_with(input: &str, patterns: &TokenPatterns) -> Result<Vec<Token>, LexError> {
    Tokenizer::new(Cursor::new(input), patterns).tokenize()
}
