mod parser;
pub use parser::reader::Cursor;
pub use parser::tokenizer::{
    Token, TokenKind, TokenPatterns, TokenValue, Tokenizer, STANDARD_PATTERNS,
};
pub use parser::{
    parse, parse_all, tokenize_string, tokenize_with, ConfigError, Expression, LexError,
    Locatable, ParseError, Parser, Span, MAX_DEPTH,
};

mod generator;
pub use generator::generate;

mod builtins;
pub use builtins::{Builtin, BuiltinFn, Builtins};

mod interpreter;
pub use interpreter::{evaluate, EvalError, Evaluator, Value};

#[cfg(test)]
mod test;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Tokenizes and parses a single expression with the standard pattern table.
pub fn parse_source(source: &str) -> Result<Expression, Error> {
    let tokens = tokenize_string(source)?;
    Ok(parse(&tokens)?)
}

/// Outcome of running one program through the whole pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct Run {
    pub tree: Expression,
    pub generated: String,
    pub result: Result<Value, EvalError>,
}

impl Run {
    /// Whether regeneration reproduced `source` exactly.
    pub fn matches(&self, source: &str) -> bool {
        self.generated == source
    }
}

/// Runs `source` through tokenizer, parser, generator and evaluator.
///
/// Lexing and parsing failures abort the run. Evaluation failures are kept
/// in [`Run::result`] so the regenerated text is still available.
pub fn run(source: &str, builtins: &Builtins) -> Result<Run, Error> {
    let tree = parse_source(source)?;
    let generated = generate(&tree);
    let result = Evaluator::new(builtins).evaluate(&tree);
    Ok(Run {
        tree,
        generated,
        result,
    })
}
