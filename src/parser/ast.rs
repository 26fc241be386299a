use super::error::ParseError;
use super::tokenizer::{Token, TokenKind as TK, TokenValue};

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Integer(i64),
    Text(String),
    Symbol(String),
    Procedure(Box<Expression>, Vec<Expression>),
    Lambda(Vec<String>, Box<Expression>),
    Quote(String),
}

impl Expression {
    pub fn procedure(operator: Expression, operands: Vec<Expression>) -> Self {
        Self::Procedure(Box::new(operator), operands)
    }

    pub fn lambda<S: Into<String>>(parameters: impl IntoIterator<Item = S>, body: Expression) -> Self {
        Self::Lambda(
            parameters.into_iter().map(Into::into).collect(),
            Box::new(body),
        )
    }

    pub fn symbol(name: &str) -> Self {
        Self::Symbol(name.to_string())
    }
}

impl TryFrom<Token> for Expression {
    type Error = ParseError;

    fn try_from(value: Token) -> Result<Self, Self::Error> {
        let Token { kind, value, span } = value;
        match (kind, value) {
            (TK::Integer, TokenValue::Integer(n)) => Ok(Self::Integer(n)),
            (TK::String, TokenValue::Text(s)) => Ok(Self::Text(s)),
            (TK::Symbol, TokenValue::Text(s)) => Ok(Self::Symbol(s)),
            (found, _) => Err(ParseError::UnexpectedToken {
                expected: TK::Symbol,
                found,
                span,
            }),
        }
    }
}
