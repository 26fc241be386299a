// expression: list | atom
// list:       lambda | quote | procedure
// lambda:     '(' 'lambda' '(' symbol* ')' expression ')'
// quote:      '(' 'quote' <any balanced tokens> ')'
// procedure:  '(' (list | symbol) expression* ')'
// atom:       integer | string | symbol

use log::{debug, trace};

use super::ast::Expression;
use super::error::ParseError;
use super::locations::Locatable;
use super::tokenizer::{Token, TokenKind as TK};

/// Lists may nest this deep; the generator and evaluator recurse once per
/// level, so the bound keeps all three stages off the end of the stack.
pub const MAX_DEPTH: usize = 256;

/// Recursive-descent parser over an immutable token slice.
///
/// Consuming a token moves a forward-only index; nothing is ever removed from
/// or reordered in the slice.
pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
        }
    }

    pub fn is_done(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Tokens not yet consumed.
    pub fn rest(&self) -> &'a [Token] {
        &self.tokens[self.pos.min(self.tokens.len())..]
    }

    pub fn parse_expr(&mut self) -> Result<Expression, ParseError> {
        if self.peek(0)? == TK::OpenParen {
            return self.parse_list();
        }
        self.parse_atomic()
    }

    fn parse_list(&mut self) -> Result<Expression, ParseError> {
        if self.depth >= MAX_DEPTH {
            return Err(ParseError::TooDeep {
                span: self.tokens[self.pos].span(),
                limit: MAX_DEPTH,
            });
        }
        self.depth += 1;
        let list = self.parse_nested_list();
        self.depth -= 1;
        list
    }

    fn parse_nested_list(&mut self) -> Result<Expression, ParseError> {
        if self.peek(1)? == TK::Symbol {
            let keyword = &self.tokens[self.pos + 1];
            if keyword.is_symbol("lambda") {
                return self.parse_lambda();
            }
            if keyword.is_symbol("quote") {
                return self.parse_quote();
            }
        }
        self.parse_procedure()
    }

    fn parse_lambda(&mut self) -> Result<Expression, ParseError> {
        self.consume(TK::OpenParen)?;
        self.consume(TK::Symbol)?;
        self.consume(TK::OpenParen)?;

        let mut parameters = vec![];
        while self.peek(0)? != TK::CloseParen {
            parameters.push(self.consume(TK::Symbol)?.text());
        }

        self.consume(TK::CloseParen)?;
        let body = self.parse_expr()?;
        self.consume(TK::CloseParen)?;

        trace!("lambda with {} parameter(s)", parameters.len());
        Ok(Expression::Lambda(parameters, Box::new(body)))
    }

    fn parse_quote(&mut self) -> Result<Expression, ParseError> {
        self.consume(TK::OpenParen)?;
        self.consume(TK::Symbol)?;

        let mut quoted = String::new();
        let mut depth = 0usize;
        loop {
            match self.peek(0)? {
                TK::CloseParen if depth == 0 => break,
                TK::OpenParen => depth += 1,
                TK::CloseParen => depth -= 1,
                _ => {}
            }
            quoted.push_str(&self.tokens[self.pos].text());
            self.pos += 1;
        }

        self.consume(TK::CloseParen)?;
        trace!("quote '{quoted}'");
        Ok(Expression::Quote(quoted))
    }

    fn parse_procedure(&mut self) -> Result<Expression, ParseError> {
        self.consume(TK::OpenParen)?;

        let operator = if self.peek(0)? == TK::OpenParen {
            self.parse_list()?
        } else {
            Expression::try_from(self.consume(TK::Symbol)?)?
        };

        let mut operands = vec![];
        while self.peek(0)? != TK::CloseParen {
            operands.push(self.parse_expr()?);
        }

        self.consume(TK::CloseParen)?;
        Ok(Expression::Procedure(Box::new(operator), operands))
    }

    fn parse_atomic(&mut self) -> Result<Expression, ParseError> {
        let token = match self.peek(0)? {
            TK::Integer => self.consume(TK::Integer)?,
            TK::String => self.consume(TK::String)?,
            _ => self.consume(TK::Symbol)?,
        };
        Expression::try_from(token)
    }

    fn peek(&self, offset: usize) -> Result<TK, ParseError> {
        self.tokens
            .get(self.pos + offset)
            .map(|token| token.kind)
            .ok_or(ParseError::MissingToken { offset })
    }

    fn consume(&mut self, expected: TK) -> Result<Token, ParseError> {
        let token = self
            .tokens
            .get(self.pos)
            .ok_or(ParseError::MissingToken { offset: 0 })?;
        if token.kind != expected {
            return Err(ParseError::UnexpectedToken {
                expected,
                found: token.kind,
                span: token.span(),
            });
        }
        self.pos += 1;
        Ok(token.clone())
    }
}

/// Parses exactly one expression; leftover tokens are an error.
pub fn parse(tokens: &[Token]) -> Result<Expression, ParseError> {
    let mut parser = Parser::new(tokens);
    let expr = parser.parse_expr()?;
    if !parser.is_done() {
        return Err(ParseError::TrailingTokens {
            span: parser.rest().span(),
        });
    }
    debug!("parsed {} tokens", tokens.len());
    Ok(expr)
}

/// Parses every top-level expression in order.
pub fn parse_all(tokens: &[Token]) -> Result<Vec<Expression>, ParseError> {
    let mut parser = Parser::new(tokens);
    let mut exprs = vec![];
    while !parser.is_done() {
        exprs.push(parser.parse_expr()?);
    }
    debug!("parsed {} top-level expression(s)", exprs.len());
    Ok(exprs)
}

