use log::{debug, trace};
use thiserror::Error;

use crate::builtins::Builtins;
use crate::parser::Expression;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Integer(i64),
    Text(String),
    Symbol(String),
    Quoted(String),
}

impl Value {
    /// Reads the value as an integer the way the arithmetic builtins do.
    pub fn as_integer(&self) -> Result<i64, EvalError> {
        match self {
            Self::Integer(n) => Ok(*n),
            Self::Text(s) | Self::Symbol(s) => s
                .trim()
                .parse()
                .map_err(|_| EvalError::NotAnInteger(self.clone())),
            Self::Quoted(_) => Err(EvalError::NotAnInteger(self.clone())),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Text(s) | Self::Symbol(s) => f.write_str(s),
            Self::Quoted(s) => write!(f, "(quote {s})"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    #[error("unknown operator '{0}'")]
    UnknownOperator(String),
    #[error("type error: '{0}' is not an integer")]
    NotAnInteger(Value),
    #[error("integer overflow in '{0}'")]
    Overflow(&'static str),
    #[error("evaluation of {0} forms is not supported")]
    Unsupported(&'static str),
}

pub struct Evaluator<'b> {
    builtins: &'b Builtins,
}

impl<'b> Evaluator<'b> {
    pub fn new(builtins: &'b Builtins) -> Self {
        Self { builtins }
    }

    pub fn evaluate(&self, node: &Expression) -> Result<Value, EvalError> {
        match node {
            Expression::Integer(n) => Ok(Value::Integer(*n)),
            Expression::Text(s) => Ok(Value::Text(s.clone())),
            Expression::Symbol(s) => Ok(Value::Symbol(s.clone())),
            Expression::Procedure(operator, operands) => {
                self.evaluate_procedure(operator, operands)
            }
            Expression::Lambda(..) => Err(EvalError::Unsupported("lambda")),
            Expression::Quote(quoted) => Ok(Value::Quoted(quoted.clone())),
        }
    }

    fn evaluate_procedure(
        &self,
        operator: &Expression,
        operands: &[Expression],
    ) -> Result<Value, EvalError> {
        let args = operands
            .iter()
            .map(|arg| self.evaluate(arg))
            .collect::<Result<Vec<_>, _>>()?;

        let name = match self.evaluate(operator)? {
            Value::Symbol(name) => name,
            other => return Err(EvalError::UnknownOperator(other.to_string())),
        };
        let builtin = self
            .builtins
            .get(&name)
            .ok_or_else(|| EvalError::UnknownOperator(name.clone()))?;

        trace!("calling {name} with {} argument(s)", args.len());
        builtin.call(&args).map(Value::Integer)
    }
}

/// Evaluates `node` against the process-wide standard builtins.
pub fn evaluate(node: &Expression) -> Result<Value, EvalError> {
    let value = Evaluator::new(Builtins::global()).evaluate(node)?;
    debug!("evaluated to {value}");
    Ok(value)
}
