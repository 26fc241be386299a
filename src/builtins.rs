use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::interpreter::{EvalError, Value};

/// Signature shared by every builtin: evaluated arguments in, integer out.
pub type BuiltinFn = fn(&[Value]) -> Result<i64, EvalError>;

#[derive(Clone, Copy)]
pub struct Builtin {
    pub name: &'static str,
    pub func: BuiltinFn,
}

impl Builtin {
    pub const fn new(name: &'static str, func: BuiltinFn) -> Self {
        Self { name, func }
    }

    pub fn call(&self, args: &[Value]) -> Result<i64, EvalError> {
        (self.func)(args)
    }
}

impl std::fmt::Debug for Builtin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<builtin {}>", self.name)
    }
}

static STANDARD: Lazy<Builtins> = Lazy::new(Builtins::standard);

/// Symbol to operation lookup. Built once, then only read.
#[derive(Clone, Debug, Default)]
pub struct Builtins {
    funcs: HashMap<String, Builtin>,
}

impl Builtins {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn standard() -> Self {
        Self::new()
            .register("+", Builtin::new("add", add))
            .register("*", Builtin::new("multiply", multiply))
    }

    /// The process-wide standard registry.
    pub fn global() -> &'static Self {
        &STANDARD
    }

    pub fn register(mut self, symbol: &str, builtin: Builtin) -> Self {
        self.funcs.insert(symbol.to_string(), builtin);
        self
    }

    pub fn get(&self, symbol: &str) -> Option<&Builtin> {
        self.funcs.get(symbol)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.funcs.contains_key(symbol)
    }
}

fn add(args: &[Value]) -> Result<i64, EvalError> {
    args.iter().try_fold(0i64, |total, arg| {
        total
            .checked_add(arg.as_integer()?)
            .ok_or(EvalError::Overflow("+"))
    })
}

fn multiply(args: &[Value]) -> Result<i64, EvalError> {
    args.iter().try_fold(1i64, |total, arg| {
        total
            .checked_mul(arg.as_integer()?)
            .ok_or(EvalError::Overflow("*"))
    })
}
