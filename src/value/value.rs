use std::fmt::{self, Display, Formatter};
use std::sync::Arc;

use super::ValueKind;
use crate::symbol::{Symbol, SymbolTable};

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Nil,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Symbol(Symbol),
    Str(Arc<str>),
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Nil => ValueKind::Nil,
            Value::Bool(true) => ValueKind::True,
            Value::Bool(false) => ValueKind::False,
            Value::Integer(_) => ValueKind::Integer,
            Value::Float(_) => ValueKind::Float,
            Value::Symbol(_) => ValueKind::Symbol,
            Value::Str(_) => ValueKind::String,
        }
    }

    /// Object identity, as opposed to `==` which compares contents.
    ///
    /// Immediates are identical when they hold the same value (floats compare
    /// bit patterns, so `0.0` and `-0.0` are distinct objects). Strings are
    /// identical only when they share an allocation.
    pub fn identical(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a.to_bits() == b.to_bits(),
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    pub fn is_frozen(&self) -> bool {
        self.kind().is_immediate()
    }

    /// Borrow a displayable inspect form; symbols are resolved through `symbols`.
    pub fn inspect<'a>(&'a self, symbols: &'a SymbolTable) -> Inspect<'a> {
        Inspect {
            value: self,
            symbols,
        }
    }
}

pub struct Inspect<'a> {
    value: &'a Value,
    symbols: &'a SymbolTable,
}

impl<'a> Display for Inspect<'a> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self.value {
            Value::Nil => write!(f, "nil"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Integer(n) => write!(f, "{}", n),
            Value::Float(x) if x.is_nan() => write!(f, "NaN"),
            Value::Float(x) if x.is_infinite() => {
                write!(f, "{}", if *x > 0.0 { "Infinity" } else { "-Infinity" })
            }
            Value::Float(x) if x.fract() == 0.0 => write!(f, "{:.1}", x),
            Value::Float(x) => write!(f, "{}", x),
            Value::Symbol(sym) => match self.symbols.name(*sym) {
                Some(name) => write!(f, ":{}", name),
                None => write!(f, ":#<symbol {}>", sym.id()),
            },
            Value::Str(s) => write!(f, "{:?}", s),
        }
    }
}
