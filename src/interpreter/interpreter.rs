use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use super::{libs, Error};
use crate::dispatch::MethodTable;
use crate::expr::Expression;
use crate::parse::Parser;
use crate::stmt::Statement;
use crate::symbol::SymbolTable;
use crate::value::Value;

type Result<T> = std::result::Result<T, Error>;

pub struct Interpreter {
    symbols: SymbolTable,
    globals: HashMap<String, Value>,
    methods: MethodTable,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    pub fn new() -> Self {
        let mut methods = MethodTable::new();
        libs::load_libs(&mut methods);
        let mut interp = Interpreter {
            symbols: SymbolTable::new(),
            globals: HashMap::new(),
            methods,
        };
        interp.define("INFINITY", Value::Float(f64::INFINITY));
        interp.define("NAN", Value::Float(f64::NAN));
        interp
    }

    pub fn define(&mut self, name: &str, val: Value) {
        self.globals.insert(name.to_owned(), val);
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.globals.get(name)
    }

    pub fn intern(&mut self, name: &str) -> Value {
        Value::Symbol(self.symbols.intern(name))
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn methods(&self) -> &MethodTable {
        &self.methods
    }

    pub fn methods_mut(&mut self) -> &mut MethodTable {
        &mut self.methods
    }

    pub fn inspect(&self, val: &Value) -> String {
        val.inspect(&self.symbols).to_string()
    }

    /// Run every statement in `source`, returning the value of the last
    /// expression statement.
    pub fn run(&mut self, source: &str) -> Result<Option<Value>> {
        let stmts = Parser::new(source).program()?;
        let mut last = None;
        for stmt in &stmts {
            last = self.statement(stmt)?;
        }
        Ok(last)
    }

    pub fn statement(&mut self, stmt: &Statement) -> Result<Option<Value>> {
        match stmt {
            Statement::Let { name, init } => {
                let val = self.evaluate(init)?;
                debug!(name, "let");
                self.define(name, val);
                Ok(None)
            }
            Statement::Expression(expr) => self.evaluate(expr).map(Some),
        }
    }

    pub fn evaluate(&mut self, expr: &Expression) -> Result<Value> {
        match expr {
            Expression::Nil => Ok(Value::Nil),
            Expression::Bool(b) => Ok(Value::Bool(*b)),
            Expression::Integer(n) => Ok(Value::Integer(*n)),
            Expression::Float(x) => Ok(Value::Float(*x)),
            Expression::Symbol(name) => Ok(self.intern(name)),
            Expression::Str(s) => Ok(Value::Str(Arc::from(*s))),
            Expression::Variable { name, loc } => {
                self.get(name).cloned().ok_or_else(|| Error::UndefinedVariable {
                    name: (*name).to_owned(),
                    loc: *loc,
                })
            }
            Expression::Grouping(inner) => self.evaluate(inner),
            Expression::Call {
                receiver,
                method,
                loc,
                args,
            } => {
                let recv = self.evaluate(receiver)?;
                let args = args
                    .iter()
                    .map(|arg| self.evaluate(arg))
                    .collect::<Result<Vec<_>>>()?;
                self.methods
                    .invoke(&recv, method, &args)
                    .map_err(|err| Error::Value { err, loc: *loc })
            }
        }
    }
}
