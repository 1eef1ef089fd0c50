//! Method lookup keyed by value kind.
//!
//! Lookup walks the kind's own table first and falls back to the generic
//! Kernel table shared by every kind. Registering a method under a kind
//! therefore overrides the Kernel behaviour for exactly that kind.

#[macro_use]
mod method;

pub use self::method::Method;

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::value::{Error, Result, Value, ValueKind};

#[derive(Debug, Default)]
pub struct MethodTable {
    classes: HashMap<ValueKind, HashMap<&'static str, Method>>,
    kernel: HashMap<&'static str, Method>,
}

impl MethodTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `method` for values of `kind`, replacing any earlier entry.
    pub fn define(&mut self, kind: ValueKind, method: Method) {
        trace!(%kind, method = method.name, "define method");
        self.classes
            .entry(kind)
            .or_default()
            .insert(method.name, method);
    }

    /// Register a generic method visible on every kind.
    pub fn define_kernel(&mut self, method: Method) {
        trace!(method = method.name, "define kernel method");
        self.kernel.insert(method.name, method);
    }

    pub fn lookup(&self, kind: ValueKind, name: &str) -> Option<&Method> {
        self.classes
            .get(&kind)
            .and_then(|methods| methods.get(name))
            .or_else(|| self.kernel.get(name))
    }

    /// True if `kind` has its own entry for `name`, not counting Kernel.
    pub fn overrides(&self, kind: ValueKind, name: &str) -> bool {
        self.classes
            .get(&kind)
            .map_or(false, |methods| methods.contains_key(name))
    }

    pub fn invoke(&self, recv: &Value, name: &str, args: &[Value]) -> Result<Value> {
        let kind = recv.kind();
        let method = self.lookup(kind, name).ok_or_else(|| Error::NoMethod {
            method: name.to_owned(),
            kind,
        })?;
        debug!(%kind, method = name, argc = args.len(), "dispatch");
        if method.arity != args.len() {
            return Err(Error::WrongArgCount {
                expected: method.arity,
                found: args.len(),
            });
        }
        method.call(recv, args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> MethodTable {
        let mut table = MethodTable::new();
        table.define_kernel(method!("name", _recv => Ok(Value::Integer(0))));
        table.define(ValueKind::Float, method!("name", _recv => Ok(Value::Integer(1))));
        table
    }

    #[test]
    fn kind_entry_overrides_kernel() {
        let table = table();
        assert_eq!(
            table.invoke(&Value::Float(1.5), "name", &[]),
            Ok(Value::Integer(1))
        );
        assert_eq!(table.invoke(&Value::Nil, "name", &[]), Ok(Value::Integer(0)));
        assert!(table.overrides(ValueKind::Float, "name"));
        assert!(!table.overrides(ValueKind::Nil, "name"));
    }

    #[test]
    fn unknown_method_reports_receiver_kind() {
        let err = table().invoke(&Value::Bool(true), "missing", &[]).unwrap_err();
        assert_eq!(
            err,
            Error::NoMethod {
                method: "missing".to_owned(),
                kind: ValueKind::True,
            }
        );
        assert_eq!(err.to_string(), "undefined method 'missing' for TrueClass");
    }

    #[test]
    fn arity_is_checked_before_the_call() {
        let err = table()
            .invoke(&Value::Nil, "name", &[Value::Nil])
            .unwrap_err();
        assert_eq!(err, Error::WrongArgCount { expected: 0, found: 1 });
    }

    #[test]
    fn method_binds_arguments_by_position() {
        let pick = method!("pick", _recv, a, b => Ok(Value::Integer(match (a, b) {
            (Value::Integer(x), Value::Integer(y)) => x - y,
            _ => 0,
        })));
        assert_eq!(pick.arity, 2);
        assert_eq!(
            pick.call(&Value::Nil, &[Value::Integer(5), Value::Integer(2)]),
            Ok(Value::Integer(3))
        );
        assert!(pick.call(&Value::Nil, &[]).is_err());
    }
}
