use std::sync::Arc;

use crate::dispatch::MethodTable;
use crate::value::{Error, Result, Value};

/// Kernel `dup`: copy the receiver into a fresh object.
///
/// Only heap kinds have anything to copy. Immediates without their own `dup`
/// cannot be duplicated this way.
pub fn generic_dup(v: &Value) -> Result<Value> {
    match v {
        Value::Str(s) => Ok(Value::Str(Arc::from(&**s))),
        other => Err(Error::CantDup(other.kind())),
    }
}

pub fn load_libs(table: &mut MethodTable) {
    table.define_kernel(method!("dup", recv => generic_dup(recv)));
    table.define_kernel(method!("frozen?", recv => Ok(Value::Bool(recv.is_frozen()))));
    table.define_kernel(method!("nil?", recv => Ok(Value::Bool(matches!(recv, Value::Nil)))));
    table.define_kernel(method!("equal?", recv, other => Ok(Value::Bool(recv.identical(other)))));
    table.define_kernel(method!("eql?", recv, other => Ok(Value::Bool(recv == other))));
}
