//! Duplication and integer coercion for immediate values.
//!
//! nil, true, false, integers and symbols carry no mutable state, so `dup`
//! hands back the receiver itself instead of going through the generic Kernel
//! copy. `to_int` on a float rounds toward negative infinity.

use crate::dispatch::MethodTable;
use crate::value::{Error, Result, Value, ValueKind};

/// Kinds whose `dup` is the identity.
pub const DUP_IDENTITY_KINDS: [ValueKind; 5] = [
    ValueKind::Nil,
    ValueKind::True,
    ValueKind::False,
    ValueKind::Integer,
    ValueKind::Symbol,
];

/// Kinds that answer `to_int`.
pub const TO_INT_KINDS: [ValueKind; 2] = [ValueKind::Integer, ValueKind::Float];

/// Return `v` itself.
///
/// Immediates live inline in `Value`, so the copy made here is the same
/// object: `duplicate(v).identical(&v)` holds and symbols are not re-interned.
pub fn duplicate(v: &Value) -> Value {
    v.clone()
}

pub fn coerce_to_integer(v: &Value) -> Result<Value> {
    match v {
        Value::Integer(_) => Ok(v.clone()),
        Value::Float(x) => floor_to_i64(*x).map(Value::Integer),
        other => Err(Error::NoMethod {
            method: "to_int".to_owned(),
            kind: other.kind(),
        }),
    }
}

/// `floor(x)` as an `i64`, refusing NaN, infinities and anything whose floor
/// does not fit.
pub fn floor_to_i64(x: f64) -> Result<i64> {
    if x.is_nan() {
        return Err(Error::FloatDomain("NaN"));
    }
    if x.is_infinite() {
        return Err(Error::FloatDomain(if x > 0.0 { "Infinity" } else { "-Infinity" }));
    }
    let floored = x.floor();
    // i64::MIN is exactly -2^63; i64::MAX rounds up to 2^63 as f64.
    if floored < i64::MIN as f64 || floored >= i64::MAX as f64 {
        return Err(Error::FloatOutOfRange(x));
    }
    Ok(floored as i64)
}

pub fn load_libs(table: &mut MethodTable) {
    for kind in DUP_IDENTITY_KINDS {
        table.define(kind, method!("dup", recv => Ok(duplicate(recv))));
    }
    for kind in TO_INT_KINDS {
        table.define(kind, method!("to_int", recv => coerce_to_integer(recv)));
    }
}
