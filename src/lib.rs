//! Core value kinds for a small dynamically typed runtime.
//!
//! Immediates (nil, booleans, integers, floats, symbols) are duplicated by
//! identity and coerced to integers with floor semantics; see
//! [`interpreter::libs::immediate`].

#[macro_use]
pub mod dispatch;

pub mod config;
pub mod expr;
pub mod interpreter;
pub mod loc;
pub mod parse;
pub mod repl;
pub mod stmt;
pub mod symbol;
pub mod token;
pub mod value;

pub use config::Config;
pub use dispatch::{Method, MethodTable};
pub use interpreter::libs::immediate::{coerce_to_integer, duplicate};
pub use interpreter::Interpreter;
pub use symbol::{Symbol, SymbolTable};
pub use value::{Value, ValueKind};
