mod error;
mod interpreter;
pub mod libs;

#[cfg(test)]
mod interpreter_tests;

pub use self::error::{report, Error};
pub use self::interpreter::Interpreter;
