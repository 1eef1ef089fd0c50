use crate::loc::{SourceLocation, TryLocate};
use crate::parse;
use crate::value;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error(transparent)]
    Parse(#[from] parse::Error),
    #[error("undefined local variable '{name}'")]
    UndefinedVariable { name: String, loc: SourceLocation },
    #[error("{err}")]
    Value {
        err: value::Error,
        loc: SourceLocation,
    },
}

impl Error {
    /// The runtime error behind a failed method call, if that is what this is.
    pub fn value_error(&self) -> Option<&value::Error> {
        match self {
            Error::Value { err, .. } => Some(err),
            _ => None,
        }
    }
}

impl TryLocate for Error {
    fn maybe_location(&self) -> Option<SourceLocation> {
        match self {
            Error::Readline(_) => None,
            Error::Parse(err) => err.maybe_location(),
            Error::UndefinedVariable { loc, .. } | Error::Value { loc, .. } => Some(*loc),
        }
    }
}

/// Format `err` for a terminal, quoting the offending line of `source`.
pub fn report(err: &Error, source: &str) -> String {
    match err.maybe_location() {
        Some(loc) => {
            let (line, col) = loc.line_col(source);
            format!("error: {} (line {}, column {})\n{}", err, line, col, loc.render(source))
        }
        None => format!("error: {}", err),
    }
}
