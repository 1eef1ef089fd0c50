use super::ValueKind;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("undefined method '{method}' for {kind}")]
    NoMethod { method: String, kind: ValueKind },
    #[error("can't dup {0}")]
    CantDup(ValueKind),
    #[error("float domain error: {0}")]
    FloatDomain(&'static str),
    #[error("float {0:e} out of range of integer")]
    FloatOutOfRange(f64),
    #[error("wrong number of arguments (given {found}, expected {expected})")]
    WrongArgCount { expected: usize, found: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
