mod error;
mod kind;
mod value;

pub use self::error::*;
pub use self::kind::*;
pub use self::value::*;
