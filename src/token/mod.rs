pub mod lexer;
pub mod token;

pub use self::lexer::{Error, Lexer};
pub use self::token::{Kind, Token};
