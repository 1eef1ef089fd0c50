use self::Kind::*;
use crate::loc::{Locate, SourceLocation};
use std::fmt::{self, Display};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Kind<'a> {
    Integer(i64),
    Float(f64),
    Symbol(&'a str),
    Str(&'a str),
    Identifier(&'a str),
    Nil,
    True,
    False,
    Let,
    Dot,
    Comma,
    Semicolon,
    Equal,
    LeftParen,
    RightParen,
}

impl<'a> Display for Kind<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Integer(n) => write!(f, "integer {}", n),
            Float(x) => write!(f, "float {}", x),
            Symbol(s) => write!(f, "symbol :{}", s),
            Str(s) => write!(f, "string {:?}", s),
            Identifier(s) => write!(f, "identifier '{}'", s),
            Nil => write!(f, "'nil'"),
            True => write!(f, "'true'"),
            False => write!(f, "'false'"),
            Let => write!(f, "'let'"),
            Dot => write!(f, "'.'"),
            Comma => write!(f, "','"),
            Semicolon => write!(f, "';'"),
            Equal => write!(f, "'='"),
            LeftParen => write!(f, "'('"),
            RightParen => write!(f, "')'"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token<'a> {
    pub kind: Kind<'a>,
    pub loc: SourceLocation,
}

impl<'a> Display for Token<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.kind.fmt(f)
    }
}

impl<'a> Locate for Token<'a> {
    fn location(&self) -> SourceLocation {
        self.loc
    }
}
