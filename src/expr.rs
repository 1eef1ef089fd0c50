use crate::loc::SourceLocation;

#[derive(Debug, Clone, PartialEq)]
pub enum Expression<'a> {
    Nil,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Symbol(&'a str),
    Str(&'a str),
    Variable {
        name: &'a str,
        loc: SourceLocation,
    },
    Grouping(Box<Expression<'a>>),
    Call {
        receiver: Box<Expression<'a>>,
        method: &'a str,
        loc: SourceLocation,
        args: Vec<Expression<'a>>,
    },
}
