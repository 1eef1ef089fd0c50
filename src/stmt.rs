use crate::expr::Expression;

#[derive(Debug, Clone, PartialEq)]
pub enum Statement<'a> {
    Let { name: &'a str, init: Expression<'a> },
    Expression(Expression<'a>),
}
