use crate::expr::Expression;
use crate::loc::{Locate, SourceLocation};
use crate::stmt::Statement;
use crate::token::{self, Kind, Lexer, Token};
use std::iter::Peekable;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] token::Error),
    #[error("unexpected {found}, expected {expected}")]
    Unexpected {
        found: String,
        expected: &'static str,
        loc: SourceLocation,
    },
    #[error("unexpected end of input, expected {expected}")]
    EndOfInput {
        expected: &'static str,
        loc: SourceLocation,
    },
}

impl Locate for Error {
    fn location(&self) -> SourceLocation {
        match self {
            Error::Lex(err) => err.location(),
            Error::Unexpected { loc, .. } | Error::EndOfInput { loc, .. } => *loc,
        }
    }
}

type Result<T> = std::result::Result<T, Error>;

pub struct Parser<'a> {
    iter: Peekable<Lexer<'a>>,
    end: usize,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str) -> Parser<'a> {
        Parser {
            iter: Lexer::new(source).peekable(),
            end: source.len(),
        }
    }

    fn peek(&mut self) -> Result<Option<&Kind<'a>>> {
        match self.iter.peek() {
            Some(Ok(t)) => Ok(Some(&t.kind)),
            Some(Err(e)) => Err(Error::Lex(e.clone())),
            None => Ok(None),
        }
    }

    fn advance(&mut self, expected: &'static str) -> Result<Token<'a>> {
        match self.iter.next() {
            Some(token) => Ok(token?),
            None => Err(Error::EndOfInput {
                expected,
                loc: SourceLocation::new(self.end, 0),
            }),
        }
    }

    fn eat(&mut self, kind: &Kind<'a>) -> Result<bool> {
        if self.peek()? == Some(kind) {
            self.iter.next();
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn expect(&mut self, kind: Kind<'a>, expected: &'static str) -> Result<Token<'a>> {
        let token = self.advance(expected)?;
        if token.kind == kind {
            Ok(token)
        } else {
            Err(unexpected(&token, expected))
        }
    }

    pub fn program(&mut self) -> Result<Vec<Statement<'a>>> {
        let mut stmts = Vec::new();
        while self.peek()?.is_some() {
            stmts.push(self.statement()?);
        }
        Ok(stmts)
    }

    pub fn statement(&mut self) -> Result<Statement<'a>> {
        let stmt = if self.eat(&Kind::Let)? {
            let ident = self.advance("identifier")?;
            let Kind::Identifier(name) = ident.kind else {
                return Err(unexpected(&ident, "identifier"));
            };
            self.expect(Kind::Equal, "'='")?;
            let init = self.expression()?;
            Statement::Let { name, init }
        } else {
            Statement::Expression(self.expression()?)
        };
        self.eat(&Kind::Semicolon)?;
        Ok(stmt)
    }

    pub fn expression(&mut self) -> Result<Expression<'a>> {
        let mut expr = self.primary()?;
        while self.eat(&Kind::Dot)? {
            let token = self.advance("method name")?;
            let Kind::Identifier(method) = token.kind else {
                return Err(unexpected(&token, "method name"));
            };
            let args = if self.eat(&Kind::LeftParen)? {
                self.arguments()?
            } else {
                Vec::new()
            };
            expr = Expression::Call {
                receiver: Box::new(expr),
                method,
                loc: token.loc,
                args,
            };
        }
        Ok(expr)
    }

    /// Comma separated arguments after an opening parenthesis.
    fn arguments(&mut self) -> Result<Vec<Expression<'a>>> {
        let mut args = Vec::new();
        if self.eat(&Kind::RightParen)? {
            return Ok(args);
        }
        loop {
            args.push(self.expression()?);
            if self.eat(&Kind::Comma)? {
                continue;
            }
            self.expect(Kind::RightParen, "')'")?;
            return Ok(args);
        }
    }

    fn primary(&mut self) -> Result<Expression<'a>> {
        let token = self.advance("expression")?;
        let expr = match token.kind {
            Kind::Nil => Expression::Nil,
            Kind::True => Expression::Bool(true),
            Kind::False => Expression::Bool(false),
            Kind::Integer(n) => Expression::Integer(n),
            Kind::Float(x) => Expression::Float(x),
            Kind::Symbol(name) => Expression::Symbol(name),
            Kind::Str(s) => Expression::Str(s),
            Kind::Identifier(name) => Expression::Variable {
                name,
                loc: token.loc,
            },
            Kind::LeftParen => {
                let inner = self.expression()?;
                self.expect(Kind::RightParen, "')'")?;
                Expression::Grouping(Box::new(inner))
            }
            _ => return Err(unexpected(&token, "expression")),
        };
        Ok(expr)
    }
}

fn unexpected(token: &Token, expected: &'static str) -> Error {
    Error::Unexpected {
        found: token.kind.to_string(),
        expected,
        loc: token.location(),
    }
}
