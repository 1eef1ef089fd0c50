use super::token::{Kind, Token};
use crate::loc::{Locate, SourceLocation};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("unexpected character '{ch}'")]
    UnexpectedChar { ch: char, loc: SourceLocation },
    #[error("unterminated string literal")]
    UnterminatedString { loc: SourceLocation },
    #[error("invalid numeric literal '{text}'")]
    InvalidNumber { text: String, loc: SourceLocation },
}

impl Locate for Error {
    fn location(&self) -> SourceLocation {
        match self {
            Error::UnexpectedChar { loc, .. }
            | Error::UnterminatedString { loc }
            | Error::InvalidNumber { loc, .. } => *loc,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[derive(Clone)]
pub struct Lexer<'a> {
    source: &'a str,
    offset: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Lexer<'a> {
        Lexer { source, offset: 0 }
    }

    fn unread(&self) -> &'a str {
        &self.source[self.offset..]
    }

    fn peek(&self) -> Option<char> {
        self.unread().chars().next()
    }

    fn peek_second(&self) -> Option<char> {
        self.unread().chars().nth(1)
    }

    fn advance(&mut self, count: usize) {
        self.offset += count;
    }

    fn advance_while<F>(&mut self, predicate: F) -> &'a str
    where
        F: Fn(char) -> bool,
    {
        let unread = self.unread();
        let len = unread
            .char_indices()
            .find(|(_, c)| !predicate(*c))
            .map_or(unread.len(), |(i, _)| i);
        self.advance(len);
        &unread[..len]
    }

    fn skip_trivia(&mut self) {
        loop {
            self.advance_while(char::is_whitespace);
            if let Some('#') = self.peek() {
                self.advance_while(|c| c != '\n');
            } else {
                break;
            }
        }
    }

    /// Identifier body plus an optional trailing `?` or `!`.
    fn ident(&mut self) -> &'a str {
        let start = self.offset;
        self.advance_while(is_ident_continue);
        if let Some('?') | Some('!') = self.peek() {
            self.advance(1);
        }
        &self.source[start..self.offset]
    }

    fn number(&mut self, start: usize) -> Result<Kind<'a>> {
        let mut is_float = false;
        self.advance_while(|c| c.is_ascii_digit());
        if self.peek() == Some('.') && self.peek_second().map_or(false, |c| c.is_ascii_digit()) {
            is_float = true;
            self.advance(1);
            self.advance_while(|c| c.is_ascii_digit());
        }
        if let Some('e') | Some('E') = self.peek() {
            let exponent = match self.peek_second() {
                Some(c) if c.is_ascii_digit() => true,
                Some('+') | Some('-') => self
                    .unread()
                    .chars()
                    .nth(2)
                    .map_or(false, |c| c.is_ascii_digit()),
                _ => false,
            };
            if exponent {
                is_float = true;
                self.advance(2);
                self.advance_while(|c| c.is_ascii_digit());
            }
        }
        let text = &self.source[start..self.offset];
        let invalid = || Error::InvalidNumber {
            text: text.to_owned(),
            loc: SourceLocation::new(start, text.len()),
        };
        if is_float {
            text.parse().map(Kind::Float).map_err(|_| invalid())
        } else {
            text.parse().map(Kind::Integer).map_err(|_| invalid())
        }
    }

    fn string(&mut self, start: usize) -> Result<Kind<'a>> {
        let body = self.advance_while(|c| c != '"');
        if self.peek().is_none() {
            return Err(Error::UnterminatedString {
                loc: SourceLocation::new(start, self.offset - start),
            });
        }
        self.advance(1);
        Ok(Kind::Str(body))
    }

    fn scan(&mut self) -> Option<Result<Kind<'a>>> {
        let c = self.peek()?;
        let start = self.offset;
        if c.is_ascii_digit() {
            return Some(self.number(start));
        }
        if c == '-' && self.peek_second().map_or(false, |d| d.is_ascii_digit()) {
            self.advance(1);
            return Some(self.number(start));
        }
        if is_ident_start(c) {
            let kind = match self.ident() {
                "nil" => Kind::Nil,
                "true" => Kind::True,
                "false" => Kind::False,
                "let" => Kind::Let,
                name => Kind::Identifier(name),
            };
            return Some(Ok(kind));
        }
        self.advance(c.len_utf8());
        let kind = match c {
            '"' => return Some(self.string(start)),
            ':' if self.peek().map_or(false, is_ident_start) => Kind::Symbol(self.ident()),
            '.' => Kind::Dot,
            ',' => Kind::Comma,
            ';' => Kind::Semicolon,
            '=' => Kind::Equal,
            '(' => Kind::LeftParen,
            ')' => Kind::RightParen,
            ch => {
                return Some(Err(Error::UnexpectedChar {
                    ch,
                    loc: SourceLocation::new(start, ch.len_utf8()),
                }))
            }
        };
        Some(Ok(kind))
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.skip_trivia();
        let start = self.offset;
        let kind = self.scan()?;
        let loc = SourceLocation::new(start, self.offset - start);
        Some(kind.map(|kind| Token { kind, loc }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<Kind> {
        Lexer::new(source)
            .map(|t| t.expect("lex error").kind)
            .collect()
    }

    #[test]
    fn method_call_chain() {
        assert_eq!(
            kinds("2.7.to_int"),
            vec![Kind::Float(2.7), Kind::Dot, Kind::Identifier("to_int")]
        );
        assert_eq!(
            kinds("3.dup"),
            vec![Kind::Integer(3), Kind::Dot, Kind::Identifier("dup")]
        );
    }

    #[test]
    fn negative_literals_and_exponents() {
        assert_eq!(
            kinds("-2.7 -3 1e20 -1.5e-3"),
            vec![
                Kind::Float(-2.7),
                Kind::Integer(-3),
                Kind::Float(1e20),
                Kind::Float(-1.5e-3),
            ]
        );
    }

    #[test]
    fn predicate_names_and_symbols() {
        assert_eq!(
            kinds("nil.nil? :symbol_token.equal?(:b)"),
            vec![
                Kind::Nil,
                Kind::Dot,
                Kind::Identifier("nil?"),
                Kind::Symbol("symbol_token"),
                Kind::Dot,
                Kind::Identifier("equal?"),
                Kind::LeftParen,
                Kind::Symbol("b"),
                Kind::RightParen,
            ]
        );
    }

    #[test]
    fn keywords_strings_and_comments() {
        assert_eq!(
            kinds("let s = \"hi\"; # trailing\ntrue false"),
            vec![
                Kind::Let,
                Kind::Identifier("s"),
                Kind::Equal,
                Kind::Str("hi"),
                Kind::Semicolon,
                Kind::True,
                Kind::False,
            ]
        );
    }

    #[test]
    fn token_locations_cover_the_lexeme() {
        let tokens: Vec<_> = Lexer::new("  :abc.dup").map(|t| t.unwrap()).collect();
        assert_eq!(tokens[0].loc, SourceLocation::new(2, 4));
        assert_eq!(tokens[2].loc, SourceLocation::new(7, 3));
    }

    #[test]
    fn lex_errors() {
        let err = Lexer::new("\"open").next().unwrap().unwrap_err();
        assert_eq!(err, Error::UnterminatedString { loc: SourceLocation::new(0, 5) });

        let err = Lexer::new("99999999999999999999").next().unwrap().unwrap_err();
        assert_eq!(err.to_string(), "invalid numeric literal '99999999999999999999'");

        let err = Lexer::new("@").next().unwrap().unwrap_err();
        assert_eq!(err.location(), SourceLocation::new(0, 1));
        assert_eq!(err.to_string(), "unexpected character '@'");

        let err = Lexer::new(": x").next().unwrap().unwrap_err();
        assert_eq!(err.to_string(), "unexpected character ':'");
    }
}
