//! Scans an expression string into tokens.

use std::iter::Peekable;
use std::str::Chars;

use crate::error::{EvalError, Result};

/// Tokens recognized by the expression lexer.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Number(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Caret,
    LParen,
    RParen,
    Comma,
    Eof,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Number(n) => write!(f, "number {}", n),
            Token::Ident(s) => write!(f, "identifier '{}'", s),
            Token::Plus => write!(f, "'+'"),
            Token::Minus => write!(f, "'-'"),
            Token::Star => write!(f, "'*'"),
            Token::Slash => write!(f, "'/'"),
            Token::Percent => write!(f, "'%'"),
            Token::Caret => write!(f, "'^'"),
            Token::LParen => write!(f, "'('"),
            Token::RParen => write!(f, "')'"),
            Token::Comma => write!(f, "','"),
            Token::Eof => write!(f, "end of input"),
        }
    }
}

pub struct Lexer<'a> {
    input: Peekable<Chars<'a>>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input: input.chars().peekable(),
        }
    }

    /// Advances the lexer and returns the next token.
    pub fn next_token(&mut self) -> Result<Token> {
        self.skip_whitespace();

        let token = match self.input.next() {
            Some('+') => Token::Plus,
            Some('-') => Token::Minus,
            Some('*') => Token::Star,
            Some('/') => Token::Slash,
            Some('%') => Token::Percent,
            Some('^') => Token::Caret,
            Some('(') => Token::LParen,
            Some(')') => Token::RParen,
            Some(',') => Token::Comma,
            Some(ch) if ch.is_ascii_digit() || ch == '.' => self.read_number(ch)?,
            Some(ch) if ch.is_ascii_alphabetic() || ch == '_' => self.read_ident(ch),
            Some(ch) => return Err(EvalError::UnexpectedChar(ch)),
            None => Token::Eof,
        };
        Ok(token)
    }

    fn skip_whitespace(&mut self) {
        while let Some(&ch) = self.input.peek() {
            if !ch.is_whitespace() {
                break;
            }
            self.input.next();
        }
    }

    fn read_number(&mut self, first: char) -> Result<Token> {
        let mut literal = String::from(first);
        while let Some(&ch) = self.input.peek() {
            if !ch.is_ascii_digit() && ch != '.' {
                break;
            }
            literal.push(ch);
            self.input.next();
        }

        // A lone '.' or "1.2.3" are not numbers; f64's parser rejects both.
        literal
            .parse::<f64>()
            .map(Token::Number)
            .map_err(|_| EvalError::MalformedNumber(literal))
    }

    fn read_ident(&mut self, first: char) -> Token {
        let mut ident = String::from(first);
        while let Some(&ch) = self.input.peek() {
            if !ch.is_ascii_alphanumeric() && ch != '_' {
                break;
            }
            ident.push(ch);
            self.input.next();
        }
        Token::Ident(ident.to_ascii_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(input);
        let mut out = Vec::new();
        loop {
            let token = lexer.next_token().unwrap();
            if token == Token::Eof {
                return out;
            }
            out.push(token);
        }
    }

    #[test]
    fn operators_and_numbers() {
        assert_eq!(
            tokens("1 + 2.5*(3)"),
            vec![
                Token::Number(1.0),
                Token::Plus,
                Token::Number(2.5),
                Token::Star,
                Token::LParen,
                Token::Number(3.0),
                Token::RParen,
            ]
        );
    }

    #[test]
    fn identifiers_are_lowercased() {
        assert_eq!(
            tokens("SQRT(x_1)"),
            vec![
                Token::Ident("sqrt".into()),
                Token::LParen,
                Token::Ident("x_1".into()),
                Token::RParen,
            ]
        );
    }

    #[test]
    fn leading_dot_number() {
        assert_eq!(tokens(".5"), vec![Token::Number(0.5)]);
    }

    #[test]
    fn malformed_number() {
        let mut lexer = Lexer::new("1.2.3");
        assert_eq!(
            lexer.next_token(),
            Err(EvalError::MalformedNumber("1.2.3".into()))
        );
    }

    #[test]
    fn unexpected_char() {
        let mut lexer = Lexer::new("#");
        assert_eq!(lexer.next_token(), Err(EvalError::UnexpectedChar('#')));
    }
}
