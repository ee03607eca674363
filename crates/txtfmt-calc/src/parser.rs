//! Recursive descent parser turning tokens into an [`Expr`] tree.
//!
//! Grammar:
//!
//! ```text
//! expression     --> additive
//! additive       --> multiplicative ( ("+" | "-") multiplicative )*
//! multiplicative --> unary ( ("*" | "/" | "%") unary )*
//! unary          --> ("-" | "+") unary | power
//! power          --> primary ( "^" unary )?
//! primary        --> NUMBER | IDENT | IDENT "(" arguments? ")" | "(" expression ")"
//! arguments      --> expression ( "," expression )*
//! ```
//!
//! Unary minus binds looser than `^`, so `-2^2` is `-4`.
//!
//! Nesting is capped at [`MAX_DEPTH`]: every unary level, parenthesis,
//! call and chained binary operator counts one level, which also bounds the
//! depth of the resulting tree.

use crate::ast::{BinaryOp, Expr};
use crate::error::{EvalError, Result};
use crate::lexer::{Lexer, Token};

/// Deepest nesting the parser accepts before giving up with
/// [`EvalError::TooDeep`].
pub const MAX_DEPTH: usize = 256;

pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Result<Self> {
        let mut lexer = Lexer::new(input);
        let current = lexer.next_token()?;
        Ok(Parser {
            lexer,
            current,
            depth: 0,
        })
    }

    /// Parses the whole input, rejecting trailing tokens.
    pub fn parse(&mut self) -> Result<Expr> {
        if self.current == Token::Eof {
            return Err(EvalError::Empty);
        }

        let expr = self.parse_additive()?;

        if self.current != Token::Eof {
            return Err(self.unexpected("an operator"));
        }
        Ok(expr)
    }

    fn advance(&mut self) -> Result<()> {
        self.current = self.lexer.next_token()?;
        Ok(())
    }

    fn expect(&mut self, expected: Token, description: &'static str) -> Result<()> {
        if self.current == expected {
            self.advance()
        } else {
            Err(self.unexpected(description))
        }
    }

    fn descend(&mut self) -> Result<()> {
        if self.depth >= MAX_DEPTH {
            return Err(EvalError::TooDeep(MAX_DEPTH));
        }
        self.depth += 1;
        Ok(())
    }

    /// Runs `f` one nesting level deeper.
    fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        self.descend()?;
        let out = f(self);
        self.depth -= 1;
        out
    }

    fn unexpected(&self, expected: &'static str) -> EvalError {
        EvalError::UnexpectedToken {
            found: self.current.to_string(),
            expected,
        }
    }

    fn parse_additive(&mut self) -> Result<Expr> {
        let mut left = self.parse_multiplicative()?;
        let mut links = 0;

        loop {
            let op = match self.current {
                Token::Plus => BinaryOp::Add,
                Token::Minus => BinaryOp::Sub,
                _ => break,
            };
            self.descend()?;
            links += 1;
            self.advance()?;
            let right = self.parse_multiplicative()?;
            left = Expr::Binary {
                left: Box::new(left),
                op,
                right: Box::new(right),
            };
        }

        self.depth -= links;
        Ok(left)
    }

    fn parse_multiplicative(&mut self) -> Result<Expr> {
        let mut left = self.parse_unary()?;
        let mut links = 0;

        loop {
            let op = match self.current {
                Token::Star => BinaryOp::Mul,
                Token::Slash => BinaryOp::Div,
                Token::Percent => BinaryOp::Rem,
                _ => break,
            };
            self.descend()?;
            links += 1;
            self.advance()?;
            let right = self.parse_unary()?;
            left = Expr::Binary {
                left: Box::new(left),
                op,
                right: Box::new(right),
            };
        }

        self.depth -= links;
        Ok(left)
    }

    fn parse_unary(&mut self) -> Result<Expr> {
        self.nested(|p| match p.current {
            Token::Minus => {
                p.advance()?;
                Ok(Expr::Neg(Box::new(p.parse_unary()?)))
            }
            Token::Plus => {
                p.advance()?;
                p.parse_unary()
            }
            _ => p.parse_power(),
        })
    }

    fn parse_power(&mut self) -> Result<Expr> {
        let base = self.parse_primary()?;

        if self.current == Token::Caret {
            self.advance()?;
            let exponent = self.parse_unary()?;
            return Ok(Expr::Binary {
                left: Box::new(base),
                op: BinaryOp::Pow,
                right: Box::new(exponent),
            });
        }

        Ok(base)
    }

    fn parse_primary(&mut self) -> Result<Expr> {
        match self.current.clone() {
            Token::Number(n) => {
                self.advance()?;
                Ok(Expr::Number(n))
            }
            Token::Ident(name) => {
                self.advance()?;
                if self.current == Token::LParen {
                    self.advance()?;
                    let args = self.nested(Self::parse_arguments)?;
                    Ok(Expr::Call { name, args })
                } else {
                    Ok(Expr::Constant(name))
                }
            }
            Token::LParen => {
                self.advance()?;
                let inner = self.nested(Self::parse_additive)?;
                self.expect(Token::RParen, "')'")?;
                Ok(inner)
            }
            _ => Err(self.unexpected("a number, name or '('")),
        }
    }

    fn parse_arguments(&mut self) -> Result<Vec<Expr>> {
        let mut args = Vec::new();
        if self.current == Token::RParen {
            self.advance()?;
            return Ok(args);
        }

        loop {
            args.push(self.parse_additive()?);
            match self.current {
                Token::Comma => self.advance()?,
                Token::RParen => {
                    self.advance()?;
                    return Ok(args);
                }
                _ => return Err(self.unexpected("',' or ')'")),
            }
        }
    }
}

/// Parses `input` into an expression tree.
pub fn parse(input: &str) -> Result<Expr> {
    Parser::new(input)?.parse()
}
