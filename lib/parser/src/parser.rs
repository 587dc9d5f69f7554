mod ast_printer;
mod expr;

use std::fmt::Display;

pub use ast_printer::AstPrinter;
pub use expr::{Expr, Visitor};
pub use scanner::LiteralValue;

use cursor::{Cursor, SourceRange};
use errors::RloxError;
use scanner::{Token, TokenData};

use TokenData::*;

pub type Result<'a, T> = std::result::Result<T, ParserError<'a>>;

/// How many groupings and unary operators may enclose each other before
/// parsing gives up.
pub const MAX_NESTING: usize = 128;

/// The first grammar violation hit while parsing. Parsing stops there, so there
/// is never more than one.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub struct ParserError<'a> {
    pub error: ParserErrorType,
    pub token: Token<'a>,
}

impl<'a> ParserError<'a> {
    fn new(error: ParserErrorType, token: Token<'a>) -> Self {
        Self { error, token }
    }
}

impl From<&ParserError<'_>> for RloxError {
    fn from(e: &ParserError<'_>) -> Self {
        let at = match e.token.data {
            Eof => "end".to_string(),
            _ => format!("'{}'", e.token.lexeme()),
        };
        RloxError::new(e.token.line(), &e.error).at(at)
    }
}

impl From<ParserError<'_>> for RloxError {
    fn from(e: ParserError<'_>) -> Self {
        (&e).into()
    }
}

impl Display for ParserError<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", RloxError::from(self))
    }
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum ParserErrorType {
    #[error("Expect ')' after expression.")]
    MissingRightParen,
    #[error("Expect expression.")]
    ExpectedExpression,
    #[error("Expect end of expression.")]
    ExpectedEof,
    #[error("Expression nests too deeply.")]
    NestingTooDeep,
}

/// Recursive descent parser for Lox expressions.
///
/// ```text
/// expression → equality
/// equality   → comparison ( ( "!=" | "==" ) comparison )*
/// comparison → term ( ( ">" | ">=" | "<" | "<=" ) term )*
/// term       → factor ( ( "-" | "+" ) factor )*
/// factor     → unary ( ( "/" | "*" ) unary )*
/// unary      → ( "!" | "-" ) unary | primary
/// primary    → NUMBER | STRING | "true" | "false" | "nil" | "(" expression ")"
/// ```
#[derive(Debug)]
pub struct Parser<'t, 'a> {
    tokens: &'t [Token<'a>],
    current: usize,
    // Stands in for the tokens past the end of the slice, so that a sequence
    // without a trailing Eof still terminates.
    eof: Token<'a>,
    depth: usize,
}

impl<'t, 'a> Parser<'t, 'a> {
    pub fn new(tokens: &'t [Token<'a>]) -> Self {
        let eof = match tokens.last() {
            Some(last) if last.data == Eof => last.clone(),
            Some(last) => Token::new(Eof, SourceRange::empty_at(last.range.end().clone())),
            None => Token::new(Eof, SourceRange::empty_at(Cursor::new(""))),
        };
        Self { tokens, current: 0, eof, depth: 0 }
    }

    /// Parses a single expression from the front of the token sequence.
    pub fn parse(mut self) -> Result<'a, Expr<'a>> {
        let expr = self.expression()?;
        log::debug!("Parsed expression, stopped at token {}/{}", self.current, self.tokens.len());
        Ok(expr)
    }

    /// Like [`Parser::parse`], but the expression must span the whole input.
    pub fn parse_complete(mut self) -> Result<'a, Expr<'a>> {
        let expr = self.expression()?;
        self.consume_or_error(Eof, ParserErrorType::ExpectedEof)?;
        Ok(expr)
    }

    fn expression(&mut self) -> Result<'a, Expr<'a>> {
        self.equality()
    }

    fn equality(&mut self) -> Result<'a, Expr<'a>> {
        let mut expr = self.comparison()?;

        while matches!(self.peek().data, BangEqual | EqualEqual) {
            let operator = self.advance();
            let right = Box::new(self.comparison()?);
            expr = Expr::Binary { left: Box::new(expr), operator, right }
        }
        Ok(expr)
    }

    fn comparison(&mut self) -> Result<'a, Expr<'a>> {
        let mut expr = self.term()?;

        while matches!(self.peek().data, Greater | GreaterEqual | Less | LessEqual) {
            let operator = self.advance();
            let right = Box::new(self.term()?);
            expr = Expr::Binary { left: Box::new(expr), operator, right }
        }
        Ok(expr)
    }

    fn term(&mut self) -> Result<'a, Expr<'a>> {
        let mut expr = self.factor()?;

        while matches!(self.peek().data, Minus | Plus) {
            let operator = self.advance();
            let right = Box::new(self.factor()?);
            expr = Expr::Binary { left: Box::new(expr), operator, right }
        }
        Ok(expr)
    }

    fn factor(&mut self) -> Result<'a, Expr<'a>> {
        let mut expr = self.unary()?;

        while matches!(self.peek().data, Slash | Star) {
            let operator = self.advance();
            let right = Box::new(self.unary()?);
            expr = Expr::Binary { left: Box::new(expr), operator, right }
        }
        Ok(expr)
    }

    fn unary(&mut self) -> Result<'a, Expr<'a>> {
        if matches!(self.peek().data, Bang | Minus) {
            let operator = self.advance();
            let right = Box::new(self.nested(&operator, Self::unary)?);
            return Ok(Expr::Unary { operator, right });
        }
        self.primary()
    }

    fn primary(&mut self) -> Result<'a, Expr<'a>> {
        let token = self.advance();
        log::trace!("Parsing primary expression: {:?}", token.data);

        let value = match token.data {
            False => LiteralValue::Boolean(false),
            True => LiteralValue::Boolean(true),
            Nil => LiteralValue::Nil,
            Str(s) => LiteralValue::Str(s),
            Number(n) => LiteralValue::Number(n),
            LeftParen => {
                let expression = Box::new(self.nested(&token, Self::expression)?);
                self.consume_or_error(RightParen, ParserErrorType::MissingRightParen)?;
                return Ok(Expr::Grouping { expression });
            }
            _ => return Err(ParserError::new(ParserErrorType::ExpectedExpression, token)),
        };

        Ok(Expr::Literal { value })
    }
}

// Helpers
impl<'t, 'a> Parser<'t, 'a> {
    fn peek(&self) -> &Token<'a> {
        self.tokens.get(self.current).unwrap_or(&self.eof)
    }

    /// Returns the current token and moves past it, except at the end of input
    /// where it keeps returning `Eof`.
    fn advance(&mut self) -> Token<'a> {
        let token = self.peek().clone();
        if token.data != Eof {
            self.current += 1;
        }
        token
    }

    /// Runs `parse` one nesting level below `opener`, which fails if that would
    /// go past [`MAX_NESTING`].
    fn nested<T>(
        &mut self,
        opener: &Token<'a>,
        parse: impl FnOnce(&mut Self) -> Result<'a, T>,
    ) -> Result<'a, T> {
        if self.depth == MAX_NESTING {
            return Err(ParserError::new(ParserErrorType::NestingTooDeep, opener.clone()));
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    fn consume_or_error(&mut self, expected: TokenData, error: ParserErrorType) -> Result<'a, Token<'a>> {
        debug_assert!(!matches!(expected, Number(_) | Str(_)));
        if self.peek().data == expected {
            Ok(self.advance())
        } else {
            Err(ParserError::new(error, self.peek().clone()))
        }
    }
}
