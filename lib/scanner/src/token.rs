use std::fmt::{self, Display, Formatter};

use cursor::{Line, SourceRange};
use strum_macros::EnumDiscriminants;

#[derive(Debug, Clone, PartialEq)]
pub struct Token<'a> {
    pub data: TokenData<'a>,
    pub range: SourceRange<'a>,
}

impl<'a> Token<'a> {
    pub fn new(data: TokenData<'a>, range: impl Into<SourceRange<'a>>) -> Token<'a> {
        Self { data, range: range.into() }
    }

    pub fn token_type(&self) -> TokenType {
        TokenType::from(&self.data)
    }

    pub fn lexeme(&self) -> &'a str {
        self.range.lexeme()
    }

    /// The value carried by string and number tokens.
    pub fn literal(&self) -> Option<LiteralValue<'a>> {
        match self.data {
            TokenData::Str(s) => Some(LiteralValue::Str(s)),
            TokenData::Number(n) => Some(LiteralValue::Number(n)),
            _ => None,
        }
    }

    /// The line the token ends on, which is where it was emitted.
    pub fn line(&self) -> Line {
        self.range.end_line()
    }
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lexeme())
    }
}

#[derive(Debug, Clone, PartialEq, EnumDiscriminants)]
#[strum_discriminants(name(TokenType), derive(Hash, strum_macros::Display))]
pub enum TokenData<'a> {
    // Single-character tokens.
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,
    Minus,
    Plus,
    Semicolon,
    Slash,
    Star,

    // One or two character tokens.
    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,

    // Literals.
    Identifier,
    Str(&'a str),
    Number(f64),

    // Keywords.
    And,
    Class,
    Else,
    False,
    Fun,
    For,
    If,
    Nil,
    Or,
    Print,
    Return,
    Super,
    This,
    True,
    Var,
    While,
    Eof,
}

impl TokenData<'_> {
    pub(crate) fn keyword(identifier: &str) -> Option<TokenData<'static>> {
        use TokenData::*;
        Some(match identifier {
            "and" => And,
            "class" => Class,
            "else" => Else,
            "false" => False,
            "for" => For,
            "fun" => Fun,
            "if" => If,
            "nil" => Nil,
            "or" => Or,
            "print" => Print,
            "return" => Return,
            "super" => Super,
            "this" => This,
            "true" => True,
            "var" => Var,
            "while" => While,
            _ => return None,
        })
    }
}

/// A scalar value as it appears in source code.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LiteralValue<'a> {
    Number(f64),
    Str(&'a str),
    Boolean(bool),
    Nil,
}

impl Display for LiteralValue<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LiteralValue::Number(n) => write!(f, "{n}"),
            LiteralValue::Str(s) => write!(f, "{s}"),
            LiteralValue::Boolean(b) => write!(f, "{b}"),
            LiteralValue::Nil => write!(f, "nil"),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn keyword_table() {
        assert_eq!(TokenData::keyword("for"), Some(TokenData::For));
        assert_eq!(TokenData::keyword("nil"), Some(TokenData::Nil));
        assert_eq!(TokenData::keyword("forest"), None);
        assert_eq!(TokenData::keyword("For"), None);
    }

    #[test]
    fn literal_display() {
        assert_eq!(LiteralValue::Number(123.0).to_string(), "123");
        assert_eq!(LiteralValue::Number(45.67).to_string(), "45.67");
        assert_eq!(LiteralValue::Str("hi there").to_string(), "hi there");
        assert_eq!(LiteralValue::Boolean(false).to_string(), "false");
        assert_eq!(LiteralValue::Nil.to_string(), "nil");
    }

    #[test]
    fn token_type_discriminant() {
        assert_eq!(TokenType::from(&TokenData::Number(1.0)), TokenType::Number);
        assert_eq!(TokenType::from(&TokenData::Str("x")), TokenType::Str);
        assert_eq!(TokenType::LeftParen.to_string(), "LeftParen");
    }
}
