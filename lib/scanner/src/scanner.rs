use cursor::{Cursor, Line, SourceRange};
use errors::{ErrorReporter, RloxError};

pub mod token;
pub use token::{LiteralValue, Token, TokenData, TokenType};
use TokenData::*;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ScanErrorType {
    #[error("Unexpected character.")]
    UnexpectedCharacter(char),
    #[error("Unterminated string.")]
    UnterminatedString,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("[line {line}] Error: {error}")]
pub struct ScanError {
    pub error: ScanErrorType,
    pub line: Line,
}

impl From<ScanError> for RloxError {
    fn from(e: ScanError) -> Self {
        RloxError::new(e.line, e.error)
    }
}

/// Scans `source` in one go.
///
/// Lexical errors don't stop the scan: each one is handed to `reporter` and the
/// offending characters simply produce no token. The result always ends with
/// exactly one [`TokenData::Eof`] token.
pub fn scan<'a>(source: &'a str, reporter: &mut impl ErrorReporter) -> Vec<Token<'a>> {
    let tokens: Vec<_> = TokenStream::new(source)
        .filter_map(|result| match result {
            Ok(token) => Some(token),
            Err(e) => {
                log::trace!("Scan error: {:?}", e);
                reporter.report(e.line, &e.error.to_string());
                None
            }
        })
        .collect();
    log::debug!("Scanned {} tokens", tokens.len());
    tokens
}

/// Lazy scanner, yields tokens (or lexical errors) one at a time.
///
/// After the `Eof` token has been yielded the stream is exhausted.
#[derive(Debug, Clone)]
pub struct TokenStream<'a> {
    start: Cursor<'a>,
    current: Cursor<'a>,
    done: bool,
}

impl<'a> TokenStream<'a> {
    pub fn new(source: &'a str) -> Self {
        let cursor = Cursor::new(source);
        Self { start: cursor.clone(), current: cursor, done: false }
    }

    fn lexeme(&self) -> &'a str {
        self.start.slice_until(&self.current)
    }

    fn make_token(&self, data: TokenData<'a>) -> Token<'a> {
        Token::new(data, (self.start.clone(), self.current.clone()))
    }

    fn error(&self, error: ScanErrorType) -> ScanError {
        ScanError { error, line: self.current.line() }
    }

    /// Returns `None` for characters that don't produce a token (whitespace,
    /// comments).
    fn scan_token(&mut self, c: char) -> Option<Result<Token<'a>, ScanError>> {
        let data = match c {
            '(' => LeftParen,
            ')' => RightParen,
            '{' => LeftBrace,
            '}' => RightBrace,
            ',' => Comma,
            '.' => Dot,
            '-' => Minus,
            '+' => Plus,
            ';' => Semicolon,
            '*' => Star,

            '!' => if self.current.next_if_eq('=') { BangEqual } else { Bang },
            '=' => if self.current.next_if_eq('=') { EqualEqual } else { Equal },
            '<' => if self.current.next_if_eq('=') { LessEqual } else { Less },
            '>' => if self.current.next_if_eq('=') { GreaterEqual } else { Greater },

            '/' => {
                if self.current.next_if_eq('/') {
                    // Comment, runs until the end of the line
                    self.current.advance_while(|c| c != '\n');
                    return None;
                }
                Slash
            }

            // The cursor keeps track of lines by itself
            ' ' | '\r' | '\t' | '\n' => return None,

            '"' => return Some(self.string()),
            d if d.is_ascii_digit() => self.number(),
            c if c.is_ascii_alphabetic() || c == '_' => self.identifier(),

            c => return Some(Err(self.error(ScanErrorType::UnexpectedCharacter(c)))),
        };

        Some(Ok(self.make_token(data)))
    }

    fn string(&mut self) -> Result<Token<'a>, ScanError> {
        self.current.advance_while(|c| c != '"');

        if !self.current.next_if_eq('"') {
            return Err(self.error(ScanErrorType::UnterminatedString));
        }

        let lexeme = self.lexeme();
        Ok(self.make_token(Str(&lexeme[1..lexeme.len() - 1])))
    }

    fn number(&mut self) -> TokenData<'a> {
        self.current.advance_while(|c| c.is_ascii_digit());

        // A trailing '.' is not part of the number, `3.` is a number and a dot
        if self.current.peek() == Some('.')
            && self.current.peek_next().is_some_and(|c| c.is_ascii_digit())
        {
            self.current.next();
            self.current.advance_while(|c| c.is_ascii_digit());
        }

        // Only ASCII digits with at most one inner '.' got here
        Number(self.lexeme().parse().expect("digit run is a valid f64"))
    }

    fn identifier(&mut self) -> TokenData<'a> {
        self.current.advance_while(|c| c.is_ascii_alphanumeric() || c == '_');
        TokenData::keyword(self.lexeme()).unwrap_or(Identifier)
    }
}

impl<'a> Iterator for TokenStream<'a> {
    type Item = Result<Token<'a>, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            self.start = self.current.clone();

            let Some(c) = self.current.next() else {
                self.done = true;
                return Some(Ok(Token::new(Eof, SourceRange::empty_at(self.current.clone()))));
            };

            if let Some(result) = self.scan_token(c) {
                log::trace!("Scanned {:?}", result);
                return Some(result);
            }
        }
    }
}
