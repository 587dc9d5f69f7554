use std::{
    fmt::{Display, Formatter},
    str::Chars,
};

mod source_range;
pub use source_range::*;

/// A position inside a source string that knows which line it is on.
///
/// Advancing over a `'\n'` bumps the line counter, so the scanner never has to
/// track lines on its own.
#[derive(Clone)]
pub struct Cursor<'a> {
    source: &'a str,
    chars: Chars<'a>,
    line: Line,
}

impl<'a> std::fmt::Debug for Cursor<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // The whole source is rarely useful in test output, only show it with {:#?}
        if f.alternate() {
            f.debug_struct("Cursor")
                .field("line", &self.line)
                .field("offset", &self.offset())
                .field("source", &self.source)
                .finish()
        } else {
            f.debug_struct("Cursor")
                .field("line", &self.line)
                .field("offset", &self.offset())
                .finish()
        }
    }
}

impl<'a> PartialEq for Cursor<'a> {
    fn eq(&self, other: &Self) -> bool {
        (self.source, self.chars.as_str()) == (other.source, other.chars.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Line(pub usize);

impl Display for Line {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source, chars: source.chars(), line: Line(1) }
    }

    pub fn line(&self) -> Line {
        self.line
    }

    /// Byte offset into the source.
    pub fn offset(&self) -> usize {
        self.source.len() - self.chars.as_str().len()
    }

    pub fn peek(&self) -> Option<char> {
        self.chars.clone().next()
    }

    pub fn peek_next(&self) -> Option<char> {
        self.chars.clone().nth(1)
    }

    /// Consumes the next character only if it equals `expected`.
    pub fn next_if_eq(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.next();
            true
        } else {
            false
        }
    }

    /// Consumes characters as long as `pred` holds, stopping in front of the
    /// first one that doesn't.
    pub fn advance_while(&mut self, pred: impl Fn(char) -> bool) {
        while self.peek().is_some_and(&pred) {
            self.next();
        }
    }

    pub fn slice_until(&self, end: &Cursor<'a>) -> &'a str {
        assert!(self.source == end.source);
        &self.source[self.offset()..end.offset()]
    }
}

impl<'a> Iterator for Cursor<'a> {
    type Item = char;

    fn next(&mut self) -> Option<Self::Item> {
        let c = self.chars.next();
        if c == Some('\n') {
            self.line.0 += 1;
        }
        c
    }
}
