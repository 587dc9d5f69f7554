use crate::{Cursor, Line};

/// The span of source text a token was scanned from.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceRange<'a> {
    start: Cursor<'a>,
    end: Cursor<'a>,
}

impl<'a> From<(Cursor<'a>, Cursor<'a>)> for SourceRange<'a> {
    fn from((start, end): (Cursor<'a>, Cursor<'a>)) -> Self {
        Self::new(start, end)
    }
}

impl<'a> SourceRange<'a> {
    pub fn new(start: Cursor<'a>, end: Cursor<'a>) -> Self {
        assert!(start.source == end.source);
        assert!(start.offset() <= end.offset());
        Self { start, end }
    }

    /// A zero-width range, used for the end-of-input token.
    pub fn empty_at(at: Cursor<'a>) -> Self {
        Self { start: at.clone(), end: at }
    }

    pub fn lexeme(&self) -> &'a str {
        self.start.slice_until(&self.end)
    }

    pub fn end(&self) -> &Cursor<'a> {
        &self.end
    }

    /// The line the range ends on. For a string spanning several lines that is
    /// the line of the closing quote.
    pub fn end_line(&self) -> Line {
        self.end.line()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn multiline_range() {
        let mut cursor = Cursor::new("x \"a\nb\" y");
        cursor.next(); // 'x'
        cursor.next(); // ' '
        let start = cursor.clone();
        cursor.advance_while(|c| c != ' ');

        let range = SourceRange::new(start, cursor.clone());
        assert_eq!(range.lexeme(), "\"a\nb\"");
        assert_eq!(range.end_line(), Line(2));

        let eof = SourceRange::empty_at(cursor);
        assert_eq!(eof.lexeme(), "");
        assert_eq!(eof.end_line(), Line(2));
    }
}
