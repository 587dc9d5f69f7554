use std::fmt::Display;

use cursor::Line;
use itertools::Itertools;

/// A single diagnostic, rendered the way Lox tools print them:
/// `[line 3] Error at ')': Expect expression.`
#[derive(thiserror::Error, Clone, Debug, PartialEq)]
#[error("[line {line}] Error{}: {message}", if at.is_empty() { "".to_string() } else { format!(" at {at}") })]
pub struct RloxError {
    pub line: Line,
    pub at: String,
    pub message: String,
}

impl RloxError {
    pub fn new(line: Line, message: impl ToString) -> Self {
        Self { line, at: String::new(), message: message.to_string() }
    }

    pub fn at(mut self, at: impl ToString) -> Self {
        self.at = at.to_string();
        self
    }
}

/// Sink for diagnostics produced while scanning.
///
/// The scanner never aborts on a bad character, it hands the problem to the
/// reporter and keeps going. Whoever owns the reporter decides what an error
/// means for the rest of the run.
pub trait ErrorReporter {
    fn report(&mut self, line: Line, message: &str);
}

/// Collects every reported diagnostic in order.
#[derive(thiserror::Error, Debug, Default, Clone, PartialEq, derive_more::Deref, derive_more::DerefMut)]
pub struct RloxErrors(pub Vec<RloxError>);

impl RloxErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn had_error(&self) -> bool {
        !self.0.is_empty()
    }
}

impl ErrorReporter for RloxErrors {
    fn report(&mut self, line: Line, message: &str) {
        self.0.push(RloxError::new(line, message));
    }
}

impl Display for RloxErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0.iter().join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn error_format() {
        let e = RloxError::new(Line(3), "Expect expression.");
        assert_eq!(e.to_string(), "[line 3] Error: Expect expression.");

        let e = e.at("')'");
        assert_eq!(e.to_string(), "[line 3] Error at ')': Expect expression.");
    }

    #[test]
    fn collects_reports_in_order() {
        let mut errors = RloxErrors::new();
        assert!(!errors.had_error());

        errors.report(Line(1), "Unexpected character.");
        errors.report(Line(4), "Unterminated string.");

        assert!(errors.had_error());
        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors.to_string(),
            "[line 1] Error: Unexpected character.\n[line 4] Error: Unterminated string."
        );
    }
}
