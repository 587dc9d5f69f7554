use std::io::Write;

use errors::{RloxError, RloxErrors};
use parser::{AstPrinter, Parser};
use scanner::Token;

#[derive(Debug, Default, Clone)]
pub struct FrontendOptions {
    /// Write the token listing before the tree.
    pub dump_tokens: bool,
}

#[derive(thiserror::Error, Debug)]
pub enum FrontendError {
    #[error("{0}")]
    Scan(RloxErrors),
    #[error("{0}")]
    Parse(RloxError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl FrontendError {
    /// Whether the error is the source's fault rather than the environment's.
    pub fn is_data_error(&self) -> bool {
        matches!(self, FrontendError::Scan(_) | FrontendError::Parse(_))
    }
}

/// Scans and parses `source` as a single expression and writes the printed tree
/// to `output`.
///
/// Any lexical error stops the run before parsing, after all of them have been
/// collected.
pub fn run_source(
    source: &str,
    options: &FrontendOptions,
    output: &mut impl Write,
) -> Result<(), FrontendError> {
    let mut errors = RloxErrors::new();
    let tokens = scanner::scan(source, &mut errors);

    if options.dump_tokens {
        for token in &tokens {
            writeln!(output, "{}", describe(token))?;
        }
    }

    if errors.had_error() {
        log::debug!("{} scan error(s), skipping parse", errors.len());
        return Err(FrontendError::Scan(errors));
    }

    let expr = Parser::new(&tokens)
        .parse_complete()
        .map_err(|e| FrontendError::Parse(e.into()))?;

    writeln!(output, "{}", AstPrinter.print(&expr))?;
    Ok(())
}

fn describe(token: &Token) -> String {
    match token.literal() {
        Some(literal) => {
            format!("{} {} '{}' {}", token.line(), token.token_type(), token.lexeme(), literal)
        }
        None => format!("{} {} '{}'", token.line(), token.token_type(), token.lexeme()),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[ctor::ctor]
    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn run(source: &str, options: &FrontendOptions) -> Result<String, FrontendError> {
        let mut output = Vec::new();
        run_source(source, options, &mut output)?;
        Ok(String::from_utf8(output).unwrap())
    }

    #[test]
    fn prints_tree() {
        assert_eq!(
            run("-123 * (45.67)", &FrontendOptions::default()).unwrap(),
            "(* (- 123) (group 45.67))\n"
        );
    }

    #[test]
    fn dumps_tokens() {
        let options = FrontendOptions { dump_tokens: true };
        assert_eq!(
            run("1 +\n\"two\"", &options).unwrap(),
            "1 Number '1' 1\n1 Plus '+'\n2 Str '\"two\"' two\n2 Eof ''\n(+ 1 two)\n"
        );
    }

    #[test]
    fn scan_errors_are_collected() {
        let err = run("1 @ # 2", &FrontendOptions::default()).unwrap_err();
        assert!(err.is_data_error());
        assert_eq!(
            err.to_string(),
            "[line 1] Error: Unexpected character.\n[line 1] Error: Unexpected character."
        );
    }

    #[test]
    fn tokens_are_dumped_even_with_scan_errors() {
        let mut output = Vec::new();
        let options = FrontendOptions { dump_tokens: true };
        let err = run_source("\"open", &options, &mut output).unwrap_err();
        assert!(matches!(err, FrontendError::Scan(ref e) if e.len() == 1));
        assert_eq!(String::from_utf8(output).unwrap(), "1 Eof ''\n");
    }

    #[test]
    fn parse_error() {
        let err = run("(1 + 2", &FrontendOptions::default()).unwrap_err();
        assert!(err.is_data_error());
        assert_eq!(err.to_string(), "[line 1] Error at end: Expect ')' after expression.");

        let err = run("1 2", &FrontendOptions::default()).unwrap_err();
        assert_eq!(err.to_string(), "[line 1] Error at '2': Expect end of expression.");
    }

    #[test]
    fn multiline_string_reports_closing_line() {
        let options = FrontendOptions { dump_tokens: true };
        assert_eq!(
            run("\"a\nb\" + 1", &options).unwrap(),
            "2 Str '\"a\nb\"' a\nb\n2 Plus '+'\n2 Number '1' 1\n2 Eof ''\n(+ a\nb 1)\n"
        );

        let err = run("1\n\"a\nb\"", &FrontendOptions::default()).unwrap_err();
        assert_eq!(err.to_string(), "[line 3] Error at '\"a\nb\"': Expect end of expression.");
    }
}
