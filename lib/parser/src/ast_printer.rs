use itertools::Itertools;
use scanner::{LiteralValue, Token};

use crate::{Expr, Visitor};

/// Renders an expression as a fully parenthesized prefix string, e.g.
/// `-123 * (45.67)` becomes `(* (- 123) (group 45.67))`.
#[derive(Debug, Default, Clone, Copy)]
pub struct AstPrinter;

impl AstPrinter {
    pub fn print(&mut self, expr: &Expr) -> String {
        expr.accept(self)
    }

    fn parenthesize(&mut self, name: &str, exprs: &[&Expr]) -> String {
        format!("({name} {})", exprs.iter().map(|e| e.accept(self)).join(" "))
    }
}

impl<'a> Visitor<'a, String> for AstPrinter {
    fn visit_binary(&mut self, left: &Expr<'a>, operator: &Token<'a>, right: &Expr<'a>) -> String {
        self.parenthesize(operator.lexeme(), &[left, right])
    }

    fn visit_grouping(&mut self, expression: &Expr<'a>) -> String {
        self.parenthesize("group", &[expression])
    }

    fn visit_literal(&mut self, value: &LiteralValue<'a>) -> String {
        value.to_string()
    }

    fn visit_unary(&mut self, operator: &Token<'a>, right: &Expr<'a>) -> String {
        self.parenthesize(operator.lexeme(), &[right])
    }
}
