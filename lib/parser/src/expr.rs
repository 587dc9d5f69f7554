use std::fmt::{self, Display, Formatter};

use scanner::{LiteralValue, Token};

use crate::AstPrinter;

#[derive(Debug, Clone, PartialEq)]
pub enum Expr<'a> {
    Binary { left: Box<Expr<'a>>, operator: Token<'a>, right: Box<Expr<'a>> },
    Grouping { expression: Box<Expr<'a>> },
    Literal { value: LiteralValue<'a> },
    Unary { operator: Token<'a>, right: Box<Expr<'a>> },
}

/// An operation over expression trees, one method per variant.
///
/// New operations implement this trait instead of touching [`Expr`].
pub trait Visitor<'a, R> {
    fn visit_binary(&mut self, left: &Expr<'a>, operator: &Token<'a>, right: &Expr<'a>) -> R;
    fn visit_grouping(&mut self, expression: &Expr<'a>) -> R;
    fn visit_literal(&mut self, value: &LiteralValue<'a>) -> R;
    fn visit_unary(&mut self, operator: &Token<'a>, right: &Expr<'a>) -> R;
}

impl<'a> Expr<'a> {
    pub fn accept<R>(&self, visitor: &mut impl Visitor<'a, R>) -> R {
        match self {
            Expr::Binary { left, operator, right } => visitor.visit_binary(left, operator, right),
            Expr::Grouping { expression } => visitor.visit_grouping(expression),
            Expr::Literal { value } => visitor.visit_literal(value),
            Expr::Unary { operator, right } => visitor.visit_unary(operator, right),
        }
    }
}

impl Display for Expr<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&AstPrinter.print(self))
    }
}
