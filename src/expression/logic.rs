use super::Expression;
use crate::dialect::token;

/// a AND b
pub fn and<L: Into<Expression>, R: Into<Expression>>(left: L, right: R) -> Expression {
    Expression::binary(token::AND, left.into(), right.into())
}

/// a OR b
pub fn or<L: Into<Expression>, R: Into<Expression>>(left: L, right: R) -> Expression {
    Expression::binary(token::OR, left.into(), right.into())
}

/// NOT a
pub fn not<E: Into<Expression>>(expr: E) -> Expression {
    Expression::prefix(token::NOT, expr.into())
}

impl Expression {
    pub fn and<R: Into<Expression>>(self, rhs: R) -> Expression {
        and(self, rhs)
    }
    pub fn or<R: Into<Expression>>(self, rhs: R) -> Expression {
        or(self, rhs)
    }
    pub fn not(self) -> Expression {
        not(self)
    }
}
