use super::Expression;
use crate::dialect::{TokenName, token};

#[inline]
fn cmp<L, R>(op: &'static str, left: L, right: R) -> Expression
where
    L: Into<Expression>,
    R: Into<Expression>,
{
    Expression::binary(TokenName::Borrowed(op), left.into(), right.into())
}

/// a = b
pub fn eq<L: Into<Expression>, R: Into<Expression>>(left: L, right: R) -> Expression {
    cmp(token::EQUALS, left, right)
}

/// a <> b
pub fn not_eq<L: Into<Expression>, R: Into<Expression>>(left: L, right: R) -> Expression {
    cmp(token::NOT_EQUALS, left, right)
}

/// a > b
pub fn gt<L: Into<Expression>, R: Into<Expression>>(left: L, right: R) -> Expression {
    cmp(token::GREATER_THAN, left, right)
}

/// a < b
pub fn lt<L: Into<Expression>, R: Into<Expression>>(left: L, right: R) -> Expression {
    cmp(token::LESS_THAN, left, right)
}

/// a >= b
pub fn gte<L: Into<Expression>, R: Into<Expression>>(left: L, right: R) -> Expression {
    cmp(token::GREATER_THAN_OR_EQUAL, left, right)
}

/// a <= b
pub fn lte<L: Into<Expression>, R: Into<Expression>>(left: L, right: R) -> Expression {
    cmp(token::LESS_THAN_OR_EQUAL, left, right)
}

impl Expression {
    pub fn eq<R: Into<Expression>>(self, rhs: R) -> Expression {
        eq(self, rhs)
    }
    pub fn not_eq<R: Into<Expression>>(self, rhs: R) -> Expression {
        not_eq(self, rhs)
    }
    pub fn gt<R: Into<Expression>>(self, rhs: R) -> Expression {
        gt(self, rhs)
    }
    pub fn lt<R: Into<Expression>>(self, rhs: R) -> Expression {
        lt(self, rhs)
    }
    pub fn gte<R: Into<Expression>>(self, rhs: R) -> Expression {
        gte(self, rhs)
    }
    pub fn lte<R: Into<Expression>>(self, rhs: R) -> Expression {
        lte(self, rhs)
    }
}
