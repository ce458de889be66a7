use super::Expression;
use crate::dialect::token;

/// <expr> ASC
pub fn asc<E: Into<Expression>>(expr: E) -> Expression {
    Expression::suffix(token::ASCENDING, expr.into())
}

/// <expr> DESC
pub fn desc<E: Into<Expression>>(expr: E) -> Expression {
    Expression::suffix(token::DESCENDING, expr.into())
}

impl Expression {
    pub fn asc(self) -> Expression {
        asc(self)
    }
    pub fn desc(self) -> Expression {
        desc(self)
    }
}
