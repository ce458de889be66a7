use super::Expression;
use crate::dialect::token;

/// COUNT(<expr>); для COUNT(*) — `count(star())`
pub fn count<E: Into<Expression>>(expr: E) -> Expression {
    Expression::function(token::COUNT, Some(expr.into()))
}

pub fn sum<E: Into<Expression>>(expr: E) -> Expression {
    Expression::function(token::SUM, Some(expr.into()))
}

pub fn min<E: Into<Expression>>(expr: E) -> Expression {
    Expression::function(token::MIN, Some(expr.into()))
}

pub fn max<E: Into<Expression>>(expr: E) -> Expression {
    Expression::function(token::MAX, Some(expr.into()))
}

pub fn avg<E: Into<Expression>>(expr: E) -> Expression {
    Expression::function(token::AVG, Some(expr.into()))
}

/// RAND() / RANDOM(); аргумент (seed) опционален
pub fn random(seed: Option<Expression>) -> Expression {
    Expression::function(token::RANDOM, seed)
}
