use crate::expression::Expression;

use super::{Clause, Query};

impl Query {
    /// GROUP BY <expr>. Повторный вызов заменяет предыдущий.
    pub fn group_by<E: Into<Expression>>(&self, expr: E) -> Query {
        self.with_clause(Clause::group_by(expr.into()))
    }

    /// HAVING <expr>
    ///
    /// Рендерится только вместе с GROUP BY; без него молча отбрасывается
    /// (или даёт ошибку при `FeaturePolicy::Strict`).
    pub fn having<E: Into<Expression>>(&self, predicate: E) -> Query {
        self.with_clause(Clause::having(predicate.into()))
    }
}
