use crate::expression::Expression;

use super::{Clause, Query};

impl Query {
    /// ORDER BY <expr>. Несколько колонок — через `list(...)`.
    pub fn order_by<E: Into<Expression>>(&self, expr: E) -> Query {
        self.with_clause(Clause::order_by(expr.into()))
    }
}
