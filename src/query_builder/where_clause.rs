use crate::expression::Expression;

use super::{Clause, Query};

impl Query {
    /// WHERE <expr>
    ///
    /// Повторные вызовы не перезаписывают друг друга: при рендере все
    /// WHERE склеиваются через AND в порядке добавления.
    pub fn r#where<E: Into<Expression>>(&self, predicate: E) -> Query {
        self.with_clause(Clause::r#where(predicate.into()))
    }

    #[inline]
    /// То же, что [`Query::r#where`]
    pub fn where_<E: Into<Expression>>(&self, predicate: E) -> Query {
        self.r#where(predicate)
    }
}
