use crate::expression::Expression;

use super::{Clause, Query};

impl Query {
    /// LIMIT <n>
    #[inline]
    pub fn limit<E: Into<Expression>>(&self, n: E) -> Query {
        self.with_clause(Clause::limit(n.into()))
    }

    /// OFFSET <n>
    #[inline]
    pub fn offset<E: Into<Expression>>(&self, n: E) -> Query {
        self.with_clause(Clause::offset(n.into()))
    }

    /// LIMIT <limit> OFFSET <offset>
    #[inline]
    pub fn limit_offset<L, O>(&self, limit: L, offset: O) -> Query
    where
        L: Into<Expression>,
        O: Into<Expression>,
    {
        self.limit(limit).offset(offset)
    }
}
