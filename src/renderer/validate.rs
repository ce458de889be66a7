use smallvec::SmallVec;

use super::Error;
use super::slots::ClauseSlots;
use crate::dialect::{Dialect, TokenName};
use crate::query_builder::Query;

/// Строгая проверка: первый найденный дефект в порядке вывода, либо None.
pub(crate) fn validate_query(q: &Query, slots: &ClauseSlots, dialect: &Dialect) -> Option<Error> {
    if slots.has_orphan_having() {
        return Some(Error::HavingWithoutGroupBy);
    }

    let mut tokens: SmallVec<[TokenName; 8]> = SmallVec::new();
    let head = q.head();
    head.columns.collect_tokens(&mut tokens);
    head.tables.collect_tokens(&mut tokens);
    for clause in slots.emission_order() {
        clause.predicate().collect_tokens(&mut tokens);
    }

    tokens
        .into_iter()
        .find(|t| !dialect.contains(t))
        .map(|token| Error::MissingToken {
            token,
            dialect: dialect.name().to_string(),
        })
}
