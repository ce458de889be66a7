use std::sync::Arc;

use crate::dialect::Dialect;
use crate::renderer::{self, RenderCfg};

mod __tests__;
mod clause;
mod group_by;
mod limit;
mod order_by;
mod select;
mod where_clause;

pub use clause::{Clause, ClauseKind};
pub use select::select;

pub(crate) use select::SelectHead;

/// Неизменяемый запрос: голова `SELECT … FROM …` и клаузы в порядке добавления.
///
/// Каждый метод-билдер возвращает *новый* `Query`; исходный не меняется,
/// поэтому базовый запрос можно безопасно расширять в нескольких направлениях.
#[derive(Clone, Debug)]
pub struct Query {
    head: SelectHead,
    clauses: Arc<[Clause]>,
}

impl Query {
    pub(crate) fn from_head(head: SelectHead) -> Self {
        Self {
            head,
            clauses: Arc::from(Vec::new()),
        }
    }

    /// Копия клауз + одна новая. Слияние WHERE и т.п. — только при рендере.
    pub(crate) fn with_clause(&self, clause: Clause) -> Self {
        let mut clauses = Vec::with_capacity(self.clauses.len() + 1);
        clauses.extend(self.clauses.iter().cloned());
        clauses.push(clause);
        Self {
            head: self.head.clone(),
            clauses: clauses.into(),
        }
    }

    #[inline]
    pub(crate) fn head(&self) -> &SelectHead {
        &self.head
    }

    /// Все клаузы в порядке добавления (включая повторы одного вида)
    #[inline]
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn render(&self, dialect: &Dialect) -> String {
        renderer::render_query(self, dialect)
    }

    pub fn try_render(&self, dialect: &Dialect, cfg: &RenderCfg) -> renderer::Result<String> {
        renderer::try_render_query(self, dialect, cfg)
    }
}
