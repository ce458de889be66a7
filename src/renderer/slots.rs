use smallvec::SmallVec;

use crate::expression::and;
use crate::query_builder::{Clause, ClauseKind};

/// По одному слоту на вид клаузы
#[derive(Debug, Default)]
pub(crate) struct ClauseSlots {
    pub r#where: Option<Clause>,
    pub group_by: Option<Clause>,
    pub having: Option<Clause>,
    pub order_by: Option<Clause>,
    pub limit: Option<Clause>,
    pub offset: Option<Clause>,
}

impl ClauseSlots {
    /// Раскладывает клаузы по слотам в порядке добавления:
    /// WHERE копится через AND (старое AND новое), остальные — последний выигрывает.
    pub fn collect(clauses: &[Clause]) -> Self {
        let mut slots = Self::default();
        for clause in clauses {
            let slot = slots.slot_mut(clause.kind());
            *slot = match (clause.kind(), slot.take()) {
                (ClauseKind::Where, Some(prev)) => {
                    tracing::debug!("merging WHERE clauses with AND");
                    Some(Clause::r#where(and(
                        prev.predicate().clone(),
                        clause.predicate().clone(),
                    )))
                }
                _ => Some(clause.clone()),
            };
        }
        slots
    }

    fn slot_mut(&mut self, kind: ClauseKind) -> &mut Option<Clause> {
        match kind {
            ClauseKind::Where => &mut self.r#where,
            ClauseKind::GroupBy => &mut self.group_by,
            ClauseKind::Having => &mut self.having,
            ClauseKind::OrderBy => &mut self.order_by,
            ClauseKind::Limit => &mut self.limit,
            ClauseKind::Offset => &mut self.offset,
        }
    }

    /// HAVING без GROUP BY
    #[inline]
    pub fn has_orphan_having(&self) -> bool {
        self.having.is_some() && self.group_by.is_none()
    }

    /// Клаузы в порядке вывода: WHERE, GROUP BY [HAVING], ORDER BY, LIMIT, OFFSET
    pub fn emission_order(&self) -> SmallVec<[&Clause; 6]> {
        let mut out = SmallVec::new();
        out.extend(self.r#where.as_ref());
        if let Some(group_by) = &self.group_by {
            out.push(group_by);
            out.extend(self.having.as_ref());
        }
        out.extend(self.order_by.as_ref());
        out.extend(self.limit.as_ref());
        out.extend(self.offset.as_ref());
        out
    }
}
