use std::fmt::Display;

use crate::dialect::Dialect;
use crate::expression::Expression;
use crate::renderer::writer::SqlWriter;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClauseKind {
    Where,
    GroupBy,
    Having,
    OrderBy,
    Limit,
    Offset,
}

impl ClauseKind {
    /// Порядок, в котором клаузы попадают в SQL
    pub const ALL: [ClauseKind; 6] = [
        ClauseKind::Where,
        ClauseKind::GroupBy,
        ClauseKind::Having,
        ClauseKind::OrderBy,
        ClauseKind::Limit,
        ClauseKind::Offset,
    ];

    /// Ключевое слово клаузы вместе с завершающим пробелом
    pub const fn prelude(self) -> &'static str {
        match self {
            ClauseKind::Where => "WHERE ",
            ClauseKind::GroupBy => "GROUP BY ",
            ClauseKind::Having => "HAVING ",
            ClauseKind::OrderBy => "ORDER BY ",
            ClauseKind::Limit => "LIMIT ",
            ClauseKind::Offset => "OFFSET ",
        }
    }
}

impl Display for ClauseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.prelude().trim_end())
    }
}

/// Клауза: вид + ровно одно выражение. Форму выражения не проверяет.
#[derive(Clone, Debug)]
pub struct Clause {
    kind: ClauseKind,
    predicate: Expression,
}

impl Clause {
    pub fn new(kind: ClauseKind, predicate: Expression) -> Self {
        Self { kind, predicate }
    }

    pub fn r#where(predicate: Expression) -> Self {
        Self::new(ClauseKind::Where, predicate)
    }

    pub fn group_by(predicate: Expression) -> Self {
        Self::new(ClauseKind::GroupBy, predicate)
    }

    pub fn having(predicate: Expression) -> Self {
        Self::new(ClauseKind::Having, predicate)
    }

    pub fn order_by(predicate: Expression) -> Self {
        Self::new(ClauseKind::OrderBy, predicate)
    }

    pub fn limit(predicate: Expression) -> Self {
        Self::new(ClauseKind::Limit, predicate)
    }

    pub fn offset(predicate: Expression) -> Self {
        Self::new(ClauseKind::Offset, predicate)
    }

    #[inline]
    pub fn kind(&self) -> ClauseKind {
        self.kind
    }

    #[inline]
    pub fn prelude(&self) -> &'static str {
        self.kind.prelude()
    }

    #[inline]
    pub fn predicate(&self) -> &Expression {
        &self.predicate
    }

    /// prelude + predicate, например `WHERE a = 1`
    pub fn render(&self, dialect: &Dialect) -> String {
        let mut w = SqlWriter::new(64, dialect);
        self.write_to(&mut w);
        w.finish()
    }

    pub(crate) fn write_to(&self, w: &mut SqlWriter<'_>) {
        w.push(self.prelude());
        self.predicate.write_to(w);
    }
}
