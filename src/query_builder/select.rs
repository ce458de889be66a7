use crate::expression::Expression;
use crate::renderer::writer::SqlWriter;

use super::Query;

/// Голова запроса: SELECT <columns> FROM <tables>
#[derive(Clone, Debug)]
pub(crate) struct SelectHead {
    pub tables: Expression,
    pub columns: Expression,
}

impl SelectHead {
    pub(crate) fn write_to(&self, w: &mut SqlWriter<'_>) {
        w.push("SELECT ");
        self.columns.write_to(w);
        w.push(" FROM ");
        self.tables.write_to(w);
    }
}

/// SELECT <columns> FROM <tables>
///
/// ```
/// use knux_q::{mysql, raw, select, star};
///
/// let sql = select(raw("Users"), star()).render(mysql());
/// assert_eq!(sql, "SELECT * FROM Users");
/// ```
pub fn select<T, C>(tables: T, columns: C) -> Query
where
    T: Into<Expression>,
    C: Into<Expression>,
{
    Query::from_head(SelectHead {
        tables: tables.into(),
        columns: columns.into(),
    })
}
