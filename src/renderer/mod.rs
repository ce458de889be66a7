mod __tests__;
mod config;
mod error;
pub(crate) mod ident;
mod slots;
mod utils;
mod validate;
pub(crate) mod writer;

pub use config::{ENV_CAPACITY, ENV_POLICY, FeaturePolicy, RenderCfg};
pub use error::{Error, Result};

use crate::dialect::Dialect;
use crate::query_builder::Query;
use slots::ClauseSlots;
use validate::validate_query;
use writer::SqlWriter;

/// High-level API: рендер запроса в строку SQL. Никогда не падает.
pub fn render_query(q: &Query, dialect: &Dialect) -> String {
    // capacity эвристика; настраивается через RenderCfg
    let slots = ClauseSlots::collect(q.clauses());
    render_slots(q, &slots, dialect, RenderCfg::default().capacity)
}

/// Рендер с учётом политики: при `Strict` сначала валидируем запрос.
pub fn try_render_query(q: &Query, dialect: &Dialect, cfg: &RenderCfg) -> Result<String> {
    let slots = ClauseSlots::collect(q.clauses());
    if matches!(cfg.policy, FeaturePolicy::Strict) {
        if let Some(err) = validate_query(q, &slots, dialect) {
            tracing::warn!(dialect = %dialect, error = %err, "strict render rejected query");
            return Err(err);
        }
    }
    Ok(render_slots(q, &slots, dialect, cfg.capacity))
}

/// Пресет по имени, с ошибкой вместо None
pub fn resolve_dialect(name: &str) -> Result<&'static Dialect> {
    Dialect::by_name(name).ok_or_else(|| Error::UnknownDialect(name.to_string()))
}

fn render_slots(q: &Query, slots: &ClauseSlots, dialect: &Dialect, cap: usize) -> String {
    tracing::trace!(dialect = %dialect, clauses = q.clauses().len(), "rendering query");

    if slots.has_orphan_having() {
        tracing::debug!("HAVING without GROUP BY is dropped");
    }

    let mut w = SqlWriter::new(cap, dialect);
    q.head().write_to(&mut w);
    for clause in slots.emission_order() {
        w.push_char(' ');
        clause.write_to(&mut w);
    }
    w.finish()
}
