pub mod dialect;
pub mod expression;
pub mod query_builder;
pub mod renderer;

pub use dialect::{Dialect, mysql, postgres, sqlite};
pub use expression::{
    Expression, and, asc, avg, count, desc, eq, gt, gte, ident, list, lt, lte, max, min, not,
    not_eq, num, or, random, raw, star, sum,
};
pub use query_builder::{Clause, ClauseKind, Query, select};
pub use renderer::{FeaturePolicy, RenderCfg, render_query, try_render_query};
