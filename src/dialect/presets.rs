use std::sync::OnceLock;

use super::{Dialect, token};

static MYSQL: OnceLock<Dialect> = OnceLock::new();
static POSTGRES: OnceLock<Dialect> = OnceLock::new();
static SQLITE: OnceLock<Dialect> = OnceLock::new();

/// Общая часть: операторы и ключевые слова, одинаковые для всех пресетов
fn common(name: &'static str) -> Dialect {
    Dialect::new(name)
        .with_token(token::EQUALS, "=")
        .with_token(token::NOT_EQUALS, "<>")
        .with_token(token::GREATER_THAN, ">")
        .with_token(token::LESS_THAN, "<")
        .with_token(token::GREATER_THAN_OR_EQUAL, ">=")
        .with_token(token::LESS_THAN_OR_EQUAL, "<=")
        .with_token(token::AND, "AND")
        .with_token(token::OR, "OR")
        .with_token(token::NOT, "NOT")
        .with_token(token::ASCENDING, "ASC")
        .with_token(token::DESCENDING, "DESC")
        .with_token(token::COUNT, "COUNT")
        .with_token(token::SUM, "SUM")
        .with_token(token::MIN, "MIN")
        .with_token(token::MAX, "MAX")
        .with_token(token::AVG, "AVG")
}

/// MySQL: `ident`, RAND()
pub fn mysql() -> &'static Dialect {
    MYSQL.get_or_init(|| {
        common("mysql")
            .with_token(token::QUOTE, "`")
            .with_token(token::RANDOM, "RAND")
    })
}

/// Postgres: "ident", RANDOM()
pub fn postgres() -> &'static Dialect {
    POSTGRES.get_or_init(|| {
        common("postgres")
            .with_token(token::QUOTE, "\"")
            .with_token(token::RANDOM, "RANDOM")
    })
}

/// SQLite: "ident", RANDOM()
pub fn sqlite() -> &'static Dialect {
    SQLITE.get_or_init(|| {
        common("sqlite")
            .with_token(token::QUOTE, "\"")
            .with_token(token::RANDOM, "RANDOM")
    })
}
