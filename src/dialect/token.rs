//! Имена токенов, которые используют встроенные комбинаторы.
//!
//! Диалект может определять любые другие имена; эти просто зафиксированы
//! как константы, чтобы не плодить строковые литералы по коду.

pub const QUOTE: &str = "quote";

pub const EQUALS: &str = "equals";
pub const NOT_EQUALS: &str = "notequals";
pub const GREATER_THAN: &str = "greaterthan";
pub const LESS_THAN: &str = "lessthan";
pub const GREATER_THAN_OR_EQUAL: &str = "greaterthanorequal";
pub const LESS_THAN_OR_EQUAL: &str = "lessthanorequal";

pub const AND: &str = "and";
pub const OR: &str = "or";
pub const NOT: &str = "not";

pub const ASCENDING: &str = "ascending";
pub const DESCENDING: &str = "descending";

pub const RANDOM: &str = "random";
pub const COUNT: &str = "count";
pub const SUM: &str = "sum";
pub const MIN: &str = "min";
pub const MAX: &str = "max";
pub const AVG: &str = "avg";

/// Все встроенные токены (пресеты обязаны определить каждый)
pub const ALL: &[&str] = &[
    QUOTE,
    EQUALS,
    NOT_EQUALS,
    GREATER_THAN,
    LESS_THAN,
    GREATER_THAN_OR_EQUAL,
    LESS_THAN_OR_EQUAL,
    AND,
    OR,
    NOT,
    ASCENDING,
    DESCENDING,
    RANDOM,
    COUNT,
    SUM,
    MIN,
    MAX,
    AVG,
];
