use std::borrow::Cow;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Token `{token}` is not defined by dialect: {dialect}")]
    MissingToken {
        token: Cow<'static, str>,
        dialect: String,
    },

    #[error("HAVING clause requires GROUP BY")]
    HavingWithoutGroupBy,

    #[error("Invalid render policy for {key}: {value} (use lenient/strict)")]
    InvalidPolicy {
        key: Cow<'static, str>,
        value: String,
    },

    #[error("Invalid integer for {key}: {value}")]
    InvalidInt {
        key: Cow<'static, str>,
        value: String,
    },

    #[error("Unknown dialect: {0}")]
    UnknownDialect(String),
}
