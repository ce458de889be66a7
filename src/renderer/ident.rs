use std::borrow::Cow;

use super::writer::SqlWriter;
use crate::dialect::token;

/// Экранирует кавычку удвоением: a`b → a``b, a"b → a""b
pub(crate) fn escape_body<'a>(s: &'a str, quote: &str) -> Cow<'a, str> {
    if quote.is_empty() || !s.contains(quote) {
        Cow::Borrowed(s)
    } else {
        Cow::Owned(s.replace(quote, &quote.repeat(2)))
    }
}

/// schema.table / table.column / table.* — каждая часть в кавычках диалекта
pub(crate) fn push_quoted_path<S: AsRef<str>>(w: &mut SqlWriter<'_>, parts: &[S]) {
    let dialect = w.dialect;
    if !dialect.contains(token::QUOTE) {
        tracing::debug!(
            token = token::QUOTE,
            dialect = %dialect,
            "token is not defined by dialect, identifiers stay unquoted"
        );
    }
    let quote = dialect.token(token::QUOTE);

    for (i, part) in parts.iter().enumerate() {
        w.push_sep(i, ".");
        let part = part.as_ref();
        if part == "*" {
            w.push_char('*');
            continue;
        }
        w.push(quote);
        w.push(escape_body(part, quote));
        w.push(quote);
    }
}
