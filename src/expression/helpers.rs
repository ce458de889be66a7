use std::borrow::Cow;

use smallvec::SmallVec;

use super::{Expression, Node};

/// Сырой фрагмент: `raw("Users")`, `raw("'Jimmy'")`. Диалект не применяется.
pub fn raw<S: Into<Cow<'static, str>>>(s: S) -> Expression {
    Expression::raw(s)
}

/// `*`
pub fn star() -> Expression {
    Expression::raw("*")
}

/// Идентификатор в кавычках диалекта: ident("users.id") → `users`.`id`
pub fn ident(name: &str) -> Expression {
    let parts: SmallVec<[String; 2]> = name.split('.').map(|s| s.to_string()).collect();
    Expression::from_node(Node::Ident(parts))
}

/// Список через запятую: list([ident("id"), ident("name")]) → `id`, `name`
pub fn list<I, E>(items: I) -> Expression
where
    I: IntoIterator<Item = E>,
    E: Into<Expression>,
{
    Expression::from_node(Node::List(items.into_iter().map(Into::into).collect()))
}

/// Целое число (для LIMIT/OFFSET)
pub fn num(n: u64) -> Expression {
    Expression::from_node(Node::Number(n))
}

impl From<&str> for Expression {
    fn from(s: &str) -> Self {
        Expression::raw(s.to_owned())
    }
}

impl From<String> for Expression {
    fn from(s: String) -> Self {
        Expression::raw(s)
    }
}

impl From<u64> for Expression {
    fn from(n: u64) -> Self {
        num(n)
    }
}
