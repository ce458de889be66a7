use std::{borrow::Cow, sync::Arc};

use smallvec::SmallVec;

use crate::dialect::{Dialect, TokenName, token};
use crate::renderer::{ident::push_quoted_path, writer::SqlWriter};

mod __tests__;
pub mod aggr;
pub mod cmp;
pub mod helpers;
pub mod logic;
pub mod order;

pub use aggr::{avg, count, max, min, random, sum};
pub use cmp::{eq, gt, gte, lt, lte, not_eq};
pub use helpers::{ident, list, num, raw, star};
pub use logic::{and, not, or};
pub use order::{asc, desc};

/// Рендерящееся выражение: чистая функция диалекта в строку.
///
/// Узлы неизменяемы и разделяются через `Arc`, поэтому `clone()` дешёвый,
/// а одно и то же выражение можно подставлять в сколько угодно запросов.
#[derive(Clone, Debug)]
pub struct Expression {
    pub(crate) node: Arc<Node>,
}

#[derive(Debug)]
pub(crate) enum Node {
    /// Текст как есть, диалект не участвует
    Raw(Cow<'static, str>),
    Number(u64),
    /// Идентификатор в кавычках диалекта, по частям пути
    Ident(SmallVec<[String; 2]>),
    /// a, b, c
    List(SmallVec<[Expression; 4]>),
    /// <token>
    Constant(TokenName),
    /// <token> <expr>
    Prefix { token: TokenName, expr: Expression },
    /// <expr> <token>
    Suffix { token: TokenName, expr: Expression },
    /// <token>(<arg>?)
    Function {
        token: TokenName,
        arg: Option<Expression>,
    },
    /// <left> <token> <right>
    Binary {
        token: TokenName,
        left: Expression,
        right: Expression,
    },
}

impl Expression {
    #[inline]
    pub(crate) fn from_node(node: Node) -> Self {
        Self {
            node: Arc::new(node),
        }
    }

    /// Текст как есть, мимо диалекта
    pub fn raw<S: Into<Cow<'static, str>>>(s: S) -> Self {
        Self::from_node(Node::Raw(s.into()))
    }

    /// Ровно текст токена диалекта
    pub fn constant<T: Into<TokenName>>(token: T) -> Self {
        Self::from_node(Node::Constant(token.into()))
    }

    /// `<token> <expr>`, например `NOT x`
    pub fn prefix<T: Into<TokenName>>(token: T, expr: Expression) -> Self {
        Self::from_node(Node::Prefix {
            token: token.into(),
            expr,
        })
    }

    /// `<expr> <token>`, например `name ASC`
    pub fn suffix<T: Into<TokenName>>(token: T, expr: Expression) -> Self {
        Self::from_node(Node::Suffix {
            token: token.into(),
            expr,
        })
    }

    /// `<token>(<arg>)`; без аргумента — `<token>()`
    pub fn function<T: Into<TokenName>>(token: T, arg: Option<Expression>) -> Self {
        Self::from_node(Node::Function {
            token: token.into(),
            arg,
        })
    }

    /// `<left> <token> <right>`
    pub fn binary<T: Into<TokenName>>(token: T, left: Expression, right: Expression) -> Self {
        Self::from_node(Node::Binary {
            token: token.into(),
            left,
            right,
        })
    }

    pub fn render(&self, dialect: &Dialect) -> String {
        let mut w = SqlWriter::new(64, dialect);
        self.write_to(&mut w);
        w.finish()
    }

    pub(crate) fn write_to(&self, w: &mut SqlWriter<'_>) {
        match &*self.node {
            Node::Raw(s) => w.push(s),
            Node::Number(n) => w.push_u64(*n),
            Node::Ident(parts) => push_quoted_path(w, parts.as_slice()),
            Node::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    w.push_sep(i, ", ");
                    item.write_to(w);
                }
            }
            Node::Constant(token) => w.push_token(token),
            Node::Prefix { token, expr } => {
                w.push_token(token);
                w.push_char(' ');
                expr.write_to(w);
            }
            Node::Suffix { token, expr } => {
                expr.write_to(w);
                w.push_char(' ');
                w.push_token(token);
            }
            Node::Function { token, arg } => {
                w.push_token(token);
                w.push_char('(');
                if let Some(arg) = arg {
                    arg.write_to(w);
                }
                w.push_char(')');
            }
            Node::Binary { token, left, right } => {
                left.write_to(w);
                w.push_char(' ');
                w.push_token(token);
                w.push_char(' ');
                right.write_to(w);
            }
        }
    }

    /// Имена токенов, к которым обращается выражение, в порядке рендера (без повторов)
    pub fn tokens(&self) -> SmallVec<[TokenName; 8]> {
        let mut out = SmallVec::new();
        self.collect_tokens(&mut out);
        out
    }

    pub(crate) fn collect_tokens(&self, out: &mut SmallVec<[TokenName; 8]>) {
        fn add(out: &mut SmallVec<[TokenName; 8]>, t: &TokenName) {
            if !out.iter().any(|x| x == t) {
                out.push(t.clone());
            }
        }

        match &*self.node {
            Node::Raw(_) | Node::Number(_) => {}
            Node::Ident(parts) => {
                if parts.iter().any(|p| p != "*") {
                    add(out, &TokenName::Borrowed(token::QUOTE));
                }
            }
            Node::List(items) => items.iter().for_each(|e| e.collect_tokens(out)),
            Node::Constant(t) => add(out, t),
            Node::Prefix { token, expr } => {
                add(out, token);
                expr.collect_tokens(out);
            }
            Node::Suffix { token, expr } => {
                expr.collect_tokens(out);
                add(out, token);
            }
            Node::Function { token, arg } => {
                add(out, token);
                if let Some(arg) = arg {
                    arg.collect_tokens(out);
                }
            }
            Node::Binary { token, left, right } => {
                left.collect_tokens(out);
                add(out, token);
                right.collect_tokens(out);
            }
        }
    }
}
