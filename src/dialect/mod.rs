use std::{borrow::Cow, collections::BTreeMap, fmt::Display};

use serde::{Deserialize, Serialize};

use crate::query_builder::Query;
use crate::renderer;

mod presets;
pub mod token;

pub use presets::{mysql, postgres, sqlite};

/// Имя токена диалекта (`"equals"`, `"random"`, ...)
pub type TokenName = Cow<'static, str>;

/// Набор написаний токенов для одного варианта SQL.
///
/// Отсутствующий токен рендерится как пустая строка, без ошибки.
/// Строгая проверка полноты доступна через `FeaturePolicy::Strict`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dialect {
    name: Cow<'static, str>,
    #[serde(default)]
    tokens: BTreeMap<TokenName, Cow<'static, str>>,
}

impl Dialect {
    pub fn new<N: Into<Cow<'static, str>>>(name: N) -> Self {
        Self {
            name: name.into(),
            tokens: BTreeMap::new(),
        }
    }

    /// Добавляет/переопределяет токен. Удобно для шаблонов на базе пресета:
    /// `mysql().clone().with_token("random", "RANDOM")`
    pub fn with_token<K, V>(mut self, name: K, text: V) -> Self
    where
        K: Into<TokenName>,
        V: Into<Cow<'static, str>>,
    {
        self.tokens.insert(name.into(), text.into());
        self
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Текст токена; для неизвестного имени — `""`
    #[inline]
    pub fn token(&self, name: &str) -> &str {
        self.tokens.get(name).map(|t| t.as_ref()).unwrap_or("")
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.tokens.contains_key(name)
    }

    pub fn tokens(&self) -> impl Iterator<Item = (&str, &str)> {
        self.tokens.iter().map(|(k, v)| (k.as_ref(), v.as_ref()))
    }

    /// Пресет по имени: `mysql`, `postgres` (`pg`, `postgresql`), `sqlite`
    pub fn by_name(name: &str) -> Option<&'static Dialect> {
        match name.trim().to_ascii_lowercase().as_str() {
            "mysql" => Some(mysql()),
            "postgres" | "postgresql" | "pg" => Some(postgres()),
            "sqlite" => Some(sqlite()),
            _ => None,
        }
    }

    /// Рендер запроса в этом диалекте (то же, что `query.render(dialect)`)
    pub fn render(&self, query: &Query) -> String {
        renderer::render_query(query, self)
    }
}

impl Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
