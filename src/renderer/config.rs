use super::Result;
use super::utils::{parse_policy, parse_usize};

pub const ENV_POLICY: &str = "KNUX_Q_POLICY";
pub const ENV_CAPACITY: &str = "KNUX_Q_CAPACITY";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FeaturePolicy {
    /// Мягкая деградация: пустой текст вместо отсутствующего токена,
    /// HAVING без GROUP BY отбрасывается
    #[default]
    Lenient,
    /// Строгая политика: те же ситуации → ошибка рендера
    Strict,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderCfg {
    pub policy: FeaturePolicy,

    /// Начальная ёмкость буфера SQL
    pub capacity: usize,
}

impl Default for RenderCfg {
    fn default() -> Self {
        Self {
            policy: FeaturePolicy::Lenient,
            capacity: 256,
        }
    }
}

impl RenderCfg {
    pub fn lenient() -> Self {
        Self::default()
    }

    pub fn strict() -> Self {
        Self {
            policy: FeaturePolicy::Strict,
            ..Self::default()
        }
    }

    /// Читает настройки через произвольный источник ключей.
    /// Отсутствующие ключи оставляют значения по умолчанию.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        if let Some(v) = lookup(ENV_POLICY) {
            cfg.policy = parse_policy(&v, ENV_POLICY)?;
        }
        if let Some(v) = lookup(ENV_CAPACITY) {
            cfg.capacity = parse_usize(&v, ENV_CAPACITY)?;
        }
        Ok(cfg)
    }

    /// `KNUX_Q_POLICY=lenient|strict`, `KNUX_Q_CAPACITY=<n>`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}
