use std::collections::HashMap;

use crate::dialect::{mysql, postgres};
use crate::renderer::{
    ENV_CAPACITY, ENV_POLICY, Error, FeaturePolicy, RenderCfg, resolve_dialect,
};

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn default_is_lenient() {
    let cfg = RenderCfg::default();
    assert_eq!(cfg.policy, FeaturePolicy::Lenient);
    assert_eq!(cfg, RenderCfg::lenient());
    assert_eq!(RenderCfg::strict().policy, FeaturePolicy::Strict);
    assert_eq!(RenderCfg::strict().capacity, cfg.capacity);
}

#[test]
fn from_lookup_empty_source_gives_defaults() {
    let cfg = RenderCfg::from_lookup(|_| None).expect("cfg");
    assert_eq!(cfg, RenderCfg::default());
}

#[test]
fn from_lookup_reads_policy_and_capacity() {
    let cfg = RenderCfg::from_lookup(lookup(&[(ENV_POLICY, "strict"), (ENV_CAPACITY, " 1024 ")]))
        .expect("cfg");
    assert_eq!(cfg.policy, FeaturePolicy::Strict);
    assert_eq!(cfg.capacity, 1024);

    let cfg = RenderCfg::from_lookup(lookup(&[(ENV_POLICY, "LENIENT")])).expect("cfg");
    assert_eq!(cfg.policy, FeaturePolicy::Lenient);
}

#[test]
fn from_lookup_rejects_bad_policy() {
    let err = RenderCfg::from_lookup(lookup(&[(ENV_POLICY, "paranoid")])).expect_err("bad");
    match err {
        Error::InvalidPolicy { key, value } => {
            assert_eq!(key, ENV_POLICY);
            assert_eq!(value, "paranoid");
        }
        other => panic!("expected InvalidPolicy, got {other:?}"),
    }
}

#[test]
fn from_lookup_rejects_bad_capacity() {
    let err = RenderCfg::from_lookup(lookup(&[(ENV_CAPACITY, "-1")])).expect_err("bad");
    assert!(matches!(err, Error::InvalidInt { .. }), "got {err:?}");
    assert_eq!(err.to_string(), "Invalid integer for KNUX_Q_CAPACITY: -1");
}

#[test]
fn resolve_dialect_by_name() {
    assert_eq!(resolve_dialect("mysql").expect("mysql"), mysql());
    assert_eq!(resolve_dialect("pg").expect("pg"), postgres());
    let err = resolve_dialect("db2").expect_err("unknown");
    assert_eq!(err.to_string(), "Unknown dialect: db2");
}
