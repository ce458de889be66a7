use std::borrow::Cow;

use super::config::FeaturePolicy;
use super::{Error, Result};

pub fn parse_usize(v: &str, key: &str) -> Result<usize> {
    v.trim().parse::<usize>().map_err(|_| Error::InvalidInt {
        key: Cow::Owned(key.to_string()),
        value: v.to_string(),
    })
}

pub fn parse_policy(v: &str, key: &str) -> Result<FeaturePolicy> {
    match v.trim() {
        "lenient" | "LENIENT" | "Lenient" => Ok(FeaturePolicy::Lenient),
        "strict" | "STRICT" | "Strict" => Ok(FeaturePolicy::Strict),
        _ => Err(Error::InvalidPolicy {
            key: Cow::Owned(key.to_string()),
            value: v.to_string(),
        }),
    }
}
