//! Load [`ServiceConfig`] from the process environment (after `.env`, if present).

use crate::config::types::ServiceConfig;
use crate::error::ConfigError;
use std::path::PathBuf;
use std::str::FromStr;

pub const DATABASE_URL_VAR: &str = "DATABASE_URL";
pub const MAX_CONNECTIONS_VAR: &str = "DATABASE_MAX_CONNECTIONS";
pub const BIND_ADDR_VAR: &str = "BIND_ADDR";
pub const BODY_LIMIT_VAR: &str = "REQUEST_BODY_LIMIT";

/// Merge `.env` into the process environment. Returns the file used, if any;
/// a missing file is not an error.
pub fn load_dotenv() -> Option<PathBuf> {
    dotenvy::dotenv().ok()
}

impl ServiceConfig {
    /// Read settings from the process environment. Call [`load_dotenv`] first to pick up `.env`.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup. Unset or blank variables take their default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = ServiceConfig::default();
        Ok(Self {
            database_url: get(DATABASE_URL_VAR).unwrap_or(defaults.database_url),
            max_connections: parse_or(MAX_CONNECTIONS_VAR, get(MAX_CONNECTIONS_VAR), defaults.max_connections)?,
            bind_addr: get(BIND_ADDR_VAR).unwrap_or(defaults.bind_addr),
            body_limit: parse_or(BODY_LIMIT_VAR, get(BODY_LIMIT_VAR), defaults.body_limit)?,
        })
    }
}

fn parse_or<T: FromStr>(name: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::InvalidVar { name, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::{DEFAULT_BIND_ADDR, DEFAULT_DATABASE_URL};
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = ServiceConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg, ServiceConfig::default());
        assert_eq!(cfg.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(cfg.bind_addr, DEFAULT_BIND_ADDR);
    }

    #[test]
    fn reads_overrides() {
        let cfg = ServiceConfig::from_lookup(lookup(&[
            (DATABASE_URL_VAR, "sqlite::memory:"),
            (MAX_CONNECTIONS_VAR, " 2 "),
            (BIND_ADDR_VAR, "127.0.0.1:9000"),
            (BODY_LIMIT_VAR, "4096"),
        ]))
        .unwrap();
        assert_eq!(cfg.database_url, "sqlite::memory:");
        assert_eq!(cfg.max_connections, 2);
        assert_eq!(cfg.bind_addr, "127.0.0.1:9000");
        assert_eq!(cfg.body_limit, 4096);
    }

    #[test]
    fn rejects_unparseable_number() {
        let err = ServiceConfig::from_lookup(lookup(&[(MAX_CONNECTIONS_VAR, "many")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidVar { name: MAX_CONNECTIONS_VAR, .. }));
    }

    #[test]
    fn blank_value_means_default() {
        let cfg = ServiceConfig::from_lookup(lookup(&[(BIND_ADDR_VAR, "   ")])).unwrap();
        assert_eq!(cfg.bind_addr, DEFAULT_BIND_ADDR);
    }
}
