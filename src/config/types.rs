//! Service settings and their defaults.

/// Runtime settings for the enrollment server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub bind_addr: String,
    /// Maximum accepted request body, in bytes.
    pub body_limit: usize,
}

pub const DEFAULT_DATABASE_URL: &str = "sqlite://database.db?mode=rwc";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
pub const DEFAULT_BODY_LIMIT: usize = 1024 * 1024;

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            bind_addr: DEFAULT_BIND_ADDR.into(),
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }
}
