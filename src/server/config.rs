use std::net::SocketAddr;

use crate::server::error::config::ConfigError;

static DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";

/// Server configuration read from environment variables
pub struct Config {
    /// `DATABASE_URL`, e.g. `sqlite://cookbook.db?mode=rwc`
    pub database_url: String,
    /// `COOKBOOK_BIND_ADDR`, defaults to `127.0.0.1:5000`
    pub bind_addr: SocketAddr,
    /// `COOKBOOK_SEED_DATA`, inserts sample data on startup when true
    pub seed_data: bool,
}

impl Config {
    /// Reads the configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let bind_addr = lookup("COOKBOOK_BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvValue {
                var: "COOKBOOK_BIND_ADDR".to_string(),
                reason: e.to_string(),
            })?;

        let seed_data = match lookup("COOKBOOK_SEED_DATA") {
            Some(value) => parse_bool(&value).ok_or_else(|| ConfigError::InvalidEnvValue {
                var: "COOKBOOK_SEED_DATA".to_string(),
                reason: format!("expected true or false, got {:?}", value),
            })?,
            None => false,
        };

        Ok(Self {
            database_url,
            bind_addr,
            seed_data,
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" | "" => Some(false),
        _ => None,
    }
}
