use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};

/// Process configuration, read once at startup and shared through `AppState`.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub db_path: PathBuf,
    /// Allowed CORS origin (the web client).
    pub frontend_url: String,
    /// Upper bound applied to the `limit` query parameter.
    pub max_page_limit: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 5000,
            db_path: "cricconnect.db".into(),
            frontend_url: "http://localhost:5173".into(),
            max_page_limit: 200,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup("CRICCONNECT_HOST") {
            config.host = host;
        }
        if let Some(port) = lookup("CRICCONNECT_PORT") {
            config.port = port
                .parse::<u16>()
                .with_context(|| format!("CRICCONNECT_PORT is not a valid port: '{}'", port))?;
        }
        if let Some(path) = lookup("CRICCONNECT_DB_PATH") {
            config.db_path = path.into();
        }
        if let Some(url) = lookup("CRICCONNECT_FRONTEND_URL") {
            config.frontend_url = url;
        }
        if let Some(limit) = lookup("CRICCONNECT_MAX_PAGE_LIMIT") {
            config.max_page_limit = limit.parse::<u32>().with_context(|| {
                format!("CRICCONNECT_MAX_PAGE_LIMIT is not a number: '{}'", limit)
            })?;
        }

        if config.max_page_limit == 0 {
            bail!("CRICCONNECT_MAX_PAGE_LIMIT must be at least 1");
        }

        Ok(config)
    }

    pub fn bind_addr(&self) -> Result<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse::<SocketAddr>()
            .with_context(|| format!("Invalid bind address '{}'", addr))
    }
}
