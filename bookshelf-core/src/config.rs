//! Runtime configuration read from the environment

use crate::error::ConfigError;
use std::net::SocketAddr;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:8080";
pub const DEFAULT_BIND: &str = "127.0.0.1:3000";
pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings shared by the front-ends
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the library service, without the `/v1` prefix
    pub api_url: String,

    /// Address the web front-end listens on
    pub bind: SocketAddr,

    /// Books per list page
    pub page_size: u32,

    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            bind: SocketAddr::from(([127, 0, 0, 1], 3000)),
            page_size: DEFAULT_PAGE_SIZE,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Read `BOOKSHELF_API_URL`, `BOOKSHELF_BIND`, `BOOKSHELF_PAGE_SIZE` and
    /// `BOOKSHELF_TIMEOUT_SECS`, falling back to defaults for unset variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::from_env`] with a custom variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("BOOKSHELF_API_URL") {
            let url = url.trim().trim_end_matches('/').to_string();
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::InvalidValue {
                    key: "BOOKSHELF_API_URL",
                    value: url,
                });
            }
            config.api_url = url;
        }

        if let Some(bind) = lookup("BOOKSHELF_BIND") {
            config.bind = bind.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: "BOOKSHELF_BIND",
                value: bind.clone(),
            })?;
        }

        if let Some(size) = lookup("BOOKSHELF_PAGE_SIZE") {
            config.page_size = match size.trim().parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: "BOOKSHELF_PAGE_SIZE",
                        value: size,
                    })
                }
            };
        }

        if let Some(secs) = lookup("BOOKSHELF_TIMEOUT_SECS") {
            config.timeout = match secs.trim().parse::<u64>() {
                Ok(n) if n > 0 => Duration::from_secs(n),
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: "BOOKSHELF_TIMEOUT_SECS",
                        value: secs,
                    })
                }
            };
        }

        Ok(config)
    }
}
