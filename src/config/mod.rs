//! Configuration for `minitrackr`.
//!
//! All settings come from the environment with fixed defaults; the resolved
//! `Config` is constructed once in `main` and handed to whoever needs it.
//!
//! - `PORT` - listen port (default 8822)
//! - `DB_PATH` - SQLite database file (default `./data/minitrackr.db`)
//! - `MINITRACKR_LOG` - tracing filter directive (default `info`)

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

const DEFAULT_PORT: u16 = 8822;
const DEFAULT_DB_PATH: &str = "./data/minitrackr.db";
const DEFAULT_LOG_FILTER: &str = "info";

/// Resolved process configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub db_path: PathBuf,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the environment, falling back to defaults.
    ///
    /// An unparsable `PORT` falls back to the default rather than failing
    /// startup, matching the original server's lenient env handling.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            port: get_env("PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            db_path: get_env("DB_PATH")
                .map_or_else(|| PathBuf::from(DEFAULT_DB_PATH), PathBuf::from),
            log_filter: get_env("MINITRACKR_LOG")
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        }
    }

    /// Socket address to bind.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

fn get_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_original_deployment() {
        let config = Config::default();
        assert_eq!(config.port, 8822);
        assert_eq!(config.db_path, PathBuf::from("./data/minitrackr.db"));
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn bind_addr_uses_port() {
        let config = Config {
            port: 9000,
            ..Config::default()
        };
        assert_eq!(config.bind_addr().port(), 9000);
    }
}
