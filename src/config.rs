//! Server settings from the environment: HOST, PORT, SESSION_TTL_HOURS, STATIC_DIR.

use std::str::FromStr;
use std::time::Duration;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_SESSION_TTL_HOURS: u64 = 12;
const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Sessions not touched for this long are dropped.
    pub session_ttl: Duration,
    pub static_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            session_ttl: Duration::from_secs(DEFAULT_SESSION_TTL_HOURS * 3600),
            static_dir: DEFAULT_STATIC_DIR.to_string(),
        }
    }
}

impl ServerConfig {
    /// Read from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read through `lookup`; unset or unparsable values keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let ttl_hours = parse_or(&lookup, "SESSION_TTL_HOURS", DEFAULT_SESSION_TTL_HOURS);
        let ttl_secs = ttl_hours.checked_mul(3600).unwrap_or_else(|| {
            log::warn!("SESSION_TTL_HOURS={} is too large, using default", ttl_hours);
            DEFAULT_SESSION_TTL_HOURS * 3600
        });
        Self {
            host: lookup("HOST")
                .filter(|h| !h.trim().is_empty())
                .unwrap_or(defaults.host),
            port: parse_or(&lookup, "PORT", DEFAULT_PORT),
            session_ttl: Duration::from_secs(ttl_secs),
            static_dir: lookup("STATIC_DIR")
                .filter(|d| !d.trim().is_empty())
                .unwrap_or(defaults.static_dir),
        }
    }
}

fn parse_or<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            log::warn!("Ignoring invalid {}={:?}, using default", key, raw);
            default
        }),
    }
}
