//! Server configuration from environment-style lookups.

use shuttle_club::ServerConfig;
use std::collections::HashMap;
use std::time::Duration;

fn config_from(pairs: &[(&str, &str)]) -> ServerConfig {
    let env: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    ServerConfig::from_lookup(|key| env.get(key).cloned())
}

#[test]
fn defaults_when_unset() {
    assert_eq!(config_from(&[]), ServerConfig::default());
    let c = ServerConfig::default();
    assert_eq!(c.host, "0.0.0.0");
    assert_eq!(c.port, 8080);
    assert_eq!(c.session_ttl, Duration::from_secs(12 * 3600));
}

#[test]
fn reads_values() {
    let c = config_from(&[
        ("HOST", "127.0.0.1"),
        ("PORT", "9000"),
        ("SESSION_TTL_HOURS", "2"),
        ("STATIC_DIR", "public"),
    ]);
    assert_eq!(c.host, "127.0.0.1");
    assert_eq!(c.port, 9000);
    assert_eq!(c.session_ttl, Duration::from_secs(2 * 3600));
    assert_eq!(c.static_dir, "public");
}

#[test]
fn invalid_values_fall_back() {
    let c = config_from(&[("PORT", "eighty"), ("SESSION_TTL_HOURS", "-1"), ("HOST", " ")]);
    assert_eq!(c, ServerConfig::default());

    let too_long = u64::MAX.to_string();
    let c = config_from(&[("SESSION_TTL_HOURS", too_long.as_str())]);
    assert_eq!(c.session_ttl, ServerConfig::default().session_ttl);
}
