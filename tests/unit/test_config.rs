use bullana_auth::config::Config;
use bullana_auth::constants::{DEFAULT_TIMEOUT_SECS, LOGIN_ROUTE};
use bullana_auth::utils::config::{get_env_or_default, get_env_or_none};

#[test]
fn with_base_url_uses_defaults_elsewhere() {
    let config = Config::with_base_url("http://localhost:13578");

    assert_eq!(config.rest_api.base_url, "http://localhost:13578");
    assert_eq!(config.rest_api.timeout, DEFAULT_TIMEOUT_SECS);
    assert_eq!(config.login_route, LOGIN_ROUTE);
    assert!(config.session_file.is_none());
}

#[test]
fn get_env_or_default_returns_default_when_unset() {
    let value: u64 = get_env_or_default("BULLANA_TEST_UNSET_VAR", 7);
    assert_eq!(value, 7);
}

#[test]
fn get_env_or_none_returns_none_when_unset() {
    let value: Option<String> = get_env_or_none("BULLANA_TEST_UNSET_VAR");
    assert!(value.is_none());
}

#[test]
fn config_serializes_and_deserializes() {
    let config = Config::with_base_url("http://api.example.com");
    let json = serde_json::to_string(&config).unwrap();
    let back: Config = serde_json::from_str(&json).unwrap();
    assert_eq!(back.rest_api.base_url, config.rest_api.base_url);
    assert_eq!(back.rest_api.timeout, config.rest_api.timeout);
}
