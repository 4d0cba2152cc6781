//! Tests for environment configuration

use super::*;

fn lookup(pairs: Vec<(&'static str, &'static str)>) -> impl Fn(&str) -> Option<String> {
    move |var| {
        pairs
            .iter()
            .find(|(key, _)| *key == var)
            .map(|(_, value)| value.to_string())
    }
}

fn base_env() -> Vec<(&'static str, &'static str)> {
    vec![
        ("VAHTI_DISCORD_TOKEN", "test-token"),
        ("VAHTI_SERVER_HOST", "play.example.net"),
        ("VAHTI_SERVER_PORT", "30120"),
        ("VAHTI_STATUS_CHANNEL_ID", "123456789"),
    ]
}

#[test]
fn required_variables_with_defaults() {
    let config = Config::from_lookup(lookup(base_env())).unwrap();

    assert_eq!(config.discord_token, "test-token");
    assert_eq!(config.server_host, "play.example.net");
    assert_eq!(config.server_port, 30120);
    assert_eq!(config.status_channel, ChannelId("123456789".to_string()));

    // Defaults
    assert_eq!(config.command_channel, config.status_channel);
    assert_eq!(config.command_prefix, "!");
    assert_eq!(config.check_interval, Duration::from_millis(10_000));
    assert_eq!(config.probe_timeout, Duration::from_millis(5_000));
    assert_eq!(config.offline_threshold, 2);
    assert_eq!(config.health_port, 8080);
    assert!(config.admin_ids.is_empty());
}

#[test]
fn missing_token_is_an_error() {
    let mut env = base_env();
    env.retain(|(key, _)| *key != "VAHTI_DISCORD_TOKEN");

    match Config::from_lookup(lookup(env)) {
        Err(ConfigError::MissingVar(var)) => assert_eq!(var, "VAHTI_DISCORD_TOKEN"),
        other => panic!("expected MissingVar, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn invalid_port_is_an_error() {
    let mut env = base_env();
    env.retain(|(key, _)| *key != "VAHTI_SERVER_PORT");
    env.push(("VAHTI_SERVER_PORT", "not-a-port"));

    match Config::from_lookup(lookup(env)) {
        Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "VAHTI_SERVER_PORT"),
        other => panic!("expected InvalidValue, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn zero_threshold_is_rejected() {
    let mut env = base_env();
    env.push(("VAHTI_OFFLINE_THRESHOLD", "0"));

    match Config::from_lookup(lookup(env)) {
        Err(ConfigError::InvalidValue { var, .. }) => {
            assert_eq!(var, "VAHTI_OFFLINE_THRESHOLD")
        }
        other => panic!("expected InvalidValue, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn overrides_are_applied() {
    let mut env = base_env();
    env.push(("VAHTI_COMMAND_CHANNEL_ID", "987654321"));
    env.push(("VAHTI_COMMAND_PREFIX", "?"));
    env.push(("VAHTI_CHECK_INTERVAL_MS", "2500"));
    env.push(("VAHTI_PROBE_TIMEOUT_MS", "800"));
    env.push(("VAHTI_OFFLINE_THRESHOLD", "5"));
    env.push(("VAHTI_HEALTH_PORT", "9090"));

    let config = Config::from_lookup(lookup(env)).unwrap();
    assert_eq!(config.command_channel, ChannelId("987654321".to_string()));
    assert_eq!(config.command_prefix, "?");
    assert_eq!(config.check_interval, Duration::from_millis(2500));
    assert_eq!(config.probe_timeout, Duration::from_millis(800));
    assert_eq!(config.offline_threshold, 5);
    assert_eq!(config.health_port, 9090);
}

#[test]
fn admin_ids_are_trimmed_and_split() {
    let mut env = base_env();
    env.push(("VAHTI_ADMIN_IDS", " 111, 222 ,,333 "));

    let config = Config::from_lookup(lookup(env)).unwrap();
    assert_eq!(config.admin_ids.len(), 3);
    assert!(config.admin_ids.contains("111"));
    assert!(config.admin_ids.contains("222"));
    assert!(config.admin_ids.contains("333"));
}

#[test]
fn probe_url_targets_the_info_endpoint() {
    let config = Config::from_lookup(lookup(base_env())).unwrap();
    assert_eq!(config.probe_url(), "http://play.example.net:30120/info.json");
}
