//! Environment-variable configuration
//!
//! All settings come from `VAHTI_*` environment variables, validated
//! once at startup. Parsing goes through an injected lookup function so
//! tests never touch the process environment.

use crate::chat::ChannelId;
use std::collections::HashSet;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_COMMAND_PREFIX: &str = "!";
pub const DEFAULT_CHECK_INTERVAL_MS: u64 = 10_000;
pub const DEFAULT_PROBE_TIMEOUT_MS: u64 = 5_000;
pub const DEFAULT_OFFLINE_THRESHOLD: u32 = 2;
pub const DEFAULT_HEALTH_PORT: u16 = 8080;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),

    #[error("invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub discord_token: String,
    pub server_host: String,
    pub server_port: u16,
    pub status_channel: ChannelId,
    pub command_channel: ChannelId,
    pub command_prefix: String,
    pub check_interval: Duration,
    pub probe_timeout: Duration,
    pub offline_threshold: u32,
    pub admin_ids: HashSet<String>,
    pub health_port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let discord_token = required(&lookup, "VAHTI_DISCORD_TOKEN")?;
        let server_host = required(&lookup, "VAHTI_SERVER_HOST")?;
        let server_port: u16 = parse_var(&lookup, "VAHTI_SERVER_PORT")?
            .ok_or(ConfigError::MissingVar("VAHTI_SERVER_PORT"))?;

        let status_channel = ChannelId(required(&lookup, "VAHTI_STATUS_CHANNEL_ID")?);
        let command_channel = lookup("VAHTI_COMMAND_CHANNEL_ID")
            .map(ChannelId)
            .unwrap_or_else(|| status_channel.clone());

        let command_prefix = lookup("VAHTI_COMMAND_PREFIX")
            .unwrap_or_else(|| DEFAULT_COMMAND_PREFIX.to_string());

        let check_interval_ms = parse_var(&lookup, "VAHTI_CHECK_INTERVAL_MS")?
            .unwrap_or(DEFAULT_CHECK_INTERVAL_MS);
        let probe_timeout_ms =
            parse_var(&lookup, "VAHTI_PROBE_TIMEOUT_MS")?.unwrap_or(DEFAULT_PROBE_TIMEOUT_MS);

        let offline_threshold: u32 =
            parse_var(&lookup, "VAHTI_OFFLINE_THRESHOLD")?.unwrap_or(DEFAULT_OFFLINE_THRESHOLD);
        if offline_threshold == 0 {
            return Err(ConfigError::InvalidValue {
                var: "VAHTI_OFFLINE_THRESHOLD",
                value: "0".to_string(),
            });
        }

        let admin_ids = lookup("VAHTI_ADMIN_IDS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|id| !id.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        let health_port = parse_var(&lookup, "VAHTI_HEALTH_PORT")?.unwrap_or(DEFAULT_HEALTH_PORT);

        Ok(Self {
            discord_token,
            server_host,
            server_port,
            status_channel,
            command_channel,
            command_prefix,
            check_interval: Duration::from_millis(check_interval_ms),
            probe_timeout: Duration::from_millis(probe_timeout_ms),
            offline_threshold,
            admin_ids,
            health_port,
        })
    }

    /// URL of the monitored server's status endpoint.
    pub fn probe_url(&self) -> String {
        format!("http://{}:{}/info.json", self.server_host, self.server_port)
    }
}

fn required(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<String, ConfigError> {
    lookup(var).ok_or(ConfigError::MissingVar(var))
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<T>, ConfigError> {
    match lookup(var) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { var, value: raw }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
