//! Application configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is honored for local runs.

use std::env;

use crate::screen::ReloadPolicy;

/// Default number of most-recent walks requested per load.
pub const DEFAULT_HISTORY_LIMIT: u32 = 100;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the activity service (no trailing slash)
    pub api_base_url: String,
    /// Bearer token sent to the activity service, if any
    pub api_token: Option<String>,
    /// Signed-in account id
    pub user_id: Option<String>,
    /// Device id used when no account is signed in
    pub device_id: Option<String>,
    /// Show distances in kilometers rather than miles
    pub use_metric: bool,
    /// Maximum number of walks fetched per load
    pub history_limit: u32,
    /// What a reload does while a load is still in flight
    pub reload_policy: ReloadPolicy,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8080/api".to_string(),
            api_token: None,
            user_id: Some("test_user".to_string()),
            device_id: None,
            use_metric: true,
            history_limit: DEFAULT_HISTORY_LIMIT,
            reload_policy: ReloadPolicy::IgnoreWhileInFlight,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let use_metric = match non_empty_var("WALK_USE_METRIC") {
            Some(raw) => parse_bool(&raw).ok_or(ConfigError::Invalid {
                name: "WALK_USE_METRIC",
                value: raw,
            })?,
            None => true,
        };

        let history_limit = match non_empty_var("WALK_HISTORY_LIMIT") {
            Some(raw) => match raw.parse::<u32>() {
                Ok(limit) if limit > 0 => limit,
                _ => {
                    return Err(ConfigError::Invalid {
                        name: "WALK_HISTORY_LIMIT",
                        value: raw,
                    })
                }
            },
            None => DEFAULT_HISTORY_LIMIT,
        };

        let reload_policy = match non_empty_var("WALK_RELOAD_POLICY") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                name: "WALK_RELOAD_POLICY",
                value: raw,
            })?,
            None => ReloadPolicy::IgnoreWhileInFlight,
        };

        Ok(Self {
            api_base_url: env::var("WALK_API_BASE_URL")
                .map(|v| v.trim().trim_end_matches('/').to_string())
                .unwrap_or_else(|_| "http://localhost:8080/api".to_string()),
            api_token: non_empty_var("WALK_API_TOKEN"),
            user_id: non_empty_var("WALK_USER_ID"),
            device_id: non_empty_var("WALK_DEVICE_ID"),
            use_metric,
            history_limit,
            reload_policy,
        })
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}
