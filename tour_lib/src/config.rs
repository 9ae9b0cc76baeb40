//! Client configuration loaded from the process environment.
//!
//! | Variable | Default |
//! |---|---|
//! | `TOUR_API_KEY` | required |
//! | `TOUR_API_BASE_URL` | [`DEFAULT_BASE_URL`] |
//! | `TOUR_API_MOBILE_APP` | [`DEFAULT_MOBILE_APP`] |
//! | `TOUR_API_RETRY_MAX` | 3 |
//! | `TOUR_API_RETRY_BASE_MS` | 1000 |

use std::time::Duration;

use tour_api::{Client, ClientConfig, Error, RetryPolicy, DEFAULT_BASE_URL, DEFAULT_MOBILE_APP};

pub const ENV_SERVICE_KEY: &str = "TOUR_API_KEY";
pub const ENV_BASE_URL: &str = "TOUR_API_BASE_URL";
pub const ENV_MOBILE_APP: &str = "TOUR_API_MOBILE_APP";
pub const ENV_RETRY_MAX: &str = "TOUR_API_RETRY_MAX";
pub const ENV_RETRY_BASE_MS: &str = "TOUR_API_RETRY_BASE_MS";

/// Loads `.env` (if present) and reads the client settings from the environment.
pub fn from_env() -> Result<ClientConfig, Error> {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            tracing::warn!("Failed to load .env: {}", e);
        }
    }
    from_lookup(|key| std::env::var(key).ok())
}

/// Builds the settings from an arbitrary variable lookup.
pub fn from_lookup<F>(lookup: F) -> Result<ClientConfig, Error>
where
    F: Fn(&str) -> Option<String>,
{
    let service_key = lookup(ENV_SERVICE_KEY)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| Error::Configuration(format!("{} is not set", ENV_SERVICE_KEY)))?;

    let defaults = RetryPolicy::default();
    let retry = RetryPolicy::new(
        parse_or(&lookup, ENV_RETRY_MAX, defaults.max_attempts),
        Duration::from_millis(parse_or(
            &lookup,
            ENV_RETRY_BASE_MS,
            defaults.base_delay.as_millis() as u64,
        )),
    );

    Ok(ClientConfig {
        service_key,
        base_url: non_blank(&lookup, ENV_BASE_URL).unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        mobile_app: non_blank(&lookup, ENV_MOBILE_APP)
            .unwrap_or_else(|| DEFAULT_MOBILE_APP.to_string()),
        retry,
    })
}

/// Reads the environment and builds a ready client.
pub fn client_from_env() -> Result<Client, Error> {
    Client::from_config(from_env()?)
}

fn non_blank<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match non_blank(lookup, key) {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!("Ignoring invalid {}={:?}", key, raw);
            default
        }),
        None => default,
    }
}
