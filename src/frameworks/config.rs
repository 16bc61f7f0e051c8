use std::{env, fmt, time::Duration};
use url::Url;

// Runtime/server settings, read from the environment.

pub const DEFAULT_HTTP_PORT: u16 = 3000;
pub const DEFAULT_SWAPI_BASE_URL: &str = "https://swapi.dev/api";

#[derive(Debug)]
pub enum ConfigError {
    InvalidBaseUrl { value: String, reason: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidBaseUrl { value, reason } => {
                write!(f, "invalid SWAPI_BASE_URL {value:?}: {reason}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

pub fn http_port() -> u16 {
    parse_port(env::var("SWAPI_SERVER_PORT").ok().as_deref())
}

pub fn swapi_base_url() -> Result<Url, ConfigError> {
    parse_base_url(env::var("SWAPI_BASE_URL").ok().as_deref())
}

// Unset means no client-side timeout.
pub fn swapi_timeout() -> Option<Duration> {
    parse_timeout(env::var("SWAPI_TIMEOUT_MS").ok().as_deref())
}

fn parse_port(value: Option<&str>) -> u16 {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(DEFAULT_HTTP_PORT)
}

fn parse_base_url(value: Option<&str>) -> Result<Url, ConfigError> {
    let raw = value.unwrap_or(DEFAULT_SWAPI_BASE_URL).trim();
    let invalid = |reason: String| ConfigError::InvalidBaseUrl {
        value: raw.to_string(),
        reason,
    };

    let url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme {}", url.scheme())));
    }
    Ok(url)
}

fn parse_timeout(value: Option<&str>) -> Option<Duration> {
    value
        .and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|millis| *millis > 0)
        .map(Duration::from_millis)
}
