//! Client configuration loaded from the environment.

use std::env;
use std::time::Duration;

use url::Url;

/// Default API address used when `EVENTDESK_API_URL` is unset.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

const API_URL_VAR: &str = "EVENTDESK_API_URL";
const TIMEOUT_VAR: &str = "EVENTDESK_TIMEOUT_SECS";
const LOG_LEVEL_VAR: &str = "EVENTDESK_LOG_LEVEL";

/// Errors raised while reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The API URL could not be parsed.
    #[error("Invalid {var}: {source}")]
    InvalidUrl {
        var: &'static str,
        #[source]
        source: url::ParseError,
    },

    /// The API URL is not http or https.
    #[error("Unsupported URL scheme '{scheme}' in {var}")]
    UnsupportedScheme { var: &'static str, scheme: String },

    /// A numeric variable could not be parsed.
    #[error("Invalid {var}: '{value}' is not a whole number")]
    InvalidNumber { var: &'static str, value: String },

    /// The log level is not one of the `log` crate's level names.
    #[error("Invalid {var}: '{value}'")]
    InvalidLogLevel { var: &'static str, value: String },
}

/// Settings for [`EventDeskClient`](crate::EventDeskClient).
///
/// # Example
///
/// ```
/// use eventdesk_lib::config::ClientConfig;
///
/// let config = ClientConfig::default();
/// assert_eq!(config.api_url.as_str(), "http://localhost:8000/");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base address of the events API.
    pub api_url: Url,
    /// Per-request timeout, if any.
    pub timeout: Option<Duration>,
    /// Level for the front end's log file.
    pub log_level: log::LevelFilter,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: Url::parse(DEFAULT_API_URL).expect("default API URL is valid"),
            timeout: None,
            log_level: log::LevelFilter::Info,
        }
    }
}

impl ClientConfig {
    /// Loads configuration from the process environment.
    ///
    /// A `.env` file in the working directory is read first when present.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(API_URL_VAR).filter(|v| !v.trim().is_empty()) {
            config.api_url = parse_api_url(raw.trim())?;
        }

        if let Some(raw) = lookup(TIMEOUT_VAR).filter(|v| !v.trim().is_empty()) {
            let secs: u64 = raw.trim().parse().map_err(|_| ConfigError::InvalidNumber {
                var: TIMEOUT_VAR,
                value: raw.clone(),
            })?;
            config.timeout = Some(Duration::from_secs(secs));
        }

        if let Some(raw) = lookup(LOG_LEVEL_VAR).filter(|v| !v.trim().is_empty()) {
            config.log_level = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidLogLevel {
                    var: LOG_LEVEL_VAR,
                    value: raw.clone(),
                })?;
        }

        Ok(config)
    }
}

fn parse_api_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|source| ConfigError::InvalidUrl {
        var: API_URL_VAR,
        source,
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::UnsupportedScheme {
            var: API_URL_VAR,
            scheme: other.to_string(),
        }),
    }
}
