use crate::{SaamError, SaamResult};
use reqwest::Client;
use std::{collections::HashMap, env};

pub const DEFAULT_BASE_URL: &str = "https://api.si.edu/saam/v1";
pub const DEFAULT_RELAY_URL: &str = "https://cors-anywhere.herokuapp.com";
pub const DEFAULT_API_KEY_VAR: &str = "SAAM_API_KEY";

/// Where the API key comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiKey {
    Static(String),
    /// Name of an environment variable, read again on every request.
    Env(String),
}

impl Default for ApiKey {
    fn default() -> Self {
        Self::Env(DEFAULT_API_KEY_VAR.to_string())
    }
}

impl ApiKey {
    /// Resolve the key for one request.
    pub fn resolve(&self) -> SaamResult<String> {
        match self {
            Self::Static(key) if key.is_empty() => Err(SaamError::MissingApiKey(
                "static API key is empty".to_string(),
            )),
            Self::Static(key) => Ok(key.clone()),
            Self::Env(var) => match env::var(var) {
                Ok(key) if !key.is_empty() => Ok(key),
                _ => Err(SaamError::MissingApiKey(format!(
                    "environment variable {var} is not set"
                ))),
            },
        }
    }
}

/// CORS relay host placed in front of the API URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Relay {
    #[default]
    Default,
    Custom(String),
    Disabled,
}

impl Relay {
    /// Prefix `url` with the relay host, if any.
    #[must_use]
    pub fn wrap(&self, url: &str) -> String {
        match self {
            Self::Default => format!("{DEFAULT_RELAY_URL}/{url}"),
            Self::Custom(relay) => format!("{}/{url}", relay.trim_end_matches('/')),
            Self::Disabled => url.to_string(),
        }
    }
}

#[derive(Clone, Default)]
pub struct SaamClientOptions {
    pub api_key: ApiKey,
    pub base_url: Option<String>,
    pub relay: Relay,
    pub headers: Option<HashMap<String, String>>,
    pub client: Option<Client>,
}

impl SaamClientOptions {
    /// Options from `SAAM_BASE_URL` and `SAAM_RELAY_URL`. An empty relay
    /// URL disables the relay. The API key stays lazily resolved from
    /// `SAAM_API_KEY`.
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = env::var("SAAM_BASE_URL")
            .ok()
            .filter(|url| !url.is_empty());
        let relay = match env::var("SAAM_RELAY_URL") {
            Ok(url) if url.is_empty() => Relay::Disabled,
            Ok(url) => Relay::Custom(url),
            Err(_) => Relay::Default,
        };

        Self {
            base_url,
            relay,
            ..Self::default()
        }
    }
}
