//! Client configuration
//!
//! Values come from the environment with builder-style overrides for tests
//! and embedding applications.

use std::sync::Arc;
use std::time::Duration;

const SERVER_URL_VAR: &str = "RELVAL_SERVER_URL";
const IDENTITY_PATH_VAR: &str = "RELVAL_IDENTITY_PATH";
const TIMEOUT_VAR: &str = "RELVAL_REQUEST_TIMEOUT_SECS";

pub const DEFAULT_SERVER_URL: &str = "http://localhost:8000";
pub const DEFAULT_IDENTITY_PATH: &str = "api/system/user_info";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    server_url: Arc<str>,
    identity_path: Arc<str>,
    request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: Arc::from(DEFAULT_SERVER_URL),
            identity_path: Arc::from(DEFAULT_IDENTITY_PATH),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl ClientConfig {
    pub fn from_environment() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Unset or blank values keep
    /// their defaults; an unparsable timeout is logged and ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let mut config = Self::default();
        if let Some(url) = read(SERVER_URL_VAR) {
            config.server_url = Arc::from(url);
        }
        if let Some(path) = read(IDENTITY_PATH_VAR) {
            config.identity_path = Arc::from(path);
        }
        if let Some(raw) = read(TIMEOUT_VAR) {
            match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => {
                    config.request_timeout = Duration::from_secs(secs);
                }
                _ => log::warn!(
                    "[ClientConfig] Ignoring invalid {}={:?}, using {:?}",
                    TIMEOUT_VAR,
                    raw,
                    config.request_timeout
                ),
            }
        }
        config
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    pub fn identity_path(&self) -> &str {
        &self.identity_path
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    pub fn with_server_url(mut self, url: impl Into<Arc<str>>) -> Self {
        self.server_url = url.into();
        self
    }

    pub fn with_identity_path(mut self, path: impl Into<Arc<str>>) -> Self {
        self.identity_path = path.into();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ClientConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.identity_path(), "api/system/user_info");
    }

    #[test]
    fn test_reads_all_variables() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            ("RELVAL_SERVER_URL", "https://relval.example.org"),
            ("RELVAL_IDENTITY_PATH", "/api/v2/whoami"),
            ("RELVAL_REQUEST_TIMEOUT_SECS", "5"),
        ]));
        assert_eq!(config.server_url(), "https://relval.example.org");
        assert_eq!(config.identity_path(), "/api/v2/whoami");
        assert_eq!(config.request_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_blank_and_invalid_values_keep_defaults() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            ("RELVAL_SERVER_URL", "   "),
            ("RELVAL_REQUEST_TIMEOUT_SECS", "soon"),
        ]));
        assert_eq!(config.server_url(), DEFAULT_SERVER_URL);
        assert_eq!(config.request_timeout(), DEFAULT_REQUEST_TIMEOUT);

        let config = ClientConfig::from_lookup(lookup_from(&[(
            "RELVAL_REQUEST_TIMEOUT_SECS",
            "0",
        )]));
        assert_eq!(config.request_timeout(), DEFAULT_REQUEST_TIMEOUT);
    }
}
