use std::time::Duration;

use crate::shared::error::{RagiosError, Result};

pub const DEFAULT_ADDRESS: &str = "http://127.0.0.1";
pub const DEFAULT_PORT: &str = "5041";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for a Ragios server.
///
/// Credentials are optional; without them the client sends an empty session
/// cookie and leaves it to the server to accept or reject the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub address: String,
    pub port: String,
    pub username: Option<String>,
    pub password: Option<String>,
    /// Transport timeout, applied when the client is built.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS.to_string(),
            port: DEFAULT_PORT.to_string(),
            username: None,
            password: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a configuration from environment variables.
    ///
    /// - `RAGIOS_ADDRESS` (default `http://127.0.0.1`)
    /// - `RAGIOS_PORT` (default `5041`)
    /// - `RAGIOS_USERNAME`, `RAGIOS_PASSWORD` (default unset)
    /// - `RAGIOS_TIMEOUT_SECS` (default 30)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let timeout = match non_empty("RAGIOS_TIMEOUT_SECS") {
            Some(raw) => {
                let secs = raw.trim().parse::<u64>().map_err(|e| {
                    RagiosError::Config(format!("invalid RAGIOS_TIMEOUT_SECS '{}': {}", raw, e))
                })?;
                Duration::from_secs(secs)
            }
            None => defaults.timeout,
        };

        Ok(Self {
            address: non_empty("RAGIOS_ADDRESS").unwrap_or(defaults.address),
            port: non_empty("RAGIOS_PORT").unwrap_or(defaults.port),
            username: lookup("RAGIOS_USERNAME"),
            password: lookup("RAGIOS_PASSWORD"),
            timeout,
        })
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    pub fn with_port(mut self, port: impl Into<String>) -> Self {
        self.port = port.into();
        self
    }

    pub fn with_credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// `address:port`, the root every endpoint path is appended to.
    pub fn base_url(&self) -> String {
        format!("{}:{}", self.address.trim_end_matches('/'), self.port)
    }

    /// Both credentials, or `None` when either is unset.
    pub(crate) fn credentials(&self) -> Option<(&str, &str)> {
        match (self.username.as_deref(), self.password.as_deref()) {
            (Some(user), Some(pass)) => Some((user, pass)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_settings() {
        let config = ClientConfig::default();
        assert_eq!(config.address, "http://127.0.0.1");
        assert_eq!(config.port, "5041");
        assert_eq!(config.username, None);
        assert_eq!(config.password, None);
        assert_eq!(config.base_url(), "http://127.0.0.1:5041");
    }

    #[test]
    fn test_new_address_keeps_default_credentials() {
        let config = ClientConfig::new()
            .with_address("https://mysite.com")
            .with_port("6802");
        assert_eq!(config.address, "https://mysite.com");
        assert_eq!(config.port, "6802");
        assert_eq!(config.username, None);
        assert_eq!(config.password, None);
    }

    #[test]
    fn test_new_credentials_keep_default_address() {
        let config = ClientConfig::new().with_credentials("superadmin", "abc123");
        assert_eq!(config.address, "http://127.0.0.1");
        assert_eq!(config.port, "5041");
        assert_eq!(config.username.as_deref(), Some("superadmin"));
        assert_eq!(config.password.as_deref(), Some("abc123"));
        assert_eq!(config.credentials(), Some(("superadmin", "abc123")));
    }

    #[test]
    fn test_all_settings_overridden() {
        let config = ClientConfig::new()
            .with_credentials("superadmin", "abc123")
            .with_address("https://mysite.com/")
            .with_port("6802")
            .with_timeout(Duration::from_secs(5));
        assert_eq!(config.base_url(), "https://mysite.com:6802");
        assert_eq!(config.username.as_deref(), Some("superadmin"));
        assert_eq!(config.password.as_deref(), Some("abc123"));
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_partial_credentials_are_unset() {
        let mut config = ClientConfig::new();
        config.username = Some("admin".to_string());
        assert_eq!(config.credentials(), None);
    }

    #[test]
    fn test_from_env_values() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            ("RAGIOS_ADDRESS", "https://ragios.example.com"),
            ("RAGIOS_PORT", "443"),
            ("RAGIOS_USERNAME", "admin"),
            ("RAGIOS_PASSWORD", "ragios"),
            ("RAGIOS_TIMEOUT_SECS", "12"),
        ]))
        .unwrap();

        assert_eq!(config.address, "https://ragios.example.com");
        assert_eq!(config.port, "443");
        assert_eq!(config.credentials(), Some(("admin", "ragios")));
        assert_eq!(config.timeout, Duration::from_secs(12));
    }

    #[test]
    fn test_from_env_defaults() {
        let config = ClientConfig::from_lookup(lookup_from(&[("RAGIOS_PORT", "  ")])).unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_from_env_rejects_bad_timeout() {
        let err = ClientConfig::from_lookup(lookup_from(&[("RAGIOS_TIMEOUT_SECS", "soon")]))
            .unwrap_err();
        assert!(matches!(err, RagiosError::Config(msg) if msg.contains("RAGIOS_TIMEOUT_SECS")));
    }
}
