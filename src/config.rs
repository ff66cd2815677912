// src/config.rs

use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::error::ConfigError;

/// Public APT analysis server.
pub const DEFAULT_ENDPOINT: &str = "http://angular-apt.azurewebsites.net/api/";

/// Environment variable overriding the endpoint.
pub const ENDPOINT_ENV: &str = "APT_SERVER_ENDPOINT";

/// Base URL every request path is appended to.
///
/// Always an absolute http(s) URL ending in `/`, so `endpoint + sub_path`
/// is the full request URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint(String);

impl Endpoint {
    pub fn new(raw: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::EmptyEndpoint);
        }

        let parsed = Url::parse(trimmed).map_err(|source| ConfigError::InvalidEndpoint {
            endpoint: trimmed.to_string(),
            source,
        })?;
        match parsed.scheme() {
            "http" | "https" => {}
            other => return Err(ConfigError::UnsupportedScheme(other.to_string())),
        }
        if parsed.cannot_be_a_base() || parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(ConfigError::NotABase(trimmed.to_string()));
        }

        let mut base = trimmed.to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        Ok(Self(base))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Full URL for a sub-path.
    pub fn join(&self, sub_path: &str) -> String {
        format!("{}{}", self.0, sub_path)
    }
}

impl Default for Endpoint {
    fn default() -> Self {
        Self(DEFAULT_ENDPOINT.to_string())
    }
}

impl FromStr for Endpoint {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Endpoint::new(s)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ForwarderConfig {
    pub endpoint: Endpoint,
}

impl ForwarderConfig {
    pub fn with_endpoint(mut self, endpoint: Endpoint) -> Self {
        self.endpoint = endpoint;
        self
    }

    /// Reads `APT_SERVER_ENDPOINT`, falling back to the default endpoint.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let endpoint = match lookup(ENDPOINT_ENV) {
            Some(raw) => Endpoint::new(raw)?,
            None => Endpoint::default(),
        };
        Ok(Self { endpoint })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint() {
        let endpoint = Endpoint::default();
        assert_eq!(endpoint.as_str(), "http://angular-apt.azurewebsites.net/api/");
        assert_eq!(
            endpoint.join("moduleRunner"),
            "http://angular-apt.azurewebsites.net/api/moduleRunner"
        );
    }

    #[test]
    fn test_trailing_slash_appended() {
        let endpoint = Endpoint::new("http://localhost:8080/api").unwrap();
        assert_eq!(endpoint.as_str(), "http://localhost:8080/api/");
        assert_eq!(endpoint.join("normalizeApt"), "http://localhost:8080/api/normalizeApt");
    }

    #[test]
    fn test_existing_slash_kept() {
        let endpoint: Endpoint = "https://apt.example.org/".parse().unwrap();
        assert_eq!(endpoint.as_str(), "https://apt.example.org/");
    }

    #[test]
    fn test_empty_endpoint_rejected() {
        assert!(matches!(Endpoint::new(""), Err(ConfigError::EmptyEndpoint)));
        assert!(matches!(Endpoint::new("   "), Err(ConfigError::EmptyEndpoint)));
    }

    #[test]
    fn test_relative_endpoint_rejected() {
        let result = Endpoint::new("api/");
        assert!(matches!(result, Err(ConfigError::InvalidEndpoint { .. })));
    }

    #[test]
    fn test_non_http_scheme_rejected() {
        match Endpoint::new("ftp://apt.example.org/") {
            Err(ConfigError::UnsupportedScheme(scheme)) => assert_eq!(scheme, "ftp"),
            other => panic!("expected UnsupportedScheme, got {:?}", other),
        }
    }

    #[test]
    fn test_query_and_fragment_rejected() {
        for raw in ["http://h.test/api?key=1", "http://h.test/api#top", "http://h.test/api?"] {
            match Endpoint::new(raw) {
                Err(ConfigError::NotABase(endpoint)) => assert_eq!(endpoint, raw),
                other => panic!("expected NotABase for {}, got {:?}", raw, other),
            }
        }
    }

    #[test]
    fn test_joined_url_keeps_sub_path_in_path() {
        let endpoint = Endpoint::new("http://h.test/api").unwrap();
        let joined = Url::parse(&endpoint.join("moduleRunner")).unwrap();
        assert_eq!(joined.path(), "/api/moduleRunner");
        assert!(joined.query().is_none());
    }

    #[test]
    fn test_config_from_lookup_uses_env_value() {
        let config = ForwarderConfig::from_lookup(|key| {
            assert_eq!(key, ENDPOINT_ENV);
            Some("http://10.0.0.5:9000/api".to_string())
        })
        .unwrap();
        assert_eq!(config.endpoint.as_str(), "http://10.0.0.5:9000/api/");
    }

    #[test]
    fn test_config_from_lookup_defaults() {
        let config = ForwarderConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, ForwarderConfig::default());
    }

    #[test]
    fn test_config_from_lookup_propagates_invalid() {
        let result = ForwarderConfig::from_lookup(|_| Some(String::new()));
        assert!(matches!(result, Err(ConfigError::EmptyEndpoint)));
    }
}
