//! Client configuration: defaults plus environment overrides.

use std::fmt;
use std::time::Duration;

use url::Url;

use crate::BnetError;
use crate::region::{Locale, Region};

/// Settings shared by the credential manager and the HTTP gateway.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Default region for the token exchange.
    pub region: Region,
    /// Default locale. Carried as metadata; resource methods take their own.
    pub locale: Locale,
    /// Replaces `https://{region}.api.blizzard.com` for every region.
    pub api_base: Option<Url>,
    /// Replaces `https://{region}.battle.net` for the token exchange.
    pub oauth_base: Option<Url>,
    /// Number of responses kept by the gateway cache. 0 disables caching.
    pub cache_capacity: usize,
    pub cache_max_age: Option<Duration>,
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            region: Region::default(),
            locale: Locale::default(),
            api_base: None,
            oauth_base: None,
            cache_capacity: 1,
            cache_max_age: None,
            timeout: None,
            user_agent: concat!("bnet-client/", env!("CARGO_PKG_VERSION")).into(),
        }
    }
}

impl ClientConfig {
    pub fn new(region: Region, locale: Locale) -> Self {
        Self {
            region,
            locale,
            ..Self::default()
        }
    }

    /// Load defaults, then apply `BNET_*` environment overrides.
    pub fn from_env() -> Result<Self, BnetError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, BnetError> {
        let g = |key: &str| get(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(v) = g("BNET_REGION") {
            config.region = v.parse()?;
        }
        if let Some(v) = g("BNET_LOCALE") {
            config.locale = v.parse()?;
        }
        if let Some(v) = g("BNET_API_BASE") {
            config.api_base = Some(Url::parse(&v)?);
        }
        if let Some(v) = g("BNET_OAUTH_BASE") {
            config.oauth_base = Some(Url::parse(&v)?);
        }
        if let Some(v) = g("BNET_CACHE_CAPACITY") {
            config.cache_capacity = parse_number("BNET_CACHE_CAPACITY", &v)?;
        }
        if let Some(v) = g("BNET_CACHE_MAX_AGE_SECS") {
            config.cache_max_age = Some(Duration::from_secs(parse_number(
                "BNET_CACHE_MAX_AGE_SECS",
                &v,
            )?));
        }
        if let Some(v) = g("BNET_TIMEOUT_SECS") {
            config.timeout = Some(Duration::from_secs(parse_number("BNET_TIMEOUT_SECS", &v)?));
        }

        Ok(config)
    }

    pub fn with_api_base(mut self, base: Url) -> Self {
        self.api_base = Some(base);
        self
    }

    pub fn with_oauth_base(mut self, base: Url) -> Self {
        self.oauth_base = Some(base);
        self
    }

    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }

    /// HTTP client carrying the configured user agent and timeout.
    pub(crate) fn http_client(&self) -> Result<reqwest::Client, BnetError> {
        let mut builder = reqwest::Client::builder().user_agent(self.user_agent.clone());
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(builder.build()?)
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, BnetError> {
    value
        .trim()
        .parse()
        .map_err(|_| BnetError::Config(format!("{key} must be a non-negative integer, got {value:?}")))
}

/// Client id and secret issued by the Battle.net developer portal.
#[derive(Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// Both the id and the secret are non-blank.
    pub fn is_complete(&self) -> bool {
        !self.client_id.trim().is_empty() && !self.client_secret.trim().is_empty()
    }

    /// Read `BNET_CLIENT_ID` and `BNET_CLIENT_SECRET`.
    pub fn from_env() -> Result<Self, BnetError> {
        let var = |key: &str| {
            std::env::var(key)
                .ok()
                .filter(|v| !v.is_empty())
                .ok_or_else(|| BnetError::Config(format!("{key} is not set")))
        };
        Ok(Self::new(var("BNET_CLIENT_ID")?, var("BNET_CLIENT_SECRET")?))
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_environment() {
        let config = ClientConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.region, Region::Eu);
        assert_eq!(config.locale, Locale::EnGb);
        assert_eq!(config.cache_capacity, 1);
        assert!(config.api_base.is_none());
        assert!(config.timeout.is_none());
        assert!(config.user_agent.starts_with("bnet-client/"));
    }

    #[test]
    fn environment_overrides_apply() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("BNET_REGION", "us"),
            ("BNET_LOCALE", "en_US"),
            ("BNET_API_BASE", "http://127.0.0.1:9000"),
            ("BNET_CACHE_CAPACITY", "8"),
            ("BNET_CACHE_MAX_AGE_SECS", "30"),
            ("BNET_TIMEOUT_SECS", ""),
        ]))
        .unwrap();

        assert_eq!(config.region, Region::Us);
        assert_eq!(config.locale, Locale::EnUs);
        assert_eq!(config.api_base.unwrap().as_str(), "http://127.0.0.1:9000/");
        assert_eq!(config.cache_capacity, 8);
        assert_eq!(config.cache_max_age, Some(Duration::from_secs(30)));
        assert!(config.timeout.is_none(), "empty values are ignored");
    }

    #[test]
    fn invalid_values_are_rejected() {
        let err = ClientConfig::from_lookup(lookup(&[("BNET_CACHE_CAPACITY", "-1")])).unwrap_err();
        assert!(matches!(err, BnetError::Config(_)));

        let err = ClientConfig::from_lookup(lookup(&[("BNET_REGION", "atlantis")])).unwrap_err();
        assert!(err.to_string().contains("atlantis"));
    }

    #[test]
    fn credentials_debug_hides_secret() {
        let creds = Credentials::new("id", "hunter2");
        let out = format!("{creds:?}");
        assert!(out.contains("id"));
        assert!(!out.contains("hunter2"));
    }

    #[test]
    fn blank_credentials_are_incomplete() {
        assert!(Credentials::new("id", "secret").is_complete());
        assert!(!Credentials::new("", "").is_complete());
        assert!(!Credentials::new("id", "  ").is_complete());
    }
}
