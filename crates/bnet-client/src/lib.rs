//! Battle.net API client library.
//!
//! Provides the client-credentials token exchange, a GET gateway with a
//! small response cache, and typed resource clients for the World of
//! Warcraft, Diablo III and StarCraft II endpoints.

pub mod auth;
pub mod cache;
pub mod client;
pub mod config;
pub mod context;
pub mod d3;
pub mod http;
pub mod region;
pub mod sc2;
pub mod wow;

#[cfg(test)]
pub(crate) mod testutil;

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

pub use auth::{CredentialManager, TokenCell};
pub use cache::{CachedResponse, ResponseCache};
pub use client::BattleNet;
pub use config::{ClientConfig, Credentials};
pub use context::{ApiContext, ResourceClient};
pub use http::HttpGateway;
pub use region::{Locale, Namespace, Region, Sc2Region};

/// Bearer token obtained from the client-credentials grant.
///
/// Expiry is informational only: requests are never blocked on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BearerToken {
    pub identifier: String,
    pub token_type: String,
    pub expires_in: u64,
    #[serde(default)]
    pub scope: Option<String>,
    pub obtained_at: DateTime<Utc>,
}

impl BearerToken {
    /// Build a token issued now. Useful for tokens obtained out of band.
    pub fn new(identifier: impl Into<String>, expires_in: u64) -> Self {
        Self {
            identifier: identifier.into(),
            token_type: "bearer".into(),
            expires_in,
            scope: None,
            obtained_at: Utc::now(),
        }
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        i64::try_from(self.expires_in)
            .ok()
            .and_then(Duration::try_seconds)
            .and_then(|d| self.obtained_at.checked_add_signed(d))
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at()
    }
}

/// Normalized failure payload from the token or resource endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub code: Option<u16>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub message: Option<String>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let head = match (self.code, &self.kind) {
            (Some(code), Some(kind)) => format!("{code} {kind}"),
            (Some(code), None) => code.to_string(),
            (None, Some(kind)) => kind.clone(),
            (None, None) => "unknown error".into(),
        };
        match &self.message {
            Some(message) => write!(f, "{head}: {message}"),
            None => f.write_str(&head),
        }
    }
}

/// Unified error type for the bnet-client crate.
#[derive(Debug, thiserror::Error)]
pub enum BnetError {
    /// Transport failure. The request URL is stripped: it carries the
    /// client secret or the access token.
    #[error("HTTP request failed: {0}")]
    Http(#[source] reqwest::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Not authenticated: no bearer token has been set")]
    NotAuthenticated,

    #[error("Token exchange failed: {0}")]
    TokenExchange(ApiError),

    #[error("Battle.net API error: {0}")]
    Api(ApiError),

    #[error("Base URL cannot be used for API paths: {0}")]
    InvalidBaseUrl(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<reqwest::Error> for BnetError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err.without_url())
    }
}

impl BnetError {
    /// The provider error payload, for token exchange and API failures.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::TokenExchange(e) | Self::Api(e) => Some(e),
            _ => None,
        }
    }

    /// HTTP status of the failure, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => self.api_error().and_then(|e| e.code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_expiry_is_relative_to_issue_time() {
        let mut token = BearerToken::new("abc", 3600);
        assert!(!token.is_expired());
        assert_eq!(token.expires_at() - token.obtained_at, Duration::seconds(3600));

        token.obtained_at = Utc::now() - Duration::seconds(7200);
        assert!(token.is_expired());
    }

    #[test]
    fn api_error_display_skips_missing_parts() {
        let full = ApiError {
            code: Some(404),
            kind: Some("BLZWEBAPI00000404".into()),
            message: Some("Not Found".into()),
        };
        assert_eq!(full.to_string(), "404 BLZWEBAPI00000404: Not Found");

        let bare = ApiError {
            code: Some(500),
            ..Default::default()
        };
        assert_eq!(bare.to_string(), "500");
    }

    #[test]
    fn error_exposes_status_and_payload() {
        let err = BnetError::Api(ApiError {
            code: Some(403),
            kind: None,
            message: Some("Forbidden".into()),
        });
        assert_eq!(err.status(), Some(403));
        assert_eq!(err.api_error().and_then(|e| e.message.as_deref()), Some("Forbidden"));

        assert!(BnetError::NotAuthenticated.api_error().is_none());
        assert_eq!(BnetError::NotAuthenticated.status(), None);
    }
}
