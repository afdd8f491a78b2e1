//! OAuth client-credentials exchange for Battle.net.
//!
//! Handles token endpoint URL generation, the exchange itself, and the
//! shared token slot that resource clients read from.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use chrono::Utc;
use serde::Deserialize;
use url::Url;

use crate::config::{ClientConfig, Credentials};
use crate::region::{Locale, Region};
use crate::{ApiError, BearerToken, BnetError};

/// Battle.net OAuth token response from the token endpoint.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    token_type: String,
    expires_in: u64,
    #[serde(default)]
    scope: Option<String>,
}

/// Battle.net OAuth error response.
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: Option<String>,
    error_description: Option<String>,
}

/// Shared slot holding the current bearer token.
///
/// Clones point at the same slot, so a token set through any handle is
/// visible to every client built from it.
#[derive(Clone, Default)]
pub struct TokenCell(Arc<RwLock<Option<BearerToken>>>);

impl fmt::Debug for TokenCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TokenCell").field(&self.is_set()).finish()
    }
}

impl TokenCell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: BearerToken) -> Self {
        Self(Arc::new(RwLock::new(Some(token))))
    }

    pub fn get(&self) -> Option<BearerToken> {
        self.0.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn set(&self, token: BearerToken) {
        *self.0.write().unwrap_or_else(PoisonError::into_inner) = Some(token);
    }

    pub fn is_set(&self) -> bool {
        self.0.read().unwrap_or_else(PoisonError::into_inner).is_some()
    }
}

/// Obtains and holds the bearer token for one client id.
///
/// Region and locale are defaults for callers; the manager only uses the
/// region to pick the OAuth host.
pub struct CredentialManager {
    credentials: Credentials,
    region: Region,
    locale: Locale,
    oauth_base: Option<Url>,
    http: reqwest::Client,
    token: TokenCell,
}

impl CredentialManager {
    /// Create a manager without contacting the token endpoint.
    pub fn new(credentials: Credentials, config: &ClientConfig) -> Result<Self, BnetError> {
        Ok(Self::with_client(credentials, config, config.http_client()?))
    }

    /// Create a manager that sends the exchange through `http`.
    pub fn with_client(credentials: Credentials, config: &ClientConfig, http: reqwest::Client) -> Self {
        Self {
            credentials,
            region: config.region,
            locale: config.locale,
            oauth_base: config.oauth_base.clone(),
            http,
            token: TokenCell::new(),
        }
    }

    /// Create a manager and perform the token exchange.
    ///
    /// Resolves once: with the manager holding a token, or with the
    /// exchange failure.
    pub async fn connect(credentials: Credentials, config: &ClientConfig) -> Result<Self, BnetError> {
        let manager = Self::new(credentials, config)?;
        manager.authenticate().await?;
        Ok(manager)
    }

    /// Exchange the client credentials for a new bearer token and store it.
    ///
    /// Not retried. Call again to re-authenticate after the token expires.
    /// Fails with `Config` without a request when the id or secret is empty.
    pub async fn authenticate(&self) -> Result<BearerToken, BnetError> {
        if !self.credentials.is_complete() {
            return Err(BnetError::Config(
                "client id and secret are required for the token exchange".into(),
            ));
        }
        let url = self.token_url()?;
        tracing::info!(region = %self.region, "Requesting Battle.net client-credentials token");

        let resp = self.http.get(url).send().await?;
        let token = parse_token_response(resp).await?;

        tracing::info!(
            expires_in_secs = token.expires_in,
            "Battle.net token acquired"
        );
        self.token.set(token.clone());
        Ok(token)
    }

    /// Token endpoint URL, including the credentials as query pairs.
    pub(crate) fn token_url(&self) -> Result<Url, BnetError> {
        let mut url = match &self.oauth_base {
            Some(base) => base.clone(),
            None => Url::parse(&format!("https://{}/", self.region.oauth_host()))?,
        };
        if url.cannot_be_a_base() {
            return Err(BnetError::InvalidBaseUrl(url.to_string()));
        }
        url.path_segments_mut()
            .map_err(|()| BnetError::InvalidBaseUrl("cannot-be-a-base URL".into()))?
            .pop_if_empty()
            .extend(["oauth", "token"]);
        url.query_pairs_mut()
            .append_pair("client_id", &self.credentials.client_id)
            .append_pair("client_secret", &self.credentials.client_secret)
            .append_pair("grant_type", "client_credentials");
        Ok(url)
    }

    pub fn has_token(&self) -> bool {
        self.token.is_set()
    }

    pub fn token(&self) -> Option<BearerToken> {
        self.token.get()
    }

    /// Install a token obtained elsewhere, bypassing the exchange.
    pub fn set_token(&self, token: BearerToken) {
        self.token.set(token);
    }

    /// Handle for resource clients. Shares the slot with this manager.
    pub fn token_cell(&self) -> TokenCell {
        self.token.clone()
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn client_id(&self) -> &str {
        &self.credentials.client_id
    }
}

impl fmt::Debug for CredentialManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialManager")
            .field("credentials", &self.credentials)
            .field("region", &self.region)
            .field("locale", &self.locale)
            .field("has_token", &self.has_token())
            .finish_non_exhaustive()
    }
}

/// Parse the token endpoint response into a `BearerToken`.
async fn parse_token_response(resp: reqwest::Response) -> Result<BearerToken, BnetError> {
    let status = resp.status();
    let body = resp.text().await?;

    if !status.is_success() {
        tracing::warn!(status = status.as_u16(), "Battle.net token exchange rejected");
        return Err(BnetError::TokenExchange(token_error(status, &body)));
    }

    let token_resp: TokenResponse = serde_json::from_str(&body).map_err(|e| {
        BnetError::TokenExchange(ApiError {
            code: Some(status.as_u16()),
            kind: Some("invalid_response".into()),
            message: Some(format!("failed to parse token response: {e}")),
        })
    })?;

    Ok(BearerToken {
        identifier: token_resp.access_token,
        token_type: token_resp.token_type,
        expires_in: token_resp.expires_in,
        scope: token_resp.scope,
        obtained_at: Utc::now(),
    })
}

/// Build an `ApiError` whose message is never empty.
fn token_error(status: reqwest::StatusCode, body: &str) -> ApiError {
    let reason = status.canonical_reason().unwrap_or("token exchange failed");
    let parsed: Option<ErrorResponse> = serde_json::from_str(body).ok();
    let (kind, description) = match parsed {
        Some(e) => (e.error, e.error_description),
        None => (None, None),
    };

    let message = description
        .or_else(|| kind.clone())
        .filter(|m| !m.trim().is_empty())
        .or_else(|| Some(body.trim().to_string()).filter(|b| !b.is_empty()))
        .unwrap_or_else(|| reason.to_string());

    ApiError {
        code: Some(status.as_u16()),
        kind: kind.or_else(|| Some(reason.to_string())),
        message: Some(message),
    }
}
