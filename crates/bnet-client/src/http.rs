//! GET gateway shared by every resource client.
//!
//! Answers repeated URLs from its [`ResponseCache`] without touching the
//! network, and normalizes failed responses into [`ApiError`].

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::cache::{CachedResponse, ResponseCache};
use crate::config::ClientConfig;
use crate::{ApiError, BnetError};

/// Error body returned by the game data APIs.
///
/// Newer endpoints send `code`/`type`/`detail`, the legacy community
/// endpoints send `status`/`reason`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    code: Option<u16>,
    #[serde(default, rename = "type")]
    kind: Option<String>,
    #[serde(default)]
    detail: Option<String>,
    #[serde(default)]
    reason: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// HTTP client with an injectable response cache. Clones share the cache.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    http: reqwest::Client,
    cache: Arc<ResponseCache>,
}

impl Default for HttpGateway {
    fn default() -> Self {
        Self::new(ResponseCache::default())
    }
}

impl HttpGateway {
    pub fn new(cache: ResponseCache) -> Self {
        Self::with_client(reqwest::Client::new(), cache)
    }

    pub fn with_client(http: reqwest::Client, cache: ResponseCache) -> Self {
        Self {
            http,
            cache: Arc::new(cache),
        }
    }

    /// Build the HTTP client and cache described by `config`.
    pub fn from_config(config: &ClientConfig) -> Result<Self, BnetError> {
        Ok(Self::with_client(config.http_client()?, Self::cache_for(config)))
    }

    pub(crate) fn cache_for(config: &ClientConfig) -> ResponseCache {
        let cache = ResponseCache::new(config.cache_capacity);
        match config.cache_max_age {
            Some(max_age) => cache.with_max_age(max_age),
            None => cache,
        }
    }

    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    /// GET `url` and parse the body as JSON, serving cached responses first.
    pub async fn get(&self, url: &str) -> Result<serde_json::Value, BnetError> {
        if let Some(hit) = self.cache.lookup(url) {
            tracing::debug!(path = %url_path(url), "Serving response from cache");
            return Ok(hit.body);
        }
        self.fetch_fresh(url).await
    }

    /// GET `url` and deserialize the body into `T`.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, BnetError> {
        let value = self.get(url).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// GET `url` from the network even if it is cached. The cache is
    /// updated with the new response.
    pub async fn fetch_fresh(&self, url: &str) -> Result<serde_json::Value, BnetError> {
        tracing::debug!(path = %url_path(url), "GET");
        let resp = self.http.get(url).send().await?;

        let status = resp.status();
        let headers: HashMap<String, String> = resp
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = resp.text().await?;

        if !status.is_success() {
            tracing::warn!(
                path = %url_path(url),
                status = status.as_u16(),
                "Battle.net API request failed"
            );
            return Err(BnetError::Api(api_error(status, &body)));
        }

        let value: serde_json::Value = serde_json::from_str(&body)?;
        self.cache.store(CachedResponse {
            url: url.to_string(),
            body: value.clone(),
            headers,
            status_code: status.as_u16(),
            fetched_at: Utc::now(),
        });

        Ok(value)
    }
}

/// Path portion of `url` for logging. The query carries the access token.
fn url_path(url: &str) -> String {
    Url::parse(url)
        .map(|u| u.path().to_owned())
        .unwrap_or_else(|_| "<unparsable url>".to_owned())
}

/// Build an `ApiError` from a non-success response.
fn api_error(status: reqwest::StatusCode, body: &str) -> ApiError {
    let reason = status.canonical_reason().map(str::to_string);

    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => ApiError {
            code: parsed.code.or(Some(status.as_u16())),
            kind: parsed.kind.or(reason.clone()),
            message: parsed
                .detail
                .or(parsed.reason)
                .or(parsed.message)
                .or(reason),
        },
        Err(_) => ApiError {
            code: Some(status.as_u16()),
            kind: reason.clone(),
            message: Some(body.trim().to_string())
                .filter(|b| !b.is_empty())
                .or(reason),
        },
    }
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[test]
    fn url_path_drops_query_and_host() {
        assert_eq!(
            url_path("https://eu.api.blizzard.com/wow/boss/?locale=en_GB&access_token=t"),
            "/wow/boss/"
        );
        assert_eq!(url_path("http://127.0.0.1:8080?x=1"), "/");
        assert_eq!(url_path("not a url?access_token=t"), "<unparsable url>");
    }

    #[test]
    fn api_error_reads_game_data_body() {
        let err = api_error(
            StatusCode::NOT_FOUND,
            r#"{"code":404,"type":"BLZWEBAPI00000404","detail":"Not Found"}"#,
        );
        assert_eq!(err.code, Some(404));
        assert_eq!(err.kind.as_deref(), Some("BLZWEBAPI00000404"));
        assert_eq!(err.message.as_deref(), Some("Not Found"));
    }

    #[test]
    fn api_error_reads_community_body() {
        let err = api_error(
            StatusCode::NOT_FOUND,
            r#"{"status":"nok","reason":"Character not found."}"#,
        );
        assert_eq!(err.code, Some(404));
        assert_eq!(err.kind.as_deref(), Some("Not Found"));
        assert_eq!(err.message.as_deref(), Some("Character not found."));
    }

    #[test]
    fn api_error_falls_back_to_raw_body() {
        let err = api_error(StatusCode::BAD_GATEWAY, "<html>upstream</html>");
        assert_eq!(err.code, Some(502));
        assert_eq!(err.message.as_deref(), Some("<html>upstream</html>"));

        let empty = api_error(StatusCode::SERVICE_UNAVAILABLE, "  ");
        assert_eq!(empty.message.as_deref(), Some("Service Unavailable"));
    }

    #[tokio::test]
    async fn repeated_get_is_served_from_cache() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/wow/boss/"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "bosses": [{ "id": 24723 }] })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let gateway = HttpGateway::default();
        let url = format!("{}/wow/boss/?locale=en_US", server.uri());

        let first = gateway.get(&url).await.unwrap();
        let second = gateway.get(&url).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(first["bosses"][0]["id"], 24723);

        let cached = gateway.cache().last().unwrap();
        assert_eq!(cached.url, url);
        assert_eq!(cached.status_code, 200);
        assert!(cached.headers.contains_key("content-type"));
    }

    #[tokio::test]
    async fn fetch_fresh_bypasses_cache() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/wow/mount/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .expect(2)
            .mount(&server)
            .await;

        let gateway = HttpGateway::default();
        let url = format!("{}/wow/mount/", server.uri());
        gateway.get(&url).await.unwrap();
        gateway.fetch_fresh(&url).await.unwrap();
        gateway.get(&url).await.unwrap();
    }

    #[tokio::test]
    async fn disabled_cache_always_hits_network() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([1, 2])))
            .expect(2)
            .mount(&server)
            .await;

        let gateway = HttpGateway::new(ResponseCache::disabled());
        let url = format!("{}/wow/zone/", server.uri());
        gateway.get(&url).await.unwrap();
        gateway.get(&url).await.unwrap();
        assert!(gateway.cache().is_empty());
    }

    #[tokio::test]
    async fn error_status_becomes_api_error_and_is_not_cached() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
                "code": 404,
                "type": "BLZWEBAPI00000404",
                "detail": "Not Found"
            })))
            .mount(&server)
            .await;

        let gateway = HttpGateway::default();
        let err = gateway
            .get(&format!("{}/wow/item/0", server.uri()))
            .await
            .unwrap_err();

        assert!(matches!(err, BnetError::Api(_)));
        assert_eq!(err.status(), Some(404));
        assert_eq!(
            err.api_error().and_then(|e| e.message.as_deref()),
            Some("Not Found")
        );
        assert!(gateway.cache().is_empty());
    }

    #[tokio::test]
    async fn malformed_body_is_json_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let gateway = HttpGateway::default();
        let err = gateway
            .get(&format!("{}/wow/quest/1", server.uri()))
            .await
            .unwrap_err();
        assert!(matches!(err, BnetError::Json(_)));
        assert!(gateway.cache().is_empty());
    }

    #[tokio::test]
    async fn get_json_deserializes_typed_body() {
        #[derive(Deserialize)]
        struct Realm {
            id: u32,
            slug: String,
        }

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "id": 1080, "slug": "silvermoon" })),
            )
            .mount(&server)
            .await;

        let gateway = HttpGateway::default();
        let realm: Realm = gateway
            .get_json(&format!("{}/data/wow/realm/silvermoon", server.uri()))
            .await
            .unwrap();
        assert_eq!(realm.id, 1080);
        assert_eq!(realm.slug, "silvermoon");
    }

    #[tokio::test]
    async fn transport_failure_is_http_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!(
            "http://{}/wow/boss/?locale=en_US&access_token=sekrit-token",
            listener.local_addr().unwrap()
        );
        drop(listener);

        let gateway = HttpGateway::default();
        let err = gateway.get(&url).await.unwrap_err();
        assert!(matches!(err, BnetError::Http(_)));
        assert!(!err.to_string().contains("sekrit-token"));
        assert!(!format!("{err:?}").contains("sekrit-token"));
    }

    #[test]
    fn huge_cache_capacity_from_config() {
        let config = ClientConfig::default().with_cache_capacity(usize::MAX / 2);
        let gateway = HttpGateway::from_config(&config).unwrap();
        assert_eq!(gateway.cache().capacity(), usize::MAX / 2);
        assert!(gateway.cache().is_empty());
    }
}
