//! Helpers for endpoint tests: a mock API host that echoes nothing but
//! records the last requested URL in the gateway cache.

use url::Url;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::auth::TokenCell;
use crate::cache::ResponseCache;
use crate::context::ApiContext;
use crate::http::HttpGateway;
use crate::BearerToken;

pub(crate) const TEST_TOKEN: &str = "test-token";

/// Start a mock host answering every GET with `{"ok": true}` and return a
/// context pointed at it, holding [`TEST_TOKEN`].
pub(crate) async fn mock_context() -> (MockServer, ApiContext) {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "ok": true })))
        .mount(&server)
        .await;

    let base = Url::parse(&server.uri()).expect("mock server uri");
    let ctx = ApiContext::new(
        HttpGateway::new(ResponseCache::default()),
        TokenCell::with_token(BearerToken::new(TEST_TOKEN, 3600)),
    )
    .with_api_base(Some(base));

    (server, ctx)
}

/// Path and query of the last URL the gateway fetched.
pub(crate) fn last_request(ctx: &ApiContext) -> String {
    let cached = ctx.gateway().cache().last().expect("a cached response");
    let url = Url::parse(&cached.url).expect("cached url");
    match url.query() {
        Some(q) => format!("{}?{q}", url.path()),
        None => url.path().to_string(),
    }
}
