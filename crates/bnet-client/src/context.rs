//! Shared state and URL composition for resource clients.

use std::borrow::Cow;
use std::fmt::Display;

use url::Url;

use crate::auth::TokenCell;
use crate::http::HttpGateway;
use crate::region::{Locale, Region};
use crate::{BearerToken, BnetError};

/// Gateway, token slot and host override shared by resource clients.
///
/// Cloning is cheap; clones share the cache and the token slot.
#[derive(Debug, Clone)]
pub struct ApiContext {
    gateway: HttpGateway,
    token: TokenCell,
    api_base: Option<Url>,
}

impl ApiContext {
    pub fn new(gateway: HttpGateway, token: TokenCell) -> Self {
        Self {
            gateway,
            token,
            api_base: None,
        }
    }

    /// Send every request to `base` instead of the regional API host.
    pub fn with_api_base(mut self, base: Option<Url>) -> Self {
        self.api_base = base;
        self
    }

    pub fn gateway(&self) -> &HttpGateway {
        &self.gateway
    }

    pub fn token_cell(&self) -> &TokenCell {
        &self.token
    }

    /// Compose the full URL for `request`, token last.
    ///
    /// Fails with `NotAuthenticated` before touching the URL when no token
    /// is set.
    pub(crate) fn url(&self, request: &ApiRequest<'_>) -> Result<Url, BnetError> {
        let token = self.token.get().ok_or(BnetError::NotAuthenticated)?;

        let mut url = match &self.api_base {
            Some(base) => base.clone(),
            None => Url::parse(&format!("https://{}/", request.region.api_host()))?,
        };
        if url.cannot_be_a_base() {
            return Err(BnetError::InvalidBaseUrl(url.to_string()));
        }

        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| BnetError::InvalidBaseUrl("cannot-be-a-base URL".into()))?;
            segments.pop_if_empty();
            segments.extend(request.segments.iter().map(AsRef::<str>::as_ref));
            if request.trailing_slash {
                segments.push("");
            }
        }

        {
            let mut query = url.query_pairs_mut();
            for (key, value) in &request.query {
                query.append_pair(key, value);
            }
            query.append_pair("access_token", &token.identifier);
        }

        Ok(url)
    }

    /// Compose the URL for `request` and GET it through the gateway.
    pub(crate) async fn fetch(&self, request: ApiRequest<'_>) -> Result<serde_json::Value, BnetError> {
        let url = self.url(&request)?;
        self.gateway.get(url.as_str()).await
    }
}

/// Path and query of one endpoint call, before the host and token are added.
#[derive(Debug, Clone)]
pub(crate) struct ApiRequest<'a> {
    region: Region,
    segments: Vec<Cow<'a, str>>,
    trailing_slash: bool,
    query: Vec<(&'static str, Cow<'a, str>)>,
}

impl<'a> ApiRequest<'a> {
    /// Start from a static `/`-separated path such as `data/wow/realm`.
    pub(crate) fn new(region: Region, path: &'static str) -> Self {
        Self {
            region,
            segments: path
                .split('/')
                .filter(|s| !s.is_empty())
                .map(Cow::Borrowed)
                .collect(),
            trailing_slash: false,
            query: Vec::new(),
        }
    }

    /// Append a caller-supplied segment. Escaped as a single path segment.
    pub(crate) fn segment(mut self, value: &'a str) -> Self {
        self.segments.push(Cow::Borrowed(value));
        self
    }

    /// Append a numeric or otherwise displayable segment.
    pub(crate) fn id(mut self, value: impl Display) -> Self {
        self.segments.push(Cow::Owned(value.to_string()));
        self
    }

    /// Append a fixed segment after caller-supplied ones.
    pub(crate) fn path(mut self, path: &'static str) -> Self {
        self.segments
            .extend(path.split('/').filter(|s| !s.is_empty()).map(Cow::Borrowed));
        self
    }

    /// End the path with `/`, as the index endpoints are documented.
    pub(crate) fn index(mut self) -> Self {
        self.trailing_slash = true;
        self
    }

    pub(crate) fn query(mut self, key: &'static str, value: &'a str) -> Self {
        self.query.push((key, Cow::Borrowed(value)));
        self
    }

    pub(crate) fn query_value(mut self, key: &'static str, value: impl Display) -> Self {
        self.query.push((key, Cow::Owned(value.to_string())));
        self
    }

    pub(crate) fn namespace(self, namespace: &'a str) -> Self {
        self.query("namespace", namespace)
    }

    pub(crate) fn locale(self, locale: Locale) -> Self {
        self.query("locale", locale.as_str())
    }
}

/// Construction and token access common to every resource client.
pub trait ResourceClient: Sized {
    fn from_context(ctx: ApiContext) -> Self;

    fn context(&self) -> &ApiContext;

    /// Replace the token for this client and every client sharing its slot.
    fn set_bearer_token(&self, token: BearerToken) {
        self.context().token_cell().set(token);
    }

    fn bearer_token(&self) -> Option<BearerToken> {
        self.context().token_cell().get()
    }
}

/// Declare a resource client struct wrapping an [`ApiContext`].
macro_rules! resource_client {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name {
            ctx: $crate::context::ApiContext,
        }

        impl $name {
            pub fn new(ctx: $crate::context::ApiContext) -> Self {
                Self { ctx }
            }

            pub fn set_bearer_token(&self, token: $crate::BearerToken) {
                $crate::context::ResourceClient::set_bearer_token(self, token);
            }

            pub fn bearer_token(&self) -> Option<$crate::BearerToken> {
                $crate::context::ResourceClient::bearer_token(self)
            }
        }

        impl $crate::context::ResourceClient for $name {
            fn from_context(ctx: $crate::context::ApiContext) -> Self {
                Self::new(ctx)
            }

            fn context(&self) -> &$crate::context::ApiContext {
                &self.ctx
            }
        }
    };
}

pub(crate) use resource_client;
