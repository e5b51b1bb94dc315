//! Main DynECT API client implementation.

use crate::api::SessionApi;
use crate::config::PollConfig;
use dynect_core::{ApiResponse, DynError, Result};
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::{Client as HttpClient, Method};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// The DynECT REST API base URL
pub const DEFAULT_BASE_URL: &str = "https://api2.dynect.net/REST/";

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Header carrying the session token
pub(crate) const AUTH_TOKEN_HEADER: &str = "Auth-Token";

/// Main DynECT API client
///
/// Every request goes through the job poller: callers only ever see
/// `success` responses or an error.
#[derive(Clone)]
pub struct DynClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: HttpClient,
    base_url: Url,
    poll: PollConfig,
}

impl DynClient {
    /// Create a new client against the production API using default settings
    pub fn new() -> Result<Self> {
        DynClientBuilder::new().build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder() -> DynClientBuilder {
        DynClientBuilder::new()
    }

    /// Access session (login) endpoints
    #[must_use]
    pub const fn session(&self) -> SessionApi<'_> {
        SessionApi::new(self)
    }

    /// Base URL every endpoint path is joined onto
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Polling policy applied to `incomplete` responses
    #[must_use]
    pub fn poll_config(&self) -> PollConfig {
        self.inner.poll
    }

    /// Perform a request and resolve it through the job poller
    pub(crate) async fn execute<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        token: Option<&str>,
    ) -> Result<ApiResponse> {
        let response = self.send(method, path, body, token).await?;
        self.resolve(response, token).await
    }

    /// Perform a single request and decode the response envelope
    ///
    /// HTTP status codes are not inspected: the API reports failures in the
    /// envelope, including on 4xx/5xx responses.
    pub(crate) async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        token: Option<&str>,
    ) -> Result<ApiResponse> {
        let url = self.build_url(path)?;
        debug!(method = %method, url = %url, "API request");

        let mut request = self
            .inner
            .http
            .request(method, url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(token) = token {
            request = request.header(AUTH_TOKEN_HEADER, token);
        }

        if let Some(body) = body {
            request = request.body(serde_json::to_vec(body)?);
        }

        let response = request
            .send()
            .await
            .map_err(|e| DynError::Http(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| DynError::Http(e.to_string()))?;

        let decoded: ApiResponse = serde_json::from_str(&body)?;
        debug!(http_status = status.as_u16(), api_status = %decoded.status, "API response");

        Ok(decoded)
    }

    /// Join an endpoint path onto the base URL
    fn build_url(&self, path: &str) -> Result<Url> {
        self.inner
            .base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| DynError::InvalidUrl(format!("{path}: {e}")))
    }
}

/// Builder for configuring a [`DynClient`]
pub struct DynClientBuilder {
    base_url: String,
    timeout: Duration,
    user_agent: String,
    poll: PollConfig,
}

impl Default for DynClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DynClientBuilder {
    /// Create a new builder with production defaults
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("znr/{}", env!("CARGO_PKG_VERSION")),
            poll: PollConfig::default(),
        }
    }

    /// Set the base URL (useful for testing)
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Set the job polling policy
    #[must_use]
    pub const fn poll(mut self, config: PollConfig) -> Self {
        self.poll = config;
        self
    }

    /// Build the client
    pub fn build(self) -> Result<DynClient> {
        // Url::join drops the last path segment unless the base ends in '/'
        let mut base = self.base_url;
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base).map_err(|e| DynError::InvalidUrl(format!("{base}: {e}")))?;

        let http = HttpClient::builder()
            .timeout(self.timeout)
            .user_agent(&self.user_agent)
            .gzip(true)
            .build()
            .map_err(|e| DynError::Http(e.to_string()))?;

        Ok(DynClient {
            inner: Arc::new(ClientInner {
                http,
                base_url,
                poll: self.poll,
            }),
        })
    }
}
