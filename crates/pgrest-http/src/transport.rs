//! Transport capability traits and reqwest-backed implementations.
//!
//! A transport owns connection handling (pooling, TLS, timeouts) and nothing
//! else: it receives one finished [`HttpRequest`], issues exactly one HTTP
//! call, and returns the raw [`HttpResponse`]. The builder layer stays
//! transport-agnostic; which trait it executes through is decided by the
//! transport type the client was constructed with, never by runtime checks.

use async_trait::async_trait;
use tracing::debug;

use crate::error::TransportResult;
use crate::request::{HttpRequest, HttpResponse};

/// Non-blocking HTTP transport capability.
#[async_trait]
pub trait Transport {
    /// Dispatch one request against the given base URL.
    async fn send(&self, base_url: &str, request: HttpRequest) -> TransportResult<HttpResponse>;
}

/// Blocking HTTP transport capability.
pub trait BlockingTransport {
    /// Dispatch one request against the given base URL.
    fn send(&self, base_url: &str, request: HttpRequest) -> TransportResult<HttpResponse>;
}

/// Join a base URL and a request path.
fn build_url(base_url: &str, path: &str) -> String {
    format!("{}{path}", base_url.trim_end_matches('/'))
}

/// Async transport backed by [`reqwest::Client`].
///
/// Cheap to clone; the wrapped client shares its connection pool across
/// clones. Configure timeouts and TLS on the reqwest client before wrapping.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Wrap an existing reqwest client.
    #[must_use]
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, base_url: &str, request: HttpRequest) -> TransportResult<HttpResponse> {
        let url = build_url(base_url, &request.path);
        debug!(method = %request.method, %url, params = request.query.len(), "dispatching request");

        let mut builder = self
            .client
            .request(request.method, url)
            .query(&request.query);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?;
        debug!(status = %status, bytes = body.len(), "received response");

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

/// Blocking transport backed by [`reqwest::blocking::Client`].
#[derive(Debug, Clone, Default)]
pub struct BlockingReqwestTransport {
    client: reqwest::blocking::Client,
}

impl BlockingReqwestTransport {
    /// Wrap an existing blocking reqwest client.
    #[must_use]
    pub fn new(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }
}

impl BlockingTransport for BlockingReqwestTransport {
    fn send(&self, base_url: &str, request: HttpRequest) -> TransportResult<HttpResponse> {
        let url = build_url(base_url, &request.path);
        debug!(method = %request.method, %url, params = request.query.len(), "dispatching request");

        let mut builder = self
            .client
            .request(request.method, url)
            .query(&request.query);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send()?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes()?;
        debug!(status = %status, bytes = body.len(), "received response");

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
