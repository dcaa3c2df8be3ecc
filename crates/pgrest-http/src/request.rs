//! Request and response envelope types.
//!
//! [`HttpRequest`] is what a builder chain produces: one method, a path
//! relative to the API root, a query-pair multimap (duplicate keys allowed -
//! the filter grammar relies on them), plain string headers, and an optional
//! JSON body. [`HttpResponse`] is the raw result a transport hands back.

use bytes::Bytes;
use http::{Method, StatusCode};

/// A single table-API request, ready for a transport to dispatch.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    /// HTTP method.
    pub method: Method,
    /// Path relative to the API base URL, e.g. `/countries` or `/rpc/add`.
    pub path: String,
    /// Query-string pairs in insertion order. Keys may repeat.
    pub query: Vec<(String, String)>,
    /// Request headers. Later entries with the same name replace earlier
    /// ones before dispatch.
    pub headers: Vec<(String, String)>,
    /// JSON body for write operations and RPC calls.
    pub body: Option<serde_json::Value>,
}

impl HttpRequest {
    /// Create an empty request for the given method and path.
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Look up a header value by name, case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// The raw response a transport hands back.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Response headers as received.
    pub headers: http::HeaderMap,
    /// Raw response body.
    pub body: Bytes,
}

impl HttpResponse {
    /// Look up a response header value as a string.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}
