//! Transport error types.

/// Errors raised while dispatching a request or decoding its response.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The underlying HTTP client failed (connect, TLS, invalid URL or
    /// header, timeout configured on the client, ...). Opaque to this layer.
    #[error("http dispatch failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body was not valid JSON.
    #[error("failed to decode response body as JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Convenience result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;
