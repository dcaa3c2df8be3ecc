//! Error types for the pgrest client.

use pgrest_http::TransportError;
use pgrest_query::QueryError;

/// Errors raised by client construction and query execution.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Neither a bearer token nor a username was supplied to `auth`.
    #[error("neither bearer token nor basic authentication scheme was provided")]
    AuthConfiguration,

    /// A filter expression was malformed at construction time.
    #[error(transparent)]
    Query(#[from] QueryError),

    /// The transport failed to dispatch the request or decode the response.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Convenience result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;
