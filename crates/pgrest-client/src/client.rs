//! The PostgREST client: base URL, default headers, and chain entry points.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use http::Method;
use serde_json::Value;

use pgrest_http::{BlockingReqwestTransport, ReqwestTransport};

use crate::builder::{FilterRequestBuilder, QueryRequestBuilder, RequestBuilder};
use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::state::RequestState;

/// A client for one PostgREST-style API.
///
/// Holds the base URL, the default headers every chain starts from (content
/// negotiation, schema profile, auth), and the transport. The client itself
/// is read-only once constructed: each chain snapshots the default headers
/// into its own [`RequestState`], so independent chains never contend.
#[derive(Debug, Clone)]
pub struct Client<T = ReqwestTransport> {
    transport: T,
    base_url: String,
    headers: Vec<(String, String)>,
}

/// A client executing through the blocking reqwest transport.
pub type BlockingClient = Client<BlockingReqwestTransport>;

impl Client {
    /// Create an async client for the configured base URL.
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        Self::with_transport(config, ReqwestTransport::default())
    }
}

impl BlockingClient {
    /// Create a blocking client for the configured base URL.
    #[must_use]
    pub fn new_blocking(config: ClientConfig) -> Self {
        Self::with_transport(config, BlockingReqwestTransport::default())
    }
}

impl<T> Client<T> {
    /// Create a client with a caller-supplied transport.
    ///
    /// The transport decides the execution model: a
    /// [`Transport`](pgrest_http::Transport) makes chains end in
    /// `execute()`, a [`BlockingTransport`](pgrest_http::BlockingTransport)
    /// in `execute_blocking()`.
    #[must_use]
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        let headers = vec![
            ("Accept".to_owned(), "application/json".to_owned()),
            ("Content-Type".to_owned(), "application/json".to_owned()),
            ("Accept-Profile".to_owned(), config.schema.clone()),
            ("Content-Profile".to_owned(), config.schema),
        ];
        Self {
            transport,
            base_url: config.base_url,
            headers,
        }
    }

    /// Switch to another database schema.
    ///
    /// Updates both the `Accept-Profile` and `Content-Profile` headers.
    #[must_use]
    pub fn schema(mut self, schema: &str) -> Self {
        self.set_default_header("Accept-Profile", schema);
        self.set_default_header("Content-Profile", schema);
        self
    }

    /// Authenticate with either a bearer token or basic credentials.
    ///
    /// The bearer token is preferred when both are supplied. Fails with
    /// [`ClientError::AuthConfiguration`] when neither a token nor a
    /// username is given.
    pub fn auth(
        mut self,
        token: Option<&str>,
        username: Option<&str>,
        password: &str,
    ) -> ClientResult<Self> {
        if let Some(token) = token {
            self.set_default_header("Authorization", format!("Bearer {token}"));
        } else if let Some(username) = username {
            let encoded = BASE64_STANDARD.encode(format!("{username}:{password}"));
            self.set_default_header("Authorization", format!("Basic {encoded}"));
        } else {
            return Err(ClientError::AuthConfiguration);
        }
        Ok(self)
    }

    /// Start a table operation.
    #[must_use]
    pub fn from_(&self, table: &str) -> RequestBuilder<'_, T> {
        RequestBuilder::new(
            self,
            RequestState::new(format!("/{table}"), self.headers.clone()),
        )
    }

    /// Start a stored-procedure call.
    ///
    /// Issues POST to `/rpc/<function>` with `params` as the JSON body; the
    /// returned builder accepts filters on the function's result set.
    #[must_use]
    pub fn rpc(&self, function: &str, params: Value) -> FilterRequestBuilder<'_, T> {
        let state = RequestState::new(format!("/rpc/{function}"), self.headers.clone());
        QueryRequestBuilder::start(self, state, Method::POST, Some(params))
    }

    /// The configured API base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn transport(&self) -> &T {
        &self.transport
    }

    fn set_default_header(&mut self, name: &str, value: impl Into<String>) {
        self.headers.retain(|(n, _)| !n.eq_ignore_ascii_case(name));
        self.headers.push((name.to_owned(), value.into()));
    }

    #[cfg(test)]
    pub(crate) fn default_headers(&self) -> &[(String, String)] {
        &self.headers
    }
}
