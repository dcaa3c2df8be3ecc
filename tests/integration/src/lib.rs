//! End-to-end tests for the pgrest client.
//!
//! Each test starts a local `httpmock` server, points a client with a real
//! reqwest transport at it, and asserts on the query string, headers, and
//! body the builder chain produced as well as on the decoded result.

use std::sync::Once;

use pgrest_client::{BlockingClient, Client, ClientConfig};

static INIT: Once = Once::new();

/// Initialize tracing (once).
fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// Create an async client pointing at the given mock server URL.
#[must_use]
pub fn async_client(base_url: &str) -> Client {
    init_tracing();
    Client::new(ClientConfig::new(base_url))
}

/// Create a blocking client pointing at the given mock server URL.
#[must_use]
pub fn blocking_client(base_url: &str) -> BlockingClient {
    init_tracing();
    BlockingClient::new_blocking(ClientConfig::new(base_url))
}

mod test_rpc;
mod test_select;
mod test_write;
