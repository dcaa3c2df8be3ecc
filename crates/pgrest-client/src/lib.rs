//! Client and staged request builder for PostgREST-style table APIs.
//!
//! A [`Client`] holds the API base URL, default headers (schema profile,
//! auth), and a transport. Each query starts with [`Client::from_`] (table
//! operations) or [`Client::rpc`] (stored-procedure calls) and moves through
//! a one-directional builder chain that accumulates query parameters and
//! headers before a single terminal execution:
//!
//! ```text
//! RequestBuilder -> FilterRequestBuilder -> SelectRequestBuilder
//!   (choose op)      (filters, negation)     (order, pagination, single)
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use pgrest_client::{Client, ClientConfig, CountMethod, OrderOptions};
//!
//! # async fn run() -> Result<(), pgrest_client::ClientError> {
//! let client = Client::new(ClientConfig::new("http://localhost:3000"));
//!
//! let (rows, count) = client
//!     .from_("countries")
//!     .select(["id", "name"], Some(CountMethod::Exact))
//!     .eq("status", "active")
//!     .order("name", OrderOptions::descending())
//!     .limit(10, 0)
//!     .execute()
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! Filters can also be expressed as a [`Column`]-based boolean tree and
//! applied with `where_`:
//!
//! ```rust,no_run
//! use pgrest_client::{Client, ClientConfig, Column};
//!
//! # async fn run(client: Client) -> Result<(), pgrest_client::ClientError> {
//! let cond = Column::new("name").eq("India") | Column::new("population").gt(100_000);
//! let (rows, _) = client.from_("countries").select(["*"], None).where_(&cond).execute().await?;
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod client;
pub mod config;
pub mod error;
pub mod state;
pub mod types;

pub use builder::{
    FilterRequestBuilder, QueryRequestBuilder, RequestBuilder, SelectRequestBuilder,
};
pub use client::{BlockingClient, Client};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use types::{CountMethod, InsertOptions, OrderOptions};

pub use pgrest_http::{
    BlockingReqwestTransport, BlockingTransport, ReqwestTransport, TableResponse, Transport,
};
pub use pgrest_query::{Column, Condition, FilterRange};
