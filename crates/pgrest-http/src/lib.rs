//! HTTP transport capability for the pgrest client.
//!
//! The request builder accumulates a method, path, query pairs, and headers,
//! then hands a finished [`HttpRequest`] to a transport for dispatch. Two
//! capability traits cover the sync/async duality: [`Transport`] for
//! non-blocking I/O and [`BlockingTransport`] for blocking I/O, each with a
//! reqwest-backed implementation. The transports carry no retry or timeout
//! policy of their own; configure that on the wrapped reqwest client.
//!
//! The crate also owns the response side of the table contract:
//! [`decode_table_response`] turns a raw [`HttpResponse`] into the
//! `(rows, count)` pair using the `Prefer` / `Content-Range` count protocol.
//!
//! # Modules
//!
//! - [`request`] - Request/response envelope types
//! - [`transport`] - Transport traits and reqwest implementations
//! - [`decode`] - Row and total-count decoding
//! - [`error`] - Transport error types

pub mod decode;
pub mod error;
pub mod request;
pub mod transport;

pub use decode::{TableResponse, count_method_requested, decode_table_response};
pub use error::{TransportError, TransportResult};
pub use request::{HttpRequest, HttpResponse};
pub use transport::{BlockingReqwestTransport, BlockingTransport, ReqwestTransport, Transport};
