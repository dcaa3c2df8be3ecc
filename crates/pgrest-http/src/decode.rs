//! Decoding table responses: rows plus the optional total count.
//!
//! The count side of the contract is two-phase: the caller must have asked
//! for a count via the outgoing `Prefer: count=<method>` directive, and the
//! server must have answered with a `Content-Range: <range>/<total>` header.
//! Anything missing or malformed on that path degrades to `None` - the count
//! is a secondary signal and never fails a successful request.

use serde_json::Value;

use crate::error::TransportResult;
use crate::request::HttpResponse;

/// A decoded table response: the rows (array, or a single object in
/// single-row mode) and the total count when one was requested and returned.
pub type TableResponse = (Value, Option<u64>);

/// Whether a `Prefer` header value asks the server for a row count.
///
/// Scans the comma-separated directives for `count=exact`, `count=planned`,
/// or `count=estimated`.
#[must_use]
pub fn count_method_requested(prefer: &str) -> bool {
    prefer
        .split(',')
        .map(str::trim)
        .any(|directive| {
            matches!(
                directive.strip_prefix("count="),
                Some("exact" | "planned" | "estimated")
            )
        })
}

/// Extract the total from a `Content-Range: <range>/<total>` header.
fn content_range_total(response: &HttpResponse) -> Option<u64> {
    let value = response.header("content-range")?;
    let mut segments = value.split('/');
    let _range = segments.next()?;
    segments.next()?.trim().parse().ok()
}

/// Decode an HTTP response into the `(rows, count)` pair.
///
/// `prefer` is the value of the `Prefer` header that went out with the
/// request; the count is only extracted when it contained a count directive.
/// An empty body (HEAD / count-only requests) decodes to `Value::Null`.
///
/// # Errors
///
/// Returns a decode error when a non-empty body is not valid JSON. Count
/// extraction never errors.
pub fn decode_table_response(
    response: &HttpResponse,
    prefer: Option<&str>,
) -> TransportResult<TableResponse> {
    let rows = if response.body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&response.body)?
    };

    let count = prefer
        .filter(|p| count_method_requested(p))
        .and_then(|_| content_range_total(response));

    Ok((rows, count))
}
