//! Error types for query construction.

/// Errors raised while building filter expressions.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// A range operator received something other than two bounds.
    #[error("malformed range operator input: expected exactly two bounds, got {0}")]
    MalformedRange(usize),
}

/// Convenience result type for query construction.
pub type QueryResult<T> = Result<T, QueryError>;
