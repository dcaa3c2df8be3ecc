//! The per-query request accumulator.
//!
//! One [`RequestState`] is created when a chain starts, owned exclusively by
//! that chain, mutated by every chained call, and consumed exactly once at
//! execution. It is never shared between independent queries, which is what
//! makes concurrent chains off one client safe.

/// Accumulated query parameters, headers, and target path for one request.
#[derive(Debug, Clone)]
pub struct RequestState {
    path: String,
    query: Vec<(String, String)>,
    headers: Vec<(String, String)>,
}

impl RequestState {
    /// Create state for the given path, seeded with a snapshot of the
    /// client's default headers.
    #[must_use]
    pub fn new(path: impl Into<String>, headers: Vec<(String, String)>) -> Self {
        Self {
            path: path.into(),
            query: Vec::new(),
            headers,
        }
    }

    /// The request path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Append a query pair. Duplicate keys are kept - the filter grammar
    /// allows repeated filter keys and repeated `and`/`or` groups.
    pub fn append_param(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.query.push((key.into(), value.into()));
    }

    /// Set a single-valued query parameter (`select`, `order`), replacing
    /// any previous value for the key.
    pub fn set_param(&mut self, key: &str, value: impl Into<String>) {
        self.query.retain(|(k, _)| k != key);
        self.query.push((key.to_owned(), value.into()));
    }

    /// Set a header, replacing any previous value case-insensitively.
    pub fn insert_header(&mut self, name: &str, value: impl Into<String>) {
        self.headers.retain(|(n, _)| !n.eq_ignore_ascii_case(name));
        self.headers.push((name.to_owned(), value.into()));
    }

    /// Look up a header value by name, case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Consume the state into its query pairs and headers.
    #[must_use]
    pub fn into_parts(self) -> (String, Vec<(String, String)>, Vec<(String, String)>) {
        (self.path, self.query, self.headers)
    }

    #[cfg(test)]
    pub(crate) fn query(&self) -> &[(String, String)] {
        &self.query
    }
}
