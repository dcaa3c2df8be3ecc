//! Request-shaping option types.

use std::fmt;

/// Server-side strategy for computing the total row count alongside a
/// result, requested via the `Prefer: count=<method>` directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CountMethod {
    /// Exact count (`count(*)` - accurate but slow on large tables).
    Exact,
    /// Planned count taken from the query planner.
    Planned,
    /// Estimated count (exact up to a threshold, planned above it).
    Estimated,
}

impl CountMethod {
    /// The wire token for this count method.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Planned => "planned",
            Self::Estimated => "estimated",
        }
    }
}

impl fmt::Display for CountMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options for insert operations.
#[derive(Debug, Clone, Copy, Default)]
pub struct InsertOptions {
    /// Count method to request alongside the representation.
    pub count: Option<CountMethod>,
    /// Run an upsert (`Prefer: resolution=merge-duplicates`).
    pub upsert: bool,
}

impl InsertOptions {
    /// Options for a plain insert requesting the given count method.
    #[must_use]
    pub fn counted(count: CountMethod) -> Self {
        Self {
            count: Some(count),
            upsert: false,
        }
    }

    /// Options for an upsert.
    #[must_use]
    pub fn upserting() -> Self {
        Self {
            count: None,
            upsert: true,
        }
    }
}

/// Options for result ordering.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderOptions {
    /// Sort in descending order.
    pub desc: bool,
    /// Sort nulls before non-null values.
    pub nullsfirst: bool,
}

impl OrderOptions {
    /// Descending order.
    #[must_use]
    pub fn descending() -> Self {
        Self {
            desc: true,
            nullsfirst: false,
        }
    }
}

/// Assemble a `Prefer` header value for a write operation.
///
/// The directive order is fixed: `return=representation`, then the optional
/// count, then the optional upsert resolution.
pub(crate) fn write_prefer_header(count: Option<CountMethod>, upsert: bool) -> String {
    let mut directives = vec!["return=representation".to_owned()];
    if let Some(method) = count {
        directives.push(format!("count={method}"));
    }
    if upsert {
        directives.push("resolution=merge-duplicates".to_owned());
    }
    directives.join(",")
}
