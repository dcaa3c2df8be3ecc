//! The [`Column`] operator factory.
//!
//! A `Column` names a table column and exposes one method per PostgREST
//! operator. Each method renders its criterion immediately (sanitizing the
//! value) and returns a single-entry [`Condition`], so columns themselves
//! stay stateless and reusable.

use std::fmt::Display;

use crate::condition::Condition;
use crate::range::FilterRange;
use crate::sanitize::{sanitize_list, sanitize_param, sanitize_pattern_param};

/// A table column to filter on.
///
/// ```rust
/// use pgrest_query::Column;
///
/// let active = Column::new("status").eq("active");
/// assert_eq!(active.flatten_params(), vec![("status".to_owned(), "eq.active".to_owned())]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    name: String,
}

impl Column {
    /// Create a column reference by name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The column name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Render a scalar operator criterion against this column.
    fn scalar(&self, op: &str, value: impl Display) -> Condition {
        Condition::leaf(&self.name, format!("{op}.{}", sanitize_param(value)))
    }

    /// Render a set operator criterion (`<op>.(v1,v2,...)`).
    fn set<I, V>(&self, op: &str, values: I) -> Condition
    where
        I: IntoIterator<Item = V>,
        V: Display,
    {
        Condition::leaf(&self.name, format!("{op}.({})", sanitize_list(values)))
    }

    /// Render a range operator criterion (`<op>.(low,high)`).
    fn ranged(&self, op: &str, range: impl Into<FilterRange>) -> Condition {
        Condition::leaf(&self.name, format!("{op}.{}", range.into()))
    }

    /// Operator: equals.
    #[must_use]
    pub fn eq(&self, value: impl Display) -> Condition {
        self.scalar("eq", value)
    }

    /// Operator: not equal.
    #[must_use]
    pub fn neq(&self, value: impl Display) -> Condition {
        self.scalar("neq", value)
    }

    /// Operator: greater than.
    #[must_use]
    pub fn gt(&self, value: impl Display) -> Condition {
        self.scalar("gt", value)
    }

    /// Operator: greater than or equal.
    #[must_use]
    pub fn gte(&self, value: impl Display) -> Condition {
        self.scalar("gte", value)
    }

    /// Operator: less than.
    #[must_use]
    pub fn lt(&self, value: impl Display) -> Condition {
        self.scalar("lt", value)
    }

    /// Operator: less than or equal.
    #[must_use]
    pub fn lte(&self, value: impl Display) -> Condition {
        self.scalar("lte", value)
    }

    /// Operator: `is`, for exact null/true/false checks.
    ///
    /// `None` renders as `is.null`.
    #[must_use]
    pub fn is_(&self, value: Option<bool>) -> Condition {
        let rendered = match value {
            Some(true) => "true",
            Some(false) => "false",
            None => "null",
        };
        self.scalar("is", rendered)
    }

    /// Operator: SQL `LIKE` pattern match (`%` wildcards become `*`).
    #[must_use]
    pub fn like(&self, pattern: &str) -> Condition {
        Condition::leaf(&self.name, format!("like.{}", sanitize_pattern_param(pattern)))
    }

    /// Operator: case-insensitive `LIKE`.
    #[must_use]
    pub fn ilike(&self, pattern: &str) -> Condition {
        Condition::leaf(&self.name, format!("ilike.{}", sanitize_pattern_param(pattern)))
    }

    /// Operator: full-text search using `to_tsquery`.
    #[must_use]
    pub fn fts(&self, query: &str) -> Condition {
        self.scalar("fts", query)
    }

    /// Operator: full-text search using `plainto_tsquery`.
    #[must_use]
    pub fn plfts(&self, query: &str) -> Condition {
        self.scalar("plfts", query)
    }

    /// Operator: full-text search using `phraseto_tsquery`.
    #[must_use]
    pub fn phfts(&self, query: &str) -> Condition {
        self.scalar("phfts", query)
    }

    /// Operator: full-text search using `websearch_to_tsquery`.
    #[must_use]
    pub fn wfts(&self, query: &str) -> Condition {
        self.scalar("wfts", query)
    }

    /// Operator: `in` - the column value is one of the given values.
    #[must_use]
    pub fn in_<I, V>(&self, values: I) -> Condition
    where
        I: IntoIterator<Item = V>,
        V: Display,
    {
        self.set("in", values)
    }

    /// Operator: contains.
    #[must_use]
    pub fn cs<I, V>(&self, values: I) -> Condition
    where
        I: IntoIterator<Item = V>,
        V: Display,
    {
        self.set("cs", values)
    }

    /// Operator: contained in.
    #[must_use]
    pub fn cd<I, V>(&self, values: I) -> Condition
    where
        I: IntoIterator<Item = V>,
        V: Display,
    {
        self.set("cd", values)
    }

    /// Operator: overlap (have points in common).
    #[must_use]
    pub fn ov<I, V>(&self, values: I) -> Condition
    where
        I: IntoIterator<Item = V>,
        V: Display,
    {
        self.set("ov", values)
    }

    /// Operator: strictly left of the given range.
    #[must_use]
    pub fn sl(&self, range: impl Into<FilterRange>) -> Condition {
        self.ranged("sl", range)
    }

    /// Operator: strictly right of the given range.
    #[must_use]
    pub fn sr(&self, range: impl Into<FilterRange>) -> Condition {
        self.ranged("sr", range)
    }

    /// Operator: does not extend to the left of the given range.
    #[must_use]
    pub fn nxl(&self, range: impl Into<FilterRange>) -> Condition {
        self.ranged("nxl", range)
    }

    /// Operator: does not extend to the right of the given range.
    #[must_use]
    pub fn nxr(&self, range: impl Into<FilterRange>) -> Condition {
        self.ranged("nxr", range)
    }

    /// Operator: is adjacent to the given range.
    #[must_use]
    pub fn adj(&self, range: impl Into<FilterRange>) -> Condition {
        self.ranged("adj", range)
    }
}
