//! The staged request-builder state machine.
//!
//! A chain starts at [`RequestBuilder`] with a table selected and no
//! operation chosen. Choosing an operation moves it into a
//! [`QueryRequestBuilder`] parameterized by a zero-sized stage marker that
//! decides which capabilities the chain exposes from there:
//!
//! - [`Query`] - terminal execution only
//! - [`Filter`] - adds the filter surface (`filter`, `where_`, `eq`, ...)
//! - [`Select`] - filters plus ordering, pagination, and single-row mode
//!
//! Transitions are one-directional and every call threads the same owned
//! [`RequestState`] forward; execution consumes the builder, so a chain can
//! never issue more than one request.

use std::fmt::Display;
use std::marker::PhantomData;

use http::Method;
use serde_json::Value;
use tracing::debug;

use pgrest_http::{
    BlockingTransport, HttpRequest, TableResponse, Transport, decode_table_response,
};
use pgrest_query::{
    Condition, FilterRange, sanitize_list, sanitize_param, sanitize_pattern_param,
};

use crate::client::Client;
use crate::error::ClientResult;
use crate::state::RequestState;
use crate::types::{CountMethod, InsertOptions, OrderOptions, write_prefer_header};

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Query {}
    impl Sealed for super::Filter {}
    impl Sealed for super::Select {}
}

/// Stage marker: operation chosen, terminal execution only.
#[derive(Debug)]
pub struct Query;

/// Stage marker: filterable operation (insert, update, delete, rpc).
#[derive(Debug)]
pub struct Filter;

/// Stage marker: select operation - filterable plus ordering, pagination,
/// and single-row mode.
#[derive(Debug)]
pub struct Select;

/// Stages on which filters may be applied.
pub trait Filterable: sealed::Sealed {}

impl Filterable for Filter {}
impl Filterable for Select {}

/// Entry stage of a chain: a table is selected but no operation chosen yet.
#[derive(Debug)]
pub struct RequestBuilder<'a, T> {
    client: &'a Client<T>,
    state: RequestState,
}

impl<'a, T> RequestBuilder<'a, T> {
    pub(crate) fn new(client: &'a Client<T>, state: RequestState) -> Self {
        Self { client, state }
    }

    /// Run a SELECT query to fetch data.
    ///
    /// With columns given, issues GET with a `select` parameter listing
    /// them (pass `"*"` for all columns). With no columns, issues HEAD - a
    /// count-only request with no body. `count` asks the server to compute
    /// the total row count alongside the result.
    #[must_use]
    pub fn select<I, S>(mut self, columns: I, count: Option<CountMethod>) -> SelectRequestBuilder<'a, T>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        let method = if columns.is_empty() {
            Method::HEAD
        } else {
            self.state.set_param("select", columns.join(","));
            Method::GET
        };
        if let Some(count) = count {
            self.state.insert_header("Prefer", format!("count={count}"));
        }
        QueryRequestBuilder::start(self.client, self.state, method, None)
    }

    /// Run an INSERT to add one row, given as a JSON object keyed by column
    /// names.
    #[must_use]
    pub fn insert(mut self, row: Value, options: InsertOptions) -> FilterRequestBuilder<'a, T> {
        self.state
            .insert_header("Prefer", write_prefer_header(options.count, options.upsert));
        QueryRequestBuilder::start(self.client, self.state, Method::POST, Some(row))
    }

    /// Insert multiple rows into the table at once.
    #[must_use]
    pub fn insert_many(
        mut self,
        rows: Vec<Value>,
        options: InsertOptions,
    ) -> FilterRequestBuilder<'a, T> {
        self.state
            .insert_header("Prefer", write_prefer_header(options.count, options.upsert));
        QueryRequestBuilder::start(
            self.client,
            self.state,
            Method::POST,
            Some(Value::Array(rows)),
        )
    }

    /// Run an UPDATE with the new row data, keyed by column names.
    #[must_use]
    pub fn update(mut self, data: Value, count: Option<CountMethod>) -> FilterRequestBuilder<'a, T> {
        self.state
            .insert_header("Prefer", write_prefer_header(count, false));
        QueryRequestBuilder::start(self.client, self.state, Method::PATCH, Some(data))
    }

    /// Run a DELETE to remove rows from the table.
    #[must_use]
    pub fn delete(mut self, count: Option<CountMethod>) -> FilterRequestBuilder<'a, T> {
        self.state
            .insert_header("Prefer", write_prefer_header(count, false));
        QueryRequestBuilder::start(self.client, self.state, Method::DELETE, None)
    }
}

/// A chain with its operation chosen, accumulating parameters and headers
/// toward a single execution.
#[derive(Debug)]
pub struct QueryRequestBuilder<'a, T, S = Query> {
    client: &'a Client<T>,
    state: RequestState,
    method: Method,
    body: Option<Value>,
    negate_next: bool,
    _stage: PhantomData<S>,
}

/// A filterable chain (insert, update, delete, rpc).
pub type FilterRequestBuilder<'a, T> = QueryRequestBuilder<'a, T, Filter>;

/// A select chain: filterable plus ordering, pagination, and single-row
/// mode.
pub type SelectRequestBuilder<'a, T> = QueryRequestBuilder<'a, T, Select>;

impl<'a, T, S> QueryRequestBuilder<'a, T, S> {
    pub(crate) fn start(
        client: &'a Client<T>,
        state: RequestState,
        method: Method,
        body: Option<Value>,
    ) -> Self {
        Self {
            client,
            state,
            method,
            body,
            negate_next: false,
            _stage: PhantomData,
        }
    }

    fn into_request(self) -> HttpRequest {
        let (path, query, headers) = self.state.into_parts();
        HttpRequest {
            method: self.method,
            path,
            query,
            headers,
            body: self.body,
        }
    }

    /// Execute the accumulated query through a non-blocking transport.
    ///
    /// Consumes the builder: exactly one request is issued per chain.
    /// Returns the decoded rows and, when a count was requested, the total
    /// row count from the `Content-Range` header.
    pub async fn execute(self) -> ClientResult<TableResponse>
    where
        T: Transport,
    {
        let client = self.client;
        let prefer = self.state.header("Prefer").map(ToOwned::to_owned);
        let request = self.into_request();
        debug!(method = %request.method, path = %request.path, params = request.query.len(), "executing table request");
        let response = client.transport().send(client.base_url(), request).await?;
        Ok(decode_table_response(&response, prefer.as_deref())?)
    }

    /// Execute the accumulated query through a blocking transport.
    pub fn execute_blocking(self) -> ClientResult<TableResponse>
    where
        T: BlockingTransport,
    {
        let client = self.client;
        let prefer = self.state.header("Prefer").map(ToOwned::to_owned);
        let request = self.into_request();
        debug!(method = %request.method, path = %request.path, params = request.query.len(), "executing table request");
        let response = client.transport().send(client.base_url(), request)?;
        Ok(decode_table_response(&response, prefer.as_deref())?)
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> &RequestState {
        &self.state
    }

    #[cfg(test)]
    pub(crate) fn method(&self) -> &Method {
        &self.method
    }
}

impl<'a, T, S: Filterable> QueryRequestBuilder<'a, T, S> {
    /// Negate the next filter that is applied.
    ///
    /// One-shot: consumed by the very next filter call, which prefixes its
    /// operator with `not.`.
    #[must_use]
    pub fn not_(mut self) -> Self {
        self.negate_next = true;
        self
    }

    /// Append one filter pair, honoring and resetting the negation flag.
    /// `criteria` must already be rendered (sanitized exactly once by the
    /// caller).
    fn push_filter(mut self, column: &str, operator: &str, criteria: String) -> Self {
        let operator = if self.negate_next {
            self.negate_next = false;
            format!("not.{operator}")
        } else {
            operator.to_owned()
        };
        self.state
            .append_param(sanitize_param(column), format!("{operator}.{criteria}"));
        self
    }

    /// Apply a raw filter, equivalent to the WHERE clause in SQL.
    ///
    /// Appends `column=operator.criteria`; filters accumulate, so multiple
    /// filters on the same column coexist. The named operator methods are
    /// sugar over this with their criteria pre-rendered.
    #[must_use]
    pub fn filter(self, column: &str, operator: &str, criteria: &str) -> Self {
        self.push_filter(column, operator, sanitize_param(criteria))
    }

    /// Apply a [`Condition`] tree built from [`Column`](pgrest_query::Column)
    /// expressions.
    ///
    /// Group-operator values are wrapped in parentheses, producing
    /// `and=(...)` / `or=(...)` query pairs.
    #[must_use]
    pub fn where_(mut self, condition: &Condition) -> Self {
        for (key, value) in condition.flatten_params() {
            let value = if key == "and" || key == "or" {
                format!("({value})")
            } else {
                value
            };
            self.state.append_param(key, value);
        }
        self
    }

    /// Operator: equals.
    #[must_use]
    pub fn eq(self, column: &str, value: impl Display) -> Self {
        self.push_filter(column, "eq", sanitize_param(value))
    }

    /// Operator: not equal.
    #[must_use]
    pub fn neq(self, column: &str, value: impl Display) -> Self {
        self.push_filter(column, "neq", sanitize_param(value))
    }

    /// Operator: greater than.
    #[must_use]
    pub fn gt(self, column: &str, value: impl Display) -> Self {
        self.push_filter(column, "gt", sanitize_param(value))
    }

    /// Operator: greater than or equal.
    #[must_use]
    pub fn gte(self, column: &str, value: impl Display) -> Self {
        self.push_filter(column, "gte", sanitize_param(value))
    }

    /// Operator: less than.
    #[must_use]
    pub fn lt(self, column: &str, value: impl Display) -> Self {
        self.push_filter(column, "lt", sanitize_param(value))
    }

    /// Operator: less than or equal.
    #[must_use]
    pub fn lte(self, column: &str, value: impl Display) -> Self {
        self.push_filter(column, "lte", sanitize_param(value))
    }

    /// Operator: `is`, for exact null/true/false checks.
    #[must_use]
    pub fn is_(self, column: &str, value: Option<bool>) -> Self {
        let rendered = match value {
            Some(true) => "true",
            Some(false) => "false",
            None => "null",
        };
        self.push_filter(column, "is", rendered.to_owned())
    }

    /// Operator: SQL `LIKE` pattern match (`%` wildcards become `*`).
    #[must_use]
    pub fn like(self, column: &str, pattern: &str) -> Self {
        self.push_filter(column, "like", sanitize_pattern_param(pattern))
    }

    /// Operator: case-insensitive `LIKE`.
    #[must_use]
    pub fn ilike(self, column: &str, pattern: &str) -> Self {
        self.push_filter(column, "ilike", sanitize_pattern_param(pattern))
    }

    /// Operator: full-text search using `to_tsquery`.
    #[must_use]
    pub fn fts(self, column: &str, query: &str) -> Self {
        self.push_filter(column, "fts", sanitize_param(query))
    }

    /// Operator: full-text search using `plainto_tsquery`.
    #[must_use]
    pub fn plfts(self, column: &str, query: &str) -> Self {
        self.push_filter(column, "plfts", sanitize_param(query))
    }

    /// Operator: full-text search using `phraseto_tsquery`.
    #[must_use]
    pub fn phfts(self, column: &str, query: &str) -> Self {
        self.push_filter(column, "phfts", sanitize_param(query))
    }

    /// Operator: full-text search using `websearch_to_tsquery`.
    #[must_use]
    pub fn wfts(self, column: &str, query: &str) -> Self {
        self.push_filter(column, "wfts", sanitize_param(query))
    }

    /// Operator: `in` - the column value is one of the given values.
    #[must_use]
    pub fn in_<I, V>(self, column: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Display,
    {
        let list = sanitize_list(values);
        self.push_filter(column, "in", format!("({list})"))
    }

    /// Operator: contains.
    #[must_use]
    pub fn cs<I, V>(self, column: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Display,
    {
        let list = sanitize_list(values);
        self.push_filter(column, "cs", format!("({list})"))
    }

    /// Operator: contained in.
    #[must_use]
    pub fn cd<I, V>(self, column: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Display,
    {
        let list = sanitize_list(values);
        self.push_filter(column, "cd", format!("({list})"))
    }

    /// Operator: overlap (have points in common).
    #[must_use]
    pub fn ov<I, V>(self, column: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Display,
    {
        let list = sanitize_list(values);
        self.push_filter(column, "ov", format!("({list})"))
    }

    /// Operator: strictly left of the given range.
    #[must_use]
    pub fn sl(self, column: &str, range: impl Into<FilterRange>) -> Self {
        let range = range.into();
        self.push_filter(column, "sl", range.to_string())
    }

    /// Operator: strictly right of the given range.
    #[must_use]
    pub fn sr(self, column: &str, range: impl Into<FilterRange>) -> Self {
        let range = range.into();
        self.push_filter(column, "sr", range.to_string())
    }

    /// Operator: does not extend to the left of the given range.
    #[must_use]
    pub fn nxl(self, column: &str, range: impl Into<FilterRange>) -> Self {
        let range = range.into();
        self.push_filter(column, "nxl", range.to_string())
    }

    /// Operator: does not extend to the right of the given range.
    #[must_use]
    pub fn nxr(self, column: &str, range: impl Into<FilterRange>) -> Self {
        let range = range.into();
        self.push_filter(column, "nxr", range.to_string())
    }

    /// Operator: is adjacent to the given range.
    #[must_use]
    pub fn adj(self, column: &str, range: impl Into<FilterRange>) -> Self {
        let range = range.into();
        self.push_filter(column, "adj", range.to_string())
    }
}

impl<T> SelectRequestBuilder<'_, T> {
    /// Sort the response, equivalent to SQL `ORDER BY`.
    ///
    /// Sets the single `order` parameter to
    /// `<column>[.desc][.nullsfirst]`; calling again replaces the previous
    /// ordering.
    #[must_use]
    pub fn order(mut self, column: &str, options: OrderOptions) -> Self {
        let mut value = column.to_owned();
        if options.desc {
            value.push_str(".desc");
        }
        if options.nullsfirst {
            value.push_str(".nullsfirst");
        }
        self.state.set_param("order", value);
        self
    }

    /// Limit the number of rows returned, starting at offset `start`.
    ///
    /// Pagination travels in headers: `Range-Unit: items` and
    /// `Range: <start>-<start+size-1>`.
    #[must_use]
    pub fn limit(mut self, size: u64, start: u64) -> Self {
        self.state.insert_header("Range-Unit", "items");
        self.state
            .insert_header("Range", format!("{start}-{}", (start + size).saturating_sub(1)));
        self
    }

    /// Retrieve only rows in `start..end` (end exclusive).
    #[must_use]
    pub fn range(mut self, start: u64, end: u64) -> Self {
        self.state.insert_header("Range-Unit", "items");
        self.state
            .insert_header("Range", format!("{start}-{}", end.saturating_sub(1)));
        self
    }

    /// Ask for exactly one row as a bare JSON object.
    ///
    /// Sets `Accept: application/vnd.pgrst.object+json`; the server errors
    /// if the query matches anything other than one row.
    #[must_use]
    pub fn single(mut self) -> Self {
        self.state
            .insert_header("Accept", "application/vnd.pgrst.object+json");
        self
    }
}
