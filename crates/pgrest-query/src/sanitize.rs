//! Reserved-character escaping for the wire grammar.
//!
//! The query-string dialect uses `,` `.` `:` `(` `)` as structural
//! delimiters. Every column name and value placed into the query string runs
//! through [`sanitize_param`] so user data never collides with the grammar.

use std::fmt::Display;

/// Characters with structural meaning in the wire grammar.
const RESERVED: [char; 5] = [',', '.', ':', '(', ')'];

/// The pre-escaped double-quote sequence used to wrap reserved values.
const QUOTE: &str = "%22";

/// Stringify a value and escape it for the wire grammar.
///
/// Values containing any reserved character are wrapped in a literal
/// `%22...%22` pair; everything else passes through unchanged. Callers must
/// sanitize each value exactly once at its insertion site - there is no
/// already-wrapped detection, because a genuine user value may itself start
/// and end with `%22`.
///
/// # Examples
///
/// ```
/// use pgrest_query::sanitize::sanitize_param;
///
/// assert_eq!(sanitize_param("plain"), "plain");
/// assert_eq!(sanitize_param("a,b"), "%22a,b%22");
/// assert_eq!(sanitize_param(42), "42");
/// ```
pub fn sanitize_param(value: impl Display) -> String {
    let value = value.to_string();
    if value.contains(|c: char| RESERVED.contains(&c)) {
        return format!("{QUOTE}{value}{QUOTE}");
    }
    value
}

/// Rewrite SQL `%` wildcards to the wire dialect's `*`, then escape.
///
/// PostgREST patterns use `*` where SQL `LIKE` uses `%`.
#[must_use]
pub fn sanitize_pattern_param(pattern: &str) -> String {
    sanitize_param(pattern.replace('%', "*"))
}

/// Sanitize each member of a list and join them with commas.
///
/// Used for the set-operator payloads (`in`, `cs`, `cd`, `ov`), which render
/// as `<op>.(v1,v2,...)`.
pub fn sanitize_list<I, V>(values: I) -> String
where
    I: IntoIterator<Item = V>,
    V: Display,
{
    values
        .into_iter()
        .map(sanitize_param)
        .collect::<Vec<_>>()
        .join(",")
}
