//! The recursive boolean filter tree and its wire serialization.
//!
//! A [`Condition`] is a node in a filter tree. Its payload is an ordered
//! multimap whose keys are either column names (leaves, holding an
//! operator-prefixed criterion such as `eq.5`) or the group operators `and` /
//! `or` (internal nodes, holding the merged children of both operands).
//!
//! Conditions are immutable: combining two with [`Condition::and`] /
//! [`Condition::or`] (or the `&` / `|` operators) produces a new single-entry
//! condition and never mutates the operands. Repeated keys are preserved, so
//! two constraints on the same column inside one group both survive the
//! merge.

use std::fmt;
use std::ops::{BitAnd, BitOr};

/// A node payload: either a rendered leaf criterion or a nested group.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Node {
    /// An operator-prefixed criterion string, e.g. `eq.5`.
    Leaf(String),
    /// The merged entries of a nested `and`/`or` group.
    Group(Vec<(String, Node)>),
}

/// A boolean filter expression over table columns.
///
/// Instances are produced by the operator methods on
/// [`Column`](crate::Column) and combined with `&` / `|`:
///
/// ```rust
/// use pgrest_query::Column;
///
/// let cond = Column::new("name").eq("India") | Column::new("population").gt(100_000);
/// assert_eq!(
///     cond.flatten_params(),
///     vec![("or".to_owned(), "name.eq.India,population.gt.100000".to_owned())],
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Condition {
    entries: Vec<(String, Node)>,
}

impl Condition {
    /// Create a leaf condition binding one column to a rendered criterion.
    pub(crate) fn leaf(column: impl Into<String>, criterion: String) -> Self {
        Self {
            entries: vec![(column.into(), Node::Leaf(criterion))],
        }
    }

    /// Combine two conditions under a group operator, preserving every entry
    /// of both operands in order.
    fn group(op: &str, left: Self, right: Self) -> Self {
        let mut children = left.entries;
        children.extend(right.entries);
        Self {
            entries: vec![(op.to_owned(), Node::Group(children))],
        }
    }

    /// Join this condition with another using logical AND.
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        Self::group("and", self, other)
    }

    /// Join this condition with another using logical OR.
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        Self::group("or", self, other)
    }

    /// Flatten this condition into query-string pairs.
    ///
    /// A group root yields one `(op, "<child>,<child>,...")` pair with the
    /// children serialized recursively (the caller adds the outer
    /// parentheses when building the query string); a leaf root yields its
    /// `(column, criterion)` pair directly. An empty condition yields no
    /// pairs.
    #[must_use]
    pub fn flatten_params(&self) -> Vec<(String, String)> {
        self.entries
            .iter()
            .map(|(key, node)| match node {
                Node::Group(children) => (key.clone(), stringify(children)),
                Node::Leaf(criterion) => (key.clone(), criterion.clone()),
            })
            .collect()
    }

    /// Whether this condition constrains anything at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Recursively serialize group entries into the wire grammar.
///
/// Leaves render as `key.value`, nested groups as `key(<children>)`, and
/// siblings join with commas.
fn stringify(entries: &[(String, Node)]) -> String {
    entries
        .iter()
        .map(|(key, node)| match node {
            Node::Group(children) => format!("{key}({})", stringify(children)),
            Node::Leaf(criterion) => format!("{key}.{criterion}"),
        })
        .collect::<Vec<_>>()
        .join(",")
}

impl BitAnd for Condition {
    type Output = Condition;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.and(rhs)
    }
}

impl BitOr for Condition {
    type Output = Condition;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.or(rhs)
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self
            .flatten_params()
            .into_iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "<Condition {rendered}>")
    }
}
