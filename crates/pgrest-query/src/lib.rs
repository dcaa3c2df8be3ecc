//! Filter-expression algebra for PostgREST-style table APIs.
//!
//! This crate builds boolean filter trees from per-column comparisons and
//! flattens them into the PostgREST query-string grammar: leaf constraints
//! render as `column=operator.value`, and `and`/`or` groups nest via
//! parentheses with siblings joined by commas.
//!
//! # Usage
//!
//! ```rust
//! use pgrest_query::Column;
//!
//! let cond = Column::new("status").eq("active") & Column::new("age").gt(21);
//! let params = cond.flatten_params();
//! assert_eq!(params, vec![("and".to_owned(), "status.eq.active,age.gt.21".to_owned())]);
//! ```
//!
//! # Modules
//!
//! - [`column`] - The [`Column`] operator factory
//! - [`condition`] - The [`Condition`] filter tree and its serialization
//! - [`range`] - Two-bound payloads for the range operators
//! - [`sanitize`] - Reserved-character escaping for values and column names
//! - [`error`] - Query construction error types

pub mod column;
pub mod condition;
pub mod error;
pub mod range;
pub mod sanitize;

pub use column::Column;
pub use condition::Condition;
pub use error::{QueryError, QueryResult};
pub use range::FilterRange;
pub use sanitize::{sanitize_list, sanitize_param, sanitize_pattern_param};
