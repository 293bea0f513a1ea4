//! # mb-queries
//!
//! Problem search criteria for the MoonBoard catalog.
//!
//! This crate turns typed criteria into the exact `sort` and `filter` strings
//! the catalog's search endpoint expects.
//!
//! ## Structure
//!
//! - `grades` - The ordered grade scale
//! - `sorts` - Sort orders and the sort token
//! - `board` - Board angles and hold sets
//! - `filters` - Named filters and the clause grammar
//! - `query` - The compiled Query and its form encoding
//! - `builder` - Fluent API for constructing queries
//! - `request` - Conversion from raw text criteria
//!
//! ## Example
//!
//! ```
//! use mb_queries::{Filter, Grade, QueryBuilder, RequestQuery};
//!
//! let result = QueryBuilder::new()
//!     .filter(Filter::Benchmarks)
//!     .min_grade(Grade::SixB)
//!     .page(0)
//!     .build();
//!
//! // The problem is reported, and the query is still usable
//! assert_eq!(result.errors().len(), 1);
//! assert_eq!(result.value().page(), 1);
//!
//! // Or start from text
//! let request = RequestQuery {
//!     order: Some("repeats".into()),
//!     hold_set: Some("a, b".into()),
//!     ..Default::default()
//! };
//! let query = request.to_query().unwrap();
//! assert_eq!(query.sort(), "RepeatsDesc-desc");
//! ```

pub mod grades;
pub mod sorts;
pub mod board;
pub mod filters;
pub mod query;
pub mod builder;
pub mod request;

// Re-exports for convenience
pub use grades::Grade;
pub use sorts::{Order, SortDirection, SortKey};
pub use board::{Configuration, HoldSet};
pub use filters::{Clause, Filter, FilterExpression, FilterOperator};
pub use query::Query;
pub use builder::{presets, QueryBuilder};
pub use request::RequestQuery;
