//! Raw request criteria
//!
//! Converts loosely typed text (command-line flags, query strings, JSON
//! bodies) into a built [`Query`]. Unlike the builder, this boundary is
//! strict: the first unparseable value aborts, and any validation problem
//! recorded while building is returned as an error.

use std::str::FromStr;

use mb_core::error::{MbError, ParseError};
use mb_core::result::MbResult;
use serde::{Deserialize, Serialize};

use crate::board::{Configuration, HoldSet};
use crate::builder::QueryBuilder;
use crate::filters::Filter;
use crate::grades::Grade;
use crate::query::Query;
use crate::sorts::Order;

/// Every search criterion as optional text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RequestQuery {
    pub term: Option<String>,
    pub order: Option<String>,
    pub asc: Option<String>,
    /// Comma separated board angles
    pub configuration: Option<String>,
    /// Comma separated hold sets
    pub hold_set: Option<String>,
    /// Comma separated named filters
    pub filter: Option<String>,
    pub min_grade: Option<String>,
    pub max_grade: Option<String>,
    pub page: Option<String>,
    pub page_size: Option<String>,
}

/// Treat empty or whitespace-only text as absent
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Parse each comma separated item of `value`
fn parse_list<T>(value: &str) -> Result<Vec<T>, ParseError>
where
    T: FromStr<Err = ParseError>,
{
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| {
            tracing::debug!(item, "Split list value");
            item.parse()
        })
        .collect()
}

fn parse_number(field: &'static str, value: &str) -> MbResult<i64> {
    value.parse().map_err(|_| MbError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}

fn parse_flag(field: &'static str, value: &str) -> MbResult<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "t" => Ok(true),
        "false" | "0" | "f" => Ok(false),
        _ => Err(MbError::InvalidFlag {
            field,
            value: value.to_string(),
        }),
    }
}

impl RequestQuery {
    /// Apply every present criterion to a fresh builder
    pub fn to_builder(&self) -> MbResult<QueryBuilder> {
        let mut builder = QueryBuilder::new();

        if let Some(term) = present(&self.term) {
            builder.term(term);
        }

        if let Some(order) = present(&self.order) {
            let ascending = match present(&self.asc) {
                Some(asc) => parse_flag("ascending value", asc)?,
                None => false,
            };
            builder.sort(order.parse::<Order>()?, ascending);
        }

        if let Some(configurations) = present(&self.configuration) {
            for configuration in parse_list::<Configuration>(configurations)? {
                builder.configuration(configuration);
            }
        }

        if let Some(hold_sets) = present(&self.hold_set) {
            for hold_set in parse_list::<HoldSet>(hold_sets)? {
                builder.hold_set(hold_set);
            }
        }

        if let Some(filters) = present(&self.filter) {
            for filter in parse_list::<Filter>(filters)? {
                builder.filter(filter);
            }
        }

        if let Some(grade) = present(&self.min_grade) {
            builder.min_grade(grade.parse::<Grade>()?);
        }

        if let Some(grade) = present(&self.max_grade) {
            builder.max_grade(grade.parse::<Grade>()?);
        }

        if let Some(page) = present(&self.page) {
            builder.page(parse_number("page number", page)?);
        }

        if let Some(page_size) = present(&self.page_size) {
            builder.page_size(parse_number("page size", page_size)?);
        }

        Ok(builder)
    }

    /// Build the query, treating any recorded problem as fatal
    pub fn to_query(&self) -> MbResult<Query> {
        tracing::debug!(request = ?self, "Building query");
        self.to_builder()?.build().into()
    }
}
