//! Core error types for MoonBoard RS
//!
//! Two classes of failure exist. Parse errors are raised when raw text cannot
//! be mapped onto a closed value set and are returned immediately. Query errors
//! are semantic violations recorded by the query builder; they are collected
//! rather than raised so a best-effort query can still be produced.

use std::fmt;

use thiserror::Error;

use crate::config::ConfigError;

/// Failure to map user-facing text onto one of the closed value sets
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("'{0}' is not a valid Order")]
    Order(String),

    #[error("'{0}' is not a valid Configuration")]
    Configuration(String),

    #[error("'{0}' is not a valid HoldSet")]
    HoldSet(String),

    #[error("'{0}' is not a valid Filter")]
    Filter(String),

    #[error("'{0}' is not a valid Grade")]
    Grade(String),
}

impl ParseError {
    /// The rejected input
    pub fn input(&self) -> &str {
        match self {
            Self::Order(s)
            | Self::Configuration(s)
            | Self::HoldSet(s)
            | Self::Filter(s)
            | Self::Grade(s) => s,
        }
    }
}

/// A validation problem recorded while accumulating query constraints
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("can only sort by one parameter, defaulting to the last provided")]
    DuplicateSort,

    #[error("page number cannot be below 1")]
    PageBelowOne { page: i64 },

    #[error("page size must be between 1 and 100")]
    PageSizeOutOfRange { page_size: i64 },

    #[error("min grade cannot be higher than max grade")]
    GradeRangeInverted { min: String, max: String },
}

impl QueryError {
    /// Stable machine-readable code
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateSort => "duplicate_sort",
            Self::PageBelowOne { .. } => "page_below_one",
            Self::PageSizeOutOfRange { .. } => "page_size_out_of_range",
            Self::GradeRangeInverted { .. } => "grade_range_inverted",
        }
    }
}

/// Ordered collection of query errors, in the order they were recorded
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct QueryErrors {
    pub errors: Vec<QueryError>,
}

impl QueryErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: QueryError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn first(&self) -> Option<&QueryError> {
        self.errors.first()
    }

    pub fn full_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

impl fmt::Display for QueryErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_messages().join("; "))
    }
}

impl std::error::Error for QueryErrors {}

impl From<Vec<QueryError>> for QueryErrors {
    fn from(errors: Vec<QueryError>) -> Self {
        Self { errors }
    }
}

/// Umbrella error for operations that sit above the builder
#[derive(Error, Debug)]
pub enum MbError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Invalid query: {0}")]
    Query(#[from] QueryErrors),

    #[error("Invalid {field}: '{value}' is not a number")]
    InvalidNumber { field: &'static str, value: String },

    #[error("Invalid {field}: '{value}', should be 'true' or 'false'")]
    InvalidFlag { field: &'static str, value: String },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Malformed response: {0}")]
    Json(#[from] serde_json::Error),
}

impl MbError {
    pub fn error_code(&self) -> &'static str {
        match self {
            MbError::Parse(_) => "parse_error",
            MbError::Query(_) => "invalid_query",
            MbError::InvalidNumber { .. } => "invalid_number",
            MbError::InvalidFlag { .. } => "invalid_flag",
            MbError::Config(_) => "configuration_error",
            MbError::Json(_) => "malformed_response",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_message() {
        let err = ParseError::Grade("9Z".into());
        assert_eq!(err.to_string(), "'9Z' is not a valid Grade");
        assert_eq!(err.input(), "9Z");
    }

    #[test]
    fn test_query_error_messages() {
        assert_eq!(
            QueryError::DuplicateSort.to_string(),
            "can only sort by one parameter, defaulting to the last provided"
        );
        assert_eq!(
            QueryError::PageBelowOne { page: 0 }.to_string(),
            "page number cannot be below 1"
        );
        assert_eq!(
            QueryError::PageSizeOutOfRange { page_size: 150 }.to_string(),
            "page size must be between 1 and 100"
        );
    }

    #[test]
    fn test_query_errors_display_joins_in_order() {
        let mut errors = QueryErrors::new();
        assert!(errors.is_empty());

        errors.push(QueryError::DuplicateSort);
        errors.push(QueryError::PageBelowOne { page: -3 });

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.first(), Some(&QueryError::DuplicateSort));
        assert_eq!(
            errors.to_string(),
            "can only sort by one parameter, defaulting to the last provided; page number cannot be below 1"
        );
    }

    #[test]
    fn test_mb_error_codes() {
        let err: MbError = ParseError::Order("x".into()).into();
        assert_eq!(err.error_code(), "parse_error");
        assert_eq!(err.to_string(), "'x' is not a valid Order");

        let err = MbError::InvalidNumber {
            field: "page",
            value: "two".into(),
        };
        assert_eq!(err.to_string(), "Invalid page: 'two' is not a number");
    }
}
