//! Result type aliases and the best-effort build result
//!
//! A build never aborts on a validation problem. It always yields a value,
//! together with every problem recorded on the way, and the caller decides
//! whether any of them is fatal.

use crate::error::{MbError, QueryError, QueryErrors};

/// Standard Result type for MoonBoard RS operations
pub type MbResult<T> = Result<T, MbError>;

/// A best-effort value plus the ordered list of problems found producing it
#[derive(Debug, Clone, PartialEq)]
pub struct BuildResult<T> {
    value: T,
    errors: Vec<QueryError>,
}

impl<T> BuildResult<T> {
    /// A result with no recorded problems
    pub fn clean(value: T) -> Self {
        Self {
            value,
            errors: vec![],
        }
    }

    /// A result carrying the given problems
    pub fn with_errors(value: T, errors: Vec<QueryError>) -> Self {
        Self { value, errors }
    }

    /// The produced value, regardless of recorded problems
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Problems in the order they were recorded
    pub fn errors(&self) -> &[QueryError] {
        &self.errors
    }

    /// True when nothing was recorded
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Split into the value and its problems
    pub fn into_parts(self) -> (T, Vec<QueryError>) {
        (self.value, self.errors)
    }

    /// Discard recorded problems and keep the value
    pub fn into_value(self) -> T {
        self.value
    }

    /// Map the value, keeping the problems
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> BuildResult<U> {
        BuildResult {
            value: f(self.value),
            errors: self.errors,
        }
    }

    /// Treat any recorded problem as fatal
    pub fn into_result(self) -> Result<T, QueryErrors> {
        if self.errors.is_empty() {
            Ok(self.value)
        } else {
            Err(QueryErrors::from(self.errors))
        }
    }
}

impl<T> From<BuildResult<T>> for MbResult<T> {
    fn from(result: BuildResult<T>) -> Self {
        result.into_result().map_err(MbError::from)
    }
}
