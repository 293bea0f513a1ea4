//! Query Builder
//!
//! Accumulates search criteria and compiles them into a [`Query`]. Validation
//! problems are recorded rather than raised: every call keeps the chain going,
//! and [`QueryBuilder::build`] always yields a query alongside whatever was
//! recorded.
//!
//! ```
//! use mb_queries::{Configuration, Grade, HoldSet, Order, QueryBuilder};
//!
//! let result = QueryBuilder::new()
//!     .configuration(Configuration::Forty)
//!     .hold_set(HoldSet::A)
//!     .sort(Order::Difficulty, true)
//!     .max_grade(Grade::SevenA)
//!     .build();
//!
//! assert!(result.is_clean());
//! assert_eq!(result.value().sort(), "GradeAsc-asc");
//! assert_eq!(
//!     result.value().filter(),
//!     "Configuration~eq~'40° MoonBoard'~and~Holdsets~eq~'hold set a'~and~MinGrade~eq~'6A+'~and~MaxGrade~eq~'7A'"
//! );
//! ```

use mb_core::error::QueryError;
use mb_core::pagination::Pagination;
use mb_core::result::BuildResult;

use crate::board::{Configuration, HoldSet};
use crate::filters::{attributes, Clause, Filter, FilterExpression};
use crate::grades::Grade;
use crate::query::Query;
use crate::sorts::{Order, SortKey};

/// Builder for constructing queries fluently
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    term: Option<String>,
    sort: Option<SortKey>,
    configurations: Vec<Configuration>,
    hold_sets: Vec<HoldSet>,
    filters: Vec<Filter>,
    /// Minimum applied when no explicit minimum is set
    grade_floor: Grade,
    min_grade: Option<Grade>,
    max_grade: Grade,
    pagination: Pagination,
    errors: Vec<QueryError>,
}

impl Default for QueryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryBuilder {
    /// Create a new query builder covering every grade, first page, 15 per page
    pub fn new() -> Self {
        Self {
            term: None,
            sort: None,
            configurations: vec![],
            hold_sets: vec![],
            filters: vec![],
            grade_floor: Grade::LOWEST,
            min_grade: None,
            max_grade: Grade::HIGHEST,
            pagination: Pagination::default(),
            errors: vec![],
        }
    }

    fn record(&mut self, error: QueryError) {
        tracing::debug!(code = error.error_code(), %error, "Query validation error");
        self.errors.push(error);
    }

    /// Match problem names containing `text`. Replaces any earlier term.
    pub fn term(&mut self, text: impl Into<String>) -> &mut Self {
        self.term = Some(text.into());
        self
    }

    /// Set the sort order.
    ///
    /// Only one sort is sent. A repeated call records
    /// [`QueryError::DuplicateSort`] and the last call wins.
    pub fn sort(&mut self, order: Order, ascending: bool) -> &mut Self {
        if self.sort.is_some() {
            self.record(QueryError::DuplicateSort);
        }
        self.sort = Some(SortKey::new(order, ascending));
        self
    }

    /// Restrict to a board angle; further calls widen the selection.
    ///
    /// Searching the 40 degree board alone raises the default minimum grade
    /// to its floor. Any second call drops the floor back to the lowest grade,
    /// even when it repeats the same angle. An explicit
    /// [`min_grade`](Self::min_grade) always wins.
    pub fn configuration(&mut self, configuration: Configuration) -> &mut Self {
        self.grade_floor = if self.configurations.is_empty() {
            configuration.grade_floor()
        } else {
            Grade::LOWEST
        };
        self.configurations.push(configuration);
        self
    }

    /// Restrict to a hold set; further calls widen the selection in call order.
    pub fn hold_set(&mut self, hold_set: HoldSet) -> &mut Self {
        self.hold_sets.push(hold_set);
        self
    }

    /// Apply a named filter; further calls add more, all of which must hold.
    pub fn filter(&mut self, filter: Filter) -> &mut Self {
        self.filters.push(filter);
        self
    }

    /// Set the easiest grade. Checked against the maximum at build time.
    pub fn min_grade(&mut self, grade: Grade) -> &mut Self {
        self.min_grade = Some(grade);
        self
    }

    /// Set the hardest grade. Checked against the minimum at build time.
    pub fn max_grade(&mut self, grade: Grade) -> &mut Self {
        self.max_grade = grade;
        self
    }

    /// Select a results page. Values below 1 are recorded and ignored.
    pub fn page(&mut self, page: i64) -> &mut Self {
        match Pagination::check_page(page) {
            Ok(page) => self.pagination.page = page,
            Err(error) => self.record(error),
        }
        self
    }

    /// Set results per page. Values outside 1..=100 are recorded and ignored.
    pub fn page_size(&mut self, page_size: i64) -> &mut Self {
        match Pagination::check_page_size(page_size) {
            Ok(page_size) => self.pagination.page_size = page_size,
            Err(error) => self.record(error),
        }
        self
    }

    /// Minimum grade the built query will carry
    pub fn effective_min_grade(&self) -> Grade {
        self.min_grade.unwrap_or(self.grade_floor)
    }

    /// Problems recorded so far, excluding checks deferred to build
    pub fn errors(&self) -> &[QueryError] {
        &self.errors
    }

    /// Assemble the filter expression in its fixed field order
    pub fn filter_expression(&self) -> FilterExpression {
        let mut expression = FilterExpression::new();

        if !self.configurations.is_empty() {
            expression.push(Clause::any_of(
                attributes::CONFIGURATION,
                self.configurations.iter().map(Configuration::as_str),
            ));
        }
        if let Some(term) = &self.term {
            expression.push(Clause::contains(attributes::NAME, term.as_str()));
        }
        if !self.hold_sets.is_empty() {
            expression.push(Clause::any_of(
                attributes::HOLDSETS,
                self.hold_sets.iter().map(HoldSet::as_str),
            ));
        }
        expression.extend(self.filters.iter().map(Filter::clause));
        expression.push(Clause::equals(
            attributes::MIN_GRADE,
            self.effective_min_grade().as_str(),
        ));
        expression.push(Clause::equals(attributes::MAX_GRADE, self.max_grade.as_str()));

        expression
    }

    /// Build the query.
    ///
    /// Always returns a query. Problems recorded by earlier calls are returned
    /// with it, followed by an inverted grade range if there is one. Building
    /// again from the same state gives the same result.
    pub fn build(&self) -> BuildResult<Query> {
        let mut errors = self.errors.clone();

        let min_grade = self.effective_min_grade();
        if min_grade > self.max_grade {
            let error = QueryError::GradeRangeInverted {
                min: min_grade.to_string(),
                max: self.max_grade.to_string(),
            };
            tracing::debug!(code = error.error_code(), %error, "Query validation error");
            errors.push(error);
        }

        let query = Query::new(
            self.sort.map(|key| key.token()).unwrap_or_default(),
            self.filter_expression().to_string(),
            self.pagination.page,
            self.pagination.page_size,
        );

        tracing::debug!(
            sort = query.sort(),
            filter = query.filter(),
            page = query.page(),
            page_size = query.page_size(),
            errors = errors.len(),
            "Built query"
        );

        BuildResult::with_errors(query, errors)
    }
}

/// Helper functions for common searches
pub mod presets {
    use super::*;

    /// Benchmarks on the 40 degree board, easiest first
    pub fn forty_benchmarks() -> QueryBuilder {
        let mut builder = QueryBuilder::new();
        builder
            .configuration(Configuration::Forty)
            .filter(Filter::Benchmarks)
            .sort(Order::Difficulty, true);
        builder
    }

    /// The signed-in user's logged ascents, most recent first
    pub fn my_ascents() -> QueryBuilder {
        let mut builder = QueryBuilder::new();
        builder.filter(Filter::MyAscents).sort(Order::Newest, false);
        builder
    }

    /// Most repeated problems within a grade band
    pub fn popular_between(min: Grade, max: Grade) -> QueryBuilder {
        let mut builder = QueryBuilder::new();
        builder
            .min_grade(min)
            .max_grade(max)
            .sort(Order::Repeats, false);
        builder
    }
}
