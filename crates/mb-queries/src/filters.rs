//! Filter grammar
//!
//! The catalog reads its `filter` parameter as a flat conjunction of clauses:
//!
//! ```text
//! <Field><operator>'<value>'[~and~<Field><operator>'<value>']...
//! ```
//!
//! Multi-valued fields carry a comma separated list inside the quotes. Named
//! filters are clauses whose field name is the meaning and whose value is empty.

use std::fmt;
use std::str::FromStr;

use mb_core::error::ParseError;
use serde::{Deserialize, Serialize};

/// Separator between clauses
pub const AND: &str = "~and~";

/// Separator between values inside one quoted list
pub const VALUE_SEPARATOR: &str = ",";

/// Clause operators understood by the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOperator {
    /// Equals, or membership for quoted lists
    Equals,
    /// Substring match
    Contains,
}

impl FilterOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Equals => "~eq~",
            Self::Contains => "~contains~",
        }
    }
}

/// Known clause fields
pub mod attributes {
    pub const NAME: &str = "Name";
    pub const CONFIGURATION: &str = "Configuration";
    pub const HOLDSETS: &str = "Holdsets";
    pub const MIN_GRADE: &str = "MinGrade";
    pub const MAX_GRADE: &str = "MaxGrade";
}

/// Named server-side filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Filter {
    /// Benchmark problems only
    Benchmarks,
    /// Problems set by the signed-in user
    SetByMe,
    /// Problems the signed-in user has logged
    MyAscents,
}

impl Filter {
    pub const ALL: [Filter; 3] = [Filter::Benchmarks, Filter::SetByMe, Filter::MyAscents];

    /// Field name used as the clause
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Benchmarks => "Benchmarks",
            Self::SetByMe => "Setbyme",
            Self::MyAscents => "Myascents",
        }
    }

    pub fn clause(&self) -> Clause {
        Clause::equals(self.as_str(), "")
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Filter {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "benchmarks" => Ok(Self::Benchmarks),
            "setbyme" => Ok(Self::SetByMe),
            "myascents" => Ok(Self::MyAscents),
            _ => Err(ParseError::Filter(s.to_string())),
        }
    }
}

/// A single `<Field><operator>'<value>'` comparison
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    pub field: String,
    pub operator: FilterOperator,
    pub value: String,
}

impl Clause {
    pub fn new(field: impl Into<String>, operator: FilterOperator, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            operator,
            value: value.into(),
        }
    }

    pub fn equals(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(field, FilterOperator::Equals, value)
    }

    pub fn contains(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(field, FilterOperator::Contains, value)
    }

    /// Membership clause over a quoted, comma separated list
    pub fn any_of<I, S>(field: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = values
            .into_iter()
            .map(|v| v.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(VALUE_SEPARATOR);
        Self::equals(field, joined)
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}'{}'", self.field, self.operator.as_str(), self.value)
    }
}

/// Clauses joined with `~and~`, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterExpression {
    clauses: Vec<Clause>,
}

impl FilterExpression {
    pub fn new() -> Self {
        Self { clauses: vec![] }
    }

    pub fn push(&mut self, clause: Clause) -> &mut Self {
        self.clauses.push(clause);
        self
    }

    pub fn extend<I: IntoIterator<Item = Clause>>(&mut self, clauses: I) -> &mut Self {
        self.clauses.extend(clauses);
        self
    }
}

impl fmt::Display for FilterExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, clause) in self.clauses.iter().enumerate() {
            if i > 0 {
                f.write_str(AND)?;
            }
            write!(f, "{}", clause)?;
        }
        Ok(())
    }
}
