//! Sort orders
//!
//! The catalog accepts exactly one sort token. Difficulty and repeats honour
//! the requested direction; newest and rating are always descending.

use std::fmt;
use std::str::FromStr;

use mb_core::error::ParseError;
use serde::{Deserialize, Serialize};

const ASC_SUFFIX: &str = "-asc";
const DESC_SUFFIX: &str = "-desc";

/// Sort dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Order {
    /// Most recently added first
    Newest,
    /// By grade
    Difficulty,
    /// By user rating
    Rating,
    /// By number of repeats
    Repeats,
}

impl Order {
    pub const ALL: [Order; 4] = [Order::Newest, Order::Difficulty, Order::Rating, Order::Repeats];

    /// Name used in the sort token
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Newest => "New",
            Self::Difficulty => "Grade",
            Self::Rating => "Rating",
            Self::Repeats => "Repeats",
        }
    }

    /// Whether the catalog honours an ascending request for this order
    pub fn is_directional(&self) -> bool {
        matches!(self, Self::Difficulty | Self::Repeats)
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Order {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "new" | "newest" => Ok(Self::Newest),
            "grade" | "difficulty" => Ok(Self::Difficulty),
            "rating" => Ok(Self::Rating),
            "repeats" => Ok(Self::Repeats),
            _ => Err(ParseError::Order(s.to_string())),
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn from_ascending(ascending: bool) -> Self {
        if ascending {
            Self::Asc
        } else {
            Self::Desc
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Asc => "Asc",
            Self::Desc => "Desc",
        }
    }

    fn suffix(&self) -> &'static str {
        match self {
            Self::Asc => ASC_SUFFIX,
            Self::Desc => DESC_SUFFIX,
        }
    }
}

/// A resolved sort: an order plus the direction the catalog will apply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    order: Order,
    direction: SortDirection,
}

impl SortKey {
    /// Resolve a requested sort; non-directional orders ignore `ascending`
    pub fn new(order: Order, ascending: bool) -> Self {
        let direction = if order.is_directional() {
            SortDirection::from_ascending(ascending)
        } else {
            SortDirection::Desc
        };
        Self { order, direction }
    }

    pub fn order(&self) -> Order {
        self.order
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Token sent as the `sort` parameter
    pub fn token(&self) -> String {
        if self.order.is_directional() {
            format!(
                "{}{}{}",
                self.order.as_str(),
                self.direction.label(),
                self.direction.suffix()
            )
        } else {
            format!("{}{}", self.order.as_str(), DESC_SUFFIX)
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token())
    }
}
