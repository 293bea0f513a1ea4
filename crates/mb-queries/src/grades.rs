//! Grade scale
//!
//! Grades form a total order by rank, from `5+` up to `8B+`. Range checks and
//! the configuration-driven minimum both compare ranks, never display strings.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use mb_core::error::ParseError;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Shape of a grade written by a user, before table lookup
static GRADE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(5\+|[6-8][ABC]?\+?)$").unwrap());

const GRADE_STRINGS: [&str; 17] = [
    "5+", "6A", "6A+", "6B", "6B+", "6C", "6C+", "7A", "7A+", "7B", "7B+", "7C", "7C+", "8A",
    "8A+", "8B", "8B+",
];

/// Climbing difficulty, ordered by rank
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
#[repr(u8)]
pub enum Grade {
    FivePlus = 0,
    SixA,
    SixAPlus,
    SixB,
    SixBPlus,
    SixC,
    SixCPlus,
    SevenA,
    SevenAPlus,
    SevenB,
    SevenBPlus,
    SevenC,
    SevenCPlus,
    EightA,
    EightAPlus,
    EightB,
    EightBPlus,
}

impl Grade {
    pub const LOWEST: Grade = Grade::FivePlus;
    pub const HIGHEST: Grade = Grade::EightBPlus;

    /// Every grade in ascending order
    pub const ALL: [Grade; 17] = [
        Grade::FivePlus,
        Grade::SixA,
        Grade::SixAPlus,
        Grade::SixB,
        Grade::SixBPlus,
        Grade::SixC,
        Grade::SixCPlus,
        Grade::SevenA,
        Grade::SevenAPlus,
        Grade::SevenB,
        Grade::SevenBPlus,
        Grade::SevenC,
        Grade::SevenCPlus,
        Grade::EightA,
        Grade::EightAPlus,
        Grade::EightB,
        Grade::EightBPlus,
    ];

    /// Position in the total order, 0 for the lowest grade
    pub fn rank(self) -> u8 {
        self as u8
    }

    pub fn from_rank(rank: u8) -> Option<Self> {
        Self::ALL.get(usize::from(rank)).copied()
    }

    /// Display string used by the catalog
    pub fn as_str(self) -> &'static str {
        GRADE_STRINGS[usize::from(self.rank())]
    }

    /// Next harder grade, if any
    pub fn harder(self) -> Option<Self> {
        Self::from_rank(self.rank() + 1)
    }

    /// Next easier grade, if any
    pub fn easier(self) -> Option<Self> {
        self.rank().checked_sub(1).and_then(Self::from_rank)
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Grade {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !GRADE_PATTERN.is_match(s) {
            return Err(ParseError::Grade(s.to_string()));
        }
        let upper = s.to_uppercase();
        GRADE_STRINGS
            .iter()
            .position(|g| *g == upper)
            .and_then(|rank| Self::from_rank(rank as u8))
            .ok_or_else(|| ParseError::Grade(s.to_string()))
    }
}

impl TryFrom<String> for Grade {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Grade> for String {
    fn from(grade: Grade) -> Self {
        grade.as_str().to_string()
    }
}
