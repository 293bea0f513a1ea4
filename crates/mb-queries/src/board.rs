//! Board setups: wall angle and hold sets
//!
//! Each value carries the literal the catalog expects inside a quoted list.

use std::fmt;
use std::str::FromStr;

use mb_core::error::ParseError;
use serde::{Deserialize, Serialize};

use crate::grades::Grade;

/// Board angle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Configuration {
    /// 40 degree board
    Forty,
    /// 25 degree board
    Twenty,
}

impl Configuration {
    pub const ALL: [Configuration; 2] = [Configuration::Forty, Configuration::Twenty];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Forty => "40° MoonBoard",
            Self::Twenty => "25° MoonBoard",
        }
    }

    /// Easiest grade set on this board when it is searched on its own
    pub fn grade_floor(&self) -> Grade {
        match self {
            Self::Forty => Grade::SixAPlus,
            Self::Twenty => Grade::LOWEST,
        }
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Configuration {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "forty" => Ok(Self::Forty),
            "twenty" => Ok(Self::Twenty),
            _ => Err(ParseError::Configuration(s.to_string())),
        }
    }
}

/// Hold type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HoldSet {
    /// Original school holds
    OS,
    /// Wooden holds
    Wood,
    A,
    B,
    C,
}

impl HoldSet {
    pub const ALL: [HoldSet; 5] = [HoldSet::OS, HoldSet::Wood, HoldSet::A, HoldSet::B, HoldSet::C];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OS => "original school holds",
            Self::Wood => "wooden holds",
            Self::A => "hold set a",
            Self::B => "hold set b",
            Self::C => "hold set c",
        }
    }
}

impl fmt::Display for HoldSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HoldSet {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "os" => Ok(Self::OS),
            "wood" => Ok(Self::Wood),
            "a" => Ok(Self::A),
            "b" => Ok(Self::B),
            "c" => Ok(Self::C),
            _ => Err(ParseError::HoldSet(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_literals() {
        assert_eq!(Configuration::Forty.as_str(), "40° MoonBoard");
        assert_eq!(Configuration::Twenty.to_string(), "25° MoonBoard");
    }

    #[test]
    fn test_configuration_floor() {
        assert_eq!(Configuration::Forty.grade_floor(), Grade::SixAPlus);
        assert_eq!(Configuration::Twenty.grade_floor(), Grade::FivePlus);
    }

    #[test]
    fn test_configuration_parsing() {
        assert_eq!("FORTY".parse::<Configuration>(), Ok(Configuration::Forty));
        assert_eq!("twenty".parse::<Configuration>(), Ok(Configuration::Twenty));
        assert!("Test".parse::<Configuration>().is_err());
        assert!("40".parse::<Configuration>().is_err());
    }

    #[test]
    fn test_hold_set_literals() {
        let literals: Vec<&str> = HoldSet::ALL.iter().map(HoldSet::as_str).collect();
        assert_eq!(
            literals,
            vec![
                "original school holds",
                "wooden holds",
                "hold set a",
                "hold set b",
                "hold set c"
            ]
        );
    }

    #[test]
    fn test_hold_set_parsing() {
        assert_eq!("OS".parse::<HoldSet>(), Ok(HoldSet::OS));
        assert_eq!("Wood".parse::<HoldSet>(), Ok(HoldSet::Wood));
        assert_eq!("c".parse::<HoldSet>(), Ok(HoldSet::C));
        assert_eq!(
            "Test".parse::<HoldSet>(),
            Err(ParseError::HoldSet("Test".to_string()))
        );
    }
}
