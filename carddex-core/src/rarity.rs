//! Card rarity: five grades, optionally marked as a parallel print.
//!
//! Serialized as the short string used by both the official listing and
//! the card store: `C`, `U`, `R`, `SR`, `SEC`, with a `-P` suffix for
//! parallel variants only. Promo reprints share their base card's rarity
//! and never carry the suffix.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RarityError {
    #[error("unknown rarity: '{0}'")]
    Unknown(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RarityGrade {
    Common,
    Uncommon,
    Rare,
    SuperRare,
    Secret,
}

impl RarityGrade {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Common => "C",
            Self::Uncommon => "U",
            Self::Rare => "R",
            Self::SuperRare => "SR",
            Self::Secret => "SEC",
        }
    }
}

/// A rarity token such as `"R"` or `"SR-P"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rarity {
    pub grade: RarityGrade,
    pub parallel: bool,
}

impl Rarity {
    pub fn new(grade: RarityGrade) -> Self {
        Self {
            grade,
            parallel: false,
        }
    }

    /// The same grade with the parallel marker set.
    pub fn as_parallel(self) -> Self {
        Self {
            parallel: true,
            ..self
        }
    }

    /// The same grade with the parallel marker cleared.
    pub fn as_base(self) -> Self {
        Self {
            parallel: false,
            ..self
        }
    }
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.parallel {
            write!(f, "{}-P", self.grade.as_str())
        } else {
            f.write_str(self.grade.as_str())
        }
    }
}

impl std::str::FromStr for Rarity {
    type Err = RarityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (body, parallel) = match trimmed.strip_suffix("-P") {
            Some(body) => (body, true),
            None => (trimmed, false),
        };

        let grade = match body {
            "C" => RarityGrade::Common,
            "U" => RarityGrade::Uncommon,
            "R" => RarityGrade::Rare,
            "SR" => RarityGrade::SuperRare,
            "SEC" => RarityGrade::Secret,
            _ => return Err(RarityError::Unknown(trimmed.to_string())),
        };

        Ok(Self { grade, parallel })
    }
}

impl TryFrom<String> for Rarity {
    type Error = RarityError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rarity> for String {
    fn from(value: Rarity) -> Self {
        value.to_string()
    }
}
