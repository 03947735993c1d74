use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const FORMATIVE_QUOTA: f64 = 60.0;
pub const SUMMATIVE_QUOTA: f64 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "FA")]
    Formative,
    #[serde(rename = "SA")]
    Summative,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Formative => "FA",
            Category::Summative => "SA",
        }
    }

    /// Maximum cumulative weight the category accepts.
    pub fn quota(&self) -> f64 {
        match self {
            Category::Formative => FORMATIVE_QUOTA,
            Category::Summative => SUMMATIVE_QUOTA,
        }
    }
}

/// Returned when text is neither `FA` nor `SA`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownCategory;

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("expected FA or SA")
    }
}

impl std::error::Error for UnknownCategory {}

/// Case-insensitive, ignores surrounding whitespace.
impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_ascii_uppercase().as_str() {
            "FA" => Ok(Category::Formative),
            "SA" => Ok(Category::Summative),
            _ => Err(UnknownCategory),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub name: String,
    pub category: Category,
    pub score: f64,
    pub weight: f64,
}

impl Assignment {
    pub fn new(name: impl Into<String>, category: Category, score: f64, weight: f64) -> Self {
        Self {
            name: name.into(),
            category,
            score,
            weight,
        }
    }

    pub fn weighted_score(&self) -> f64 {
        (self.score / 100.0) * self.weight
    }
}
