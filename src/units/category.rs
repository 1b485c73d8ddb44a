use crate::units::unit::Unit;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A measurement domain supported by the converter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Height,
    Weight,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Height, Category::Weight];

    /// Units of this category in the order the form lists them
    pub fn units(&self) -> &'static [Unit] {
        match self {
            Category::Height => &[
                Unit::Centimeters,
                Unit::Meters,
                Unit::Inches,
                Unit::Feet,
            ],
            Category::Weight => &[
                Unit::Grams,
                Unit::Kilograms,
                Unit::Ounces,
                Unit::Pounds,
            ],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Height => "height",
            Category::Weight => "weight",
        }
    }

    pub fn contains(&self, unit: Unit) -> bool {
        unit.category() == *self
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCategoryError(pub String);

impl fmt::Display for ParseCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown category: '{}'", self.0)
    }
}

impl std::error::Error for ParseCategoryError {}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "height" => Ok(Category::Height),
            "weight" => Ok(Category::Weight),
            _ => Err(ParseCategoryError(s.to_string())),
        }
    }
}
