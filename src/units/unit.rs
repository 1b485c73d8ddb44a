use crate::units::category::Category;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named measurement unit. Every unit belongs to exactly one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
pub enum Unit {
    #[serde(rename = "cm")]
    Centimeters,
    #[serde(rename = "m")]
    Meters,
    #[serde(rename = "in")]
    Inches,
    #[serde(rename = "ft")]
    Feet,
    #[serde(rename = "g")]
    Grams,
    #[serde(rename = "kg")]
    Kilograms,
    #[serde(rename = "oz")]
    Ounces,
    #[serde(rename = "lb")]
    Pounds,
}

impl Unit {
    pub const ALL: [Unit; 8] = [
        Unit::Centimeters,
        Unit::Meters,
        Unit::Inches,
        Unit::Feet,
        Unit::Grams,
        Unit::Kilograms,
        Unit::Ounces,
        Unit::Pounds,
    ];

    pub fn category(&self) -> Category {
        match self {
            Unit::Centimeters | Unit::Meters | Unit::Inches | Unit::Feet => Category::Height,
            Unit::Grams | Unit::Kilograms | Unit::Ounces | Unit::Pounds => Category::Weight,
        }
    }

    /// Short symbol used as the unit's key (e.g. "cm")
    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Centimeters => "cm",
            Unit::Meters => "m",
            Unit::Inches => "in",
            Unit::Feet => "ft",
            Unit::Grams => "g",
            Unit::Kilograms => "kg",
            Unit::Ounces => "oz",
            Unit::Pounds => "lb",
        }
    }

    /// Display name (e.g. "Centimeters")
    pub fn name(&self) -> &'static str {
        match self {
            Unit::Centimeters => "Centimeters",
            Unit::Meters => "Meters",
            Unit::Inches => "Inches",
            Unit::Feet => "Feet",
            Unit::Grams => "Grams",
            Unit::Kilograms => "Kilograms",
            Unit::Ounces => "Ounces",
            Unit::Pounds => "Pounds",
        }
    }

    /// Option label shown in unit pickers, e.g. "Centimeters (cm)"
    pub fn label(&self) -> String {
        format!("{} ({})", self.name(), self.symbol())
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseUnitError(pub String);

impl fmt::Display for ParseUnitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown unit: '{}'", self.0)
    }
}

impl std::error::Error for ParseUnitError {}

impl FromStr for Unit {
    type Err = ParseUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Unit::ALL
            .iter()
            .copied()
            .find(|unit| unit.symbol() == lower)
            .ok_or_else(|| ParseUnitError(s.to_string()))
    }
}

/// Display name for a unit symbol within a category.
/// Falls back to the symbol itself when it is not one of the category's units.
pub fn unit_name(category: Category, symbol: &str) -> String {
    match symbol.parse::<Unit>() {
        Ok(unit) if category.contains(unit) => unit.name().to_string(),
        _ => symbol.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_symbols() {
        assert_eq!("cm".parse::<Unit>(), Ok(Unit::Centimeters));
        assert_eq!("IN".parse::<Unit>(), Ok(Unit::Inches));
        assert_eq!(" lb ".parse::<Unit>(), Ok(Unit::Pounds));
        assert!("yd".parse::<Unit>().is_err());
        assert!("Centimeters".parse::<Unit>().is_err());
    }

    #[test]
    fn test_symbol_round_trips_through_parse() {
        for unit in Unit::ALL {
            assert_eq!(unit.symbol().parse::<Unit>(), Ok(unit));
        }
    }

    #[test]
    fn test_label() {
        assert_eq!(Unit::Centimeters.label(), "Centimeters (cm)");
        assert_eq!(Unit::Pounds.label(), "Pounds (lb)");
    }

    #[test]
    fn test_unit_name_fallback() {
        assert_eq!(unit_name(Category::Height, "ft"), "Feet");
        assert_eq!(unit_name(Category::Height, "kg"), "kg");
        assert_eq!(unit_name(Category::Weight, "stone"), "stone");
    }

    #[test]
    fn test_serde_uses_symbols() {
        assert_eq!(serde_json::to_string(&Unit::Inches).unwrap(), "\"in\"");
        let unit: Unit = serde_json::from_str("\"oz\"").unwrap();
        assert_eq!(unit, Unit::Ounces);
    }
}
