use crate::units::{Category, Unit};
use lazy_static::lazy_static;
use std::collections::BTreeMap;

// Literal factors. Directions are rounded independently, so a -> b -> a
// is not guaranteed to return the starting value.
const HEIGHT_FACTORS: [(Unit, Unit, f64); 12] = [
    (Unit::Centimeters, Unit::Meters, 0.01),
    (Unit::Centimeters, Unit::Inches, 0.393701),
    (Unit::Centimeters, Unit::Feet, 0.0328084),
    (Unit::Meters, Unit::Centimeters, 100.0),
    (Unit::Meters, Unit::Inches, 39.3701),
    (Unit::Meters, Unit::Feet, 3.28084),
    (Unit::Inches, Unit::Centimeters, 2.54),
    (Unit::Inches, Unit::Meters, 0.0254),
    (Unit::Inches, Unit::Feet, 0.0833333),
    (Unit::Feet, Unit::Centimeters, 30.48),
    (Unit::Feet, Unit::Meters, 0.3048),
    (Unit::Feet, Unit::Inches, 12.0),
];

const WEIGHT_FACTORS: [(Unit, Unit, f64); 12] = [
    (Unit::Grams, Unit::Kilograms, 0.001),
    (Unit::Grams, Unit::Ounces, 0.035274),
    (Unit::Grams, Unit::Pounds, 0.00220462),
    (Unit::Kilograms, Unit::Grams, 1000.0),
    (Unit::Kilograms, Unit::Ounces, 35.274),
    (Unit::Kilograms, Unit::Pounds, 2.20462),
    (Unit::Ounces, Unit::Grams, 28.3495),
    (Unit::Ounces, Unit::Kilograms, 0.0283495),
    (Unit::Ounces, Unit::Pounds, 0.0625),
    (Unit::Pounds, Unit::Grams, 453.592),
    (Unit::Pounds, Unit::Kilograms, 0.453592),
    (Unit::Pounds, Unit::Ounces, 16.0),
];

lazy_static! {
    /// Process-wide conversion table, built on first use and never mutated
    pub static ref CONVERSION_TABLE: ConversionTable = ConversionTable::builtin();
}

/// A single defined conversion
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableEntry {
    pub category: Category,
    pub from: Unit,
    pub to: Unit,
    pub factor: f64,
}

/// Mapping from (category, source unit, target unit) to a multiplicative factor.
/// Identity pairs are never present.
#[derive(Debug, Clone)]
pub struct ConversionTable {
    factors: BTreeMap<(Category, Unit, Unit), f64>,
}

impl ConversionTable {
    pub fn builtin() -> Self {
        let mut factors = BTreeMap::new();
        for (from, to, factor) in HEIGHT_FACTORS {
            factors.insert((Category::Height, from, to), factor);
        }
        for (from, to, factor) in WEIGHT_FACTORS {
            factors.insert((Category::Weight, from, to), factor);
        }
        Self { factors }
    }

    /// Factor for the pair, if one is defined
    pub fn factor(&self, category: Category, from: Unit, to: Unit) -> Option<f64> {
        self.factors.get(&(category, from, to)).copied()
    }

    pub fn len(&self) -> usize {
        self.factors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }

    /// All entries, ordered by category then source then target unit
    pub fn entries(&self) -> impl Iterator<Item = TableEntry> + '_ {
        self.factors
            .iter()
            .map(|(&(category, from, to), &factor)| TableEntry {
                category,
                from,
                to,
                factor,
            })
    }

    pub fn entries_for(&self, category: Category) -> impl Iterator<Item = TableEntry> + '_ {
        self.entries().filter(move |e| e.category == category)
    }
}
