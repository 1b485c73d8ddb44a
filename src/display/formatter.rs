use crate::form::Conversion;
use crate::units::Unit;
use serde::{Deserialize, Serialize};

/// How conversion results are rendered
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DisplayPreferences {
    /// Fixed number of decimals for the converted value
    #[serde(default = "default_decimals")]
    pub decimals: usize,
    /// Use unit names ("Meters") rather than symbols ("m")
    #[serde(default = "default_unit_names")]
    pub unit_names: bool,
}

fn default_decimals() -> usize {
    2
}

fn default_unit_names() -> bool {
    true
}

impl Default for DisplayPreferences {
    fn default() -> Self {
        Self {
            decimals: default_decimals(),
            unit_names: default_unit_names(),
        }
    }
}

impl DisplayPreferences {
    fn unit_text(&self, unit: Unit) -> &'static str {
        if self.unit_names {
            unit.name()
        } else {
            unit.symbol()
        }
    }
}

/// Left-hand side of the result line, e.g. "100 Centimeters ="
pub fn format_original(conversion: &Conversion, prefs: &DisplayPreferences) -> String {
    format!("{} {} =", conversion.value, prefs.unit_text(conversion.from))
}

/// Converted value with fixed decimals, e.g. "1.00 Meters"
pub fn format_converted(conversion: &Conversion, prefs: &DisplayPreferences) -> String {
    format!(
        "{:.*} {}",
        prefs.decimals,
        conversion.result,
        prefs.unit_text(conversion.to)
    )
}

/// Both halves on one line
pub fn format_conversion(conversion: &Conversion, prefs: &DisplayPreferences) -> String {
    format!(
        "{} {}",
        format_original(conversion, prefs),
        format_converted(conversion, prefs)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::Category;

    fn conversion(from: Unit, to: Unit, value: f64, result: f64) -> Conversion {
        Conversion {
            category: from.category(),
            from,
            to,
            value,
            result,
        }
    }

    #[test]
    fn test_default_formatting() {
        let c = conversion(Unit::Centimeters, Unit::Meters, 100.0, 1.0);
        let prefs = DisplayPreferences::default();
        assert_eq!(format_original(&c, &prefs), "100 Centimeters =");
        assert_eq!(format_converted(&c, &prefs), "1.00 Meters");
        assert_eq!(format_conversion(&c, &prefs), "100 Centimeters = 1.00 Meters");
    }

    #[test]
    fn test_rounds_to_configured_decimals() {
        let c = conversion(Unit::Inches, Unit::Feet, 12.0, 0.9999996);
        assert_eq!(
            format_converted(&c, &DisplayPreferences::default()),
            "1.00 Feet"
        );

        let prefs = DisplayPreferences {
            decimals: 4,
            unit_names: false,
        };
        assert_eq!(format_converted(&c, &prefs), "1.0000 ft");
        assert_eq!(format_original(&c, &prefs), "12 in =");
    }

    #[test]
    fn test_fractional_original_value() {
        let c = conversion(Unit::Pounds, Unit::Kilograms, 1.5, 0.680388);
        assert_eq!(c.category, Category::Weight);
        assert_eq!(
            format_conversion(&c, &DisplayPreferences::default()),
            "1.5 Pounds = 0.68 Kilograms"
        );
    }
}
