use crate::convert::ConvertError;
use crate::units::Unit;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Matches a number followed by a unit symbol
    /// Examples: "12 in", "1.80 m", "-3kg", "1e3 g"
    static ref QUANTITY_PATTERN: Regex = Regex::new(
        r"^(-?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?)\s*([a-zA-Z]+)$"
    )
    .expect("quantity pattern is a valid regex");
}

/// Check if a string looks like a "value unit" expression
pub fn looks_like_quantity(s: &str) -> bool {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return false;
    }

    QUANTITY_PATTERN.is_match(trimmed)
}

/// Split a "value unit" expression into its number and unit.
/// The unit's category comes from `Unit::category`.
pub fn parse_quantity(s: &str) -> Result<(f64, Unit), ConvertError> {
    let trimmed = s.trim();
    let captures = QUANTITY_PATTERN.captures(trimmed).ok_or_else(|| {
        ConvertError::InvalidInput(format!("'{}' is not a value followed by a unit", trimmed))
    })?;

    let value = captures[1]
        .parse::<f64>()
        .map_err(|_| ConvertError::InvalidInput(format!("'{}' is not a number", &captures[1])))?;
    if !value.is_finite() {
        return Err(ConvertError::InvalidInput(format!(
            "'{}' is not a finite number",
            &captures[1]
        )));
    }

    let unit = captures[2].parse::<Unit>().map_err(|_| {
        ConvertError::UnsupportedConversion(format!("unknown unit '{}'", &captures[2]))
    })?;

    Ok((value, unit))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_detection() {
        assert!(looks_like_quantity("12 in"));
        assert!(looks_like_quantity("1.80 m"));
        assert!(looks_like_quantity("-3kg"));
        assert!(looks_like_quantity("1e3 g"));
        assert!(looks_like_quantity(" .5 lb "));

        assert!(!looks_like_quantity("100"));
        assert!(!looks_like_quantity("ft"));
        assert!(!looks_like_quantity("hello world"));
        assert!(!looks_like_quantity("5 kg/s"));
        assert!(!looks_like_quantity(""));
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("12 in"), Ok((12.0, Unit::Inches)));
        assert_eq!(parse_quantity("1.5KG"), Ok((1.5, Unit::Kilograms)));
        assert_eq!(parse_quantity("-2 ft"), Ok((-2.0, Unit::Feet)));
    }

    #[test]
    fn test_parse_quantity_errors() {
        assert!(parse_quantity("twelve inches").unwrap_err().is_invalid_input());
        assert!(parse_quantity("12").unwrap_err().is_invalid_input());
        assert!(parse_quantity("12 yd").unwrap_err().is_unsupported());
        assert!(parse_quantity("1e400 m").unwrap_err().is_invalid_input());
    }
}
