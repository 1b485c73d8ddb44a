use crate::convert::error::ConvertError;
use crate::convert::table::CONVERSION_TABLE;
use crate::input::parse_value;
use crate::units::{Category, Unit};
use log::debug;

/// Convert `value` from one unit to another within a category.
///
/// Unit checks run before the value check, so identical units are always
/// reported as an unsupported conversion, whatever the value.
pub fn convert(category: Category, from: Unit, to: Unit, value: f64) -> Result<f64, ConvertError> {
    let factor = lookup_factor(category, from, to)?;

    if !value.is_finite() {
        return Err(ConvertError::InvalidInput(format!(
            "'{}' is not a finite number",
            value
        )));
    }

    let result = value * factor;
    debug!(
        "{}: {} {} -> {} {} (factor {})",
        category, value, from, result, to, factor
    );
    Ok(result)
}

/// String-keyed entry point used by the CLI and the web bindings
pub fn convert_str(
    category: &str,
    from: &str,
    to: &str,
    value: &str,
) -> Result<f64, ConvertError> {
    let category: Category = category
        .parse()
        .map_err(|e| ConvertError::UnsupportedConversion(format!("{}", e)))?;
    let from = parse_unit_in(category, from)?;
    let to = parse_unit_in(category, to)?;

    lookup_factor(category, from, to)?;
    let value = parse_value(value)?;
    convert(category, from, to, value)
}

/// Validate the unit pair and return its factor
pub fn lookup_factor(category: Category, from: Unit, to: Unit) -> Result<f64, ConvertError> {
    if from == to {
        return Err(ConvertError::UnsupportedConversion(format!(
            "source and target are both '{}'",
            from
        )));
    }

    for unit in [from, to] {
        if !category.contains(unit) {
            return Err(ConvertError::UnsupportedConversion(format!(
                "unit '{}' is not a {} unit",
                unit, category
            )));
        }
    }

    CONVERSION_TABLE.factor(category, from, to).ok_or_else(|| {
        ConvertError::UnsupportedConversion(format!("no factor defined for {} -> {}", from, to))
    })
}

fn parse_unit_in(category: Category, symbol: &str) -> Result<Unit, ConvertError> {
    symbol.parse::<Unit>().map_err(|_| {
        ConvertError::UnsupportedConversion(format!(
            "unknown {} unit '{}'",
            category,
            symbol.trim()
        ))
    })
}
