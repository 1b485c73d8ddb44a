use crate::convert::ConvertError;

/// Parse the text of a value field into a finite number.
///
/// The whole trimmed text must be numeric; "12abc", "NaN" and "inf" are rejected.
pub fn parse_value(text: &str) -> Result<f64, ConvertError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ConvertError::InvalidInput("value is empty".to_string()));
    }

    let value = trimmed
        .parse::<f64>()
        .map_err(|_| ConvertError::InvalidInput(format!("'{}' is not a number", trimmed)))?;

    if !value.is_finite() {
        return Err(ConvertError::InvalidInput(format!(
            "'{}' is not a finite number",
            trimmed
        )));
    }

    Ok(value)
}

/// True when the text would be accepted by `parse_value`
pub fn is_numeric(text: &str) -> bool {
    parse_value(text).is_ok()
}
