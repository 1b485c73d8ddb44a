use crate::convert::{convert, ConvertError};
use crate::form::state::FormState;
use crate::input::parse_value;
use crate::units::{Category, Unit};
use log::warn;
use serde::Serialize;
use std::fmt;

/// A completed conversion
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Conversion {
    pub category: Category,
    pub from: Unit,
    pub to: Unit,
    pub value: f64,
    pub result: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormError {
    /// Category or a unit has not been selected
    Incomplete,
    SameUnits,
    InvalidNumber,
    Failed(ConvertError),
}

impl FormError {
    /// Text shown to the user in the form's error area
    pub fn user_message(&self) -> &'static str {
        match self {
            FormError::Incomplete => "Please select a conversion type and both units.",
            FormError::SameUnits => "Please select different units for conversion.",
            FormError::InvalidNumber => "Please enter a valid number.",
            FormError::Failed(_) => "Conversion failed. Please try again.",
        }
    }
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::Failed(e) => write!(f, "{} ({})", self.user_message(), e),
            _ => write!(f, "{}", self.user_message()),
        }
    }
}

impl std::error::Error for FormError {}

impl FormState {
    /// Run the conversion the form describes.
    ///
    /// Checks happen in the order the user sees them: selections, then
    /// identical units, then the number itself.
    pub fn submit(&self) -> Result<Conversion, FormError> {
        let result = self.try_submit();
        if let Err(ref e) = result {
            warn!("Rejected conversion request {:?}: {}", self, e);
        }
        result
    }

    fn try_submit(&self) -> Result<Conversion, FormError> {
        let (category, from, to) = match (self.category, self.from, self.to) {
            (Some(c), Some(f), Some(t)) => (c, f, t),
            _ => return Err(FormError::Incomplete),
        };

        if from == to {
            return Err(FormError::SameUnits);
        }

        let value = parse_value(&self.value).map_err(|_| FormError::InvalidNumber)?;
        let result = convert(category, from, to, value).map_err(FormError::Failed)?;

        Ok(Conversion {
            category,
            from,
            to,
            value,
            result,
        })
    }
}
