use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// The value is not a finite number
    InvalidInput(String),
    /// Identical units, a unit outside the category, or no factor for the pair
    UnsupportedConversion(String),
}

impl ConvertError {
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, ConvertError::InvalidInput(_))
    }

    pub fn is_unsupported(&self) -> bool {
        matches!(self, ConvertError::UnsupportedConversion(_))
    }
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            ConvertError::UnsupportedConversion(msg) => {
                write!(f, "Unsupported conversion: {}", msg)
            }
        }
    }
}

impl std::error::Error for ConvertError {}
