// Measurement categories and the units that belong to each of them

pub mod category;
pub mod unit;

pub use category::{Category, ParseCategoryError};
pub use unit::{unit_name, ParseUnitError, Unit};
