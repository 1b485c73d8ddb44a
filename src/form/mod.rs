// Converter form logic without any DOM: state in, status/result out

pub mod state;
pub mod submit;

#[cfg(test)]
mod tests;

pub use state::{unit_options, FormState, FormStatus, UnitOption};
pub use submit::{Conversion, FormError};
