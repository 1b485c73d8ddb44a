pub mod converter;
pub mod error;
pub mod table;


pub use converter::{convert, convert_str, lookup_factor};
pub use error::ConvertError;
pub use table::{ConversionTable, TableEntry, CONVERSION_TABLE};
