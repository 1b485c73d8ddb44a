// Parsing of user-entered text: bare values and "value unit" expressions

pub mod detector;
pub mod value;

pub use detector::{looks_like_quantity, parse_quantity};
pub use value::{is_numeric, parse_value};
