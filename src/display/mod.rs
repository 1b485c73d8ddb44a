pub mod formatter;

pub use formatter::{format_conversion, format_converted, format_original, DisplayPreferences};
