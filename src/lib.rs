pub mod config;
pub mod convert;
pub mod display;
pub mod form;
pub mod input;
pub mod units;

#[cfg(not(target_arch = "wasm32"))]
pub mod logging;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use convert::{convert, convert_str, ConvertError};
pub use units::{Category, Unit};
