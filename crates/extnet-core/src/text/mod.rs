//! String helpers: positional formatting, date validation, decimal literals.

mod date;
mod decimal;
mod error;
mod format;

pub use date::{is_date, is_date_with_formats, is_w3c_date};
pub use decimal::fractional_digits;
pub use error::FormatError;
pub use format::format_with;
