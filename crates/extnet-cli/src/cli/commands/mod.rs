//! CLI command handlers. Each command is in its own file; all write their result to `out`.

mod add_params;
mod anchor;
mod color;
mod compare;
mod domain;
mod format;
mod fraction_digits;
mod is_date;
mod params;

pub use add_params::run_add_params;
pub use anchor::run_anchor;
pub use color::run_color;
pub use compare::run_compare;
pub use domain::run_domain;
pub use format::run_format;
pub use fraction_digits::run_fraction_digits;
pub use is_date::run_is_date;
pub use params::run_params;
