//! Address modeling and the query-string codec.
//!
//! Addresses keep the text they were parsed from, so building a query onto
//! `http://example.com` yields `http://example.com?x=1&` rather than the
//! normalized `http://example.com/?x=1&`.

mod address;
mod decode;
mod encode;
mod error;

pub use address::{Address, AddressKind};
pub use decode::parameters_query;
pub use encode::{add_parameters, to_query_string, with_anchor};
pub use error::UriError;
