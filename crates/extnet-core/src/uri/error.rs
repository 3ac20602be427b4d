//! Error type shared by address parsing and the query-string codec.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UriError {
    /// A required input is missing or unusable (e.g. empty address text).
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    /// The input could not be read as an address or as `key=value` tokens.
    #[error("malformed input '{input}': {reason}")]
    MalformedInput { input: String, reason: String },
}

impl UriError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        UriError::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }

    pub(crate) fn malformed(input: impl Into<String>, reason: impl Into<String>) -> Self {
        UriError::MalformedInput {
            input: input.into(),
            reason: reason.into(),
        }
    }
}
